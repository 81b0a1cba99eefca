use cogex_core::Condition;
use rand::Rng;
use rand::seq::SliceRandom;

/// Uniform in-place shuffle
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Uniform pick. `items` must not be empty.
pub fn pick<T: Copy, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> T {
    items[rng.random_range(0..items.len())]
}

/// Picks from `items` until the value differs from `avoid`.
///
/// Returns `None` once `max_attempts` draws all hit `avoid`.
pub fn pick_other<T: Copy + PartialEq, R: Rng + ?Sized>(
    items: &[T],
    avoid: T,
    max_attempts: usize,
    rng: &mut R,
) -> Option<T> {
    (0..max_attempts)
        .map(|_| pick(items, rng))
        .find(|candidate| *candidate != avoid)
}

/// Condition labels for `n` trials: `n / k` per condition, remainder to the first.
///
/// Labels come out grouped by condition; callers shuffle the finished trials.
/// With `n < k` every trial lands in the first condition.
pub fn balanced_conditions(conditions: &[Condition], n: usize) -> Vec<Condition> {
    let Some((&first, rest)) = conditions.split_first() else {
        return Vec::new();
    };
    let per_condition = n / conditions.len();
    let remainder = n % conditions.len();

    let mut labels = Vec::with_capacity(n);
    labels.extend(std::iter::repeat_n(first, per_condition + remainder));
    for &condition in rest {
        labels.extend(std::iter::repeat_n(condition, per_condition));
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const PAIR: [Condition; 2] = [Condition::Congruent, Condition::Incongruent];
    const TRIPLE: [Condition; 3] = [Condition::Positive, Condition::Negative, Condition::Neutral];

    fn count(labels: &[Condition], c: Condition) -> usize {
        labels.iter().filter(|l| **l == c).count()
    }

    #[test]
    fn remainder_goes_to_first_condition() {
        let labels = balanced_conditions(&TRIPLE, 20);
        assert_eq!(labels.len(), 20);
        assert_eq!(count(&labels, Condition::Positive), 8);
        assert_eq!(count(&labels, Condition::Negative), 6);
        assert_eq!(count(&labels, Condition::Neutral), 6);
    }

    #[test]
    fn even_split() {
        let labels = balanced_conditions(&PAIR, 4);
        assert_eq!(
            labels,
            vec![
                Condition::Congruent,
                Condition::Congruent,
                Condition::Incongruent,
                Condition::Incongruent
            ]
        );
    }

    #[test]
    fn fewer_trials_than_conditions_is_degenerate() {
        assert_eq!(balanced_conditions(&TRIPLE, 2), vec![Condition::Positive; 2]);
        assert!(balanced_conditions(&TRIPLE, 0).is_empty());
        assert!(balanced_conditions(&[], 5).is_empty());
    }

    #[test]
    fn pick_other_never_returns_avoided_value() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let v = pick_other(&[1, 2, 3, 4], 3, 1000, &mut rng).unwrap();
            assert_ne!(v, 3);
        }
    }

    #[test]
    fn pick_other_gives_up_on_single_value_set() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_other(&[9], 9, 50, &mut rng), None);
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut items: Vec<u32> = (0..32).collect();
        shuffle(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<_>>());
    }
}
