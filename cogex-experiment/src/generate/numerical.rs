use crate::config::ExperimentConfig;
use crate::random::{balanced_conditions, pick, pick_other, shuffle};
use cogex_core::{Condition, Digit, DisplayPayload, FontSize, Side, StroopError, TrialSpec, Variant};
use rand::Rng;

/// 5 is left out so no digit sits on the midpoint
pub const DIGITS: [u8; 8] = [1, 2, 3, 4, 6, 7, 8, 9];

/// Digit pairs; pick the numerically larger side, ignore print size.
pub fn generate<R: Rng + ?Sized>(
    n: usize,
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<Vec<TrialSpec>, StroopError> {
    let mut trials = balanced_conditions(Variant::Numerical.conditions(), n)
        .into_iter()
        .map(|condition| trial(condition, config, rng))
        .collect::<Result<Vec<_>, _>>()?;
    shuffle(&mut trials, rng);
    Ok(trials)
}

fn trial<R: Rng + ?Sized>(
    condition: Condition,
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<TrialSpec, StroopError> {
    let first = pick(&DIGITS, rng);
    let second = pick_other(&DIGITS, first, config.max_resample_attempts, rng).ok_or(
        StroopError::GenerationExhausted {
            variant: Variant::Numerical,
            attempts: config.max_resample_attempts,
        },
    )?;
    let (left, right) = if rng.random_bool(0.5) {
        (first, second)
    } else {
        (second, first)
    };

    let larger_side = if left > right { Side::Left } else { Side::Right };
    // Print size of the numerically larger digit
    let larger_font = match condition {
        Condition::Incongruent => FontSize::Small,
        _ => FontSize::Large,
    };
    let smaller_font = match larger_font {
        FontSize::Large => FontSize::Small,
        FontSize::Small => FontSize::Large,
    };
    let (left_size, right_size) = match larger_side {
        Side::Left => (larger_font, smaller_font),
        Side::Right => (smaller_font, larger_font),
    };

    Ok(TrialSpec {
        variant: Variant::Numerical,
        condition,
        task_type: None,
        payload: DisplayPayload::DigitPair {
            left: Digit {
                value: left,
                size: left_size,
            },
            right: Digit {
                value: right,
                size: right_size,
            },
        },
        correct_answer: larger_side.name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn physical_size_follows_condition() {
        let mut rng = StdRng::seed_from_u64(21);
        let trials = generate(120, &ExperimentConfig::default(), &mut rng).unwrap();
        for t in &trials {
            let DisplayPayload::DigitPair { left, right } = t.payload else {
                panic!("unexpected payload {:?}", t.payload);
            };
            assert_ne!(left.value, right.value);
            assert!(left.value != 5 && right.value != 5);
            assert_ne!(left.size, right.size);

            let value_side = if left.value > right.value { "left" } else { "right" };
            let print_side = if left.size == FontSize::Large { "left" } else { "right" };
            assert_eq!(t.correct_answer, value_side);
            assert_eq!(
                value_side == print_side,
                t.condition == Condition::Congruent,
                "{t:?}"
            );
        }
    }

    #[test]
    fn larger_digit_appears_on_both_sides() {
        let mut rng = StdRng::seed_from_u64(4);
        let trials = generate(60, &ExperimentConfig::default(), &mut rng).unwrap();
        assert!(trials.iter().any(|t| t.correct_answer == "left"));
        assert!(trials.iter().any(|t| t.correct_answer == "right"));
    }
}
