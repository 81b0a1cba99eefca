use crate::config::ExperimentConfig;
use crate::random::{balanced_conditions, pick, shuffle};
use cogex_core::{Condition, DisplayPayload, InkColor, StroopError, TrialSpec, Variant};
use rand::Rng;

pub const POSITIVE_WORDS: [&str; 5] = ["JOY", "LOVE", "SUCCESS", "FREEDOM", "LAUGHTER"];
pub const NEGATIVE_WORDS: [&str; 5] = ["SADNESS", "ANGER", "FEAR", "FAILURE", "PAIN"];
pub const NEUTRAL_WORDS: [&str; 5] = ["TABLE", "CHAIR", "WALL", "WINDOW", "ROAD"];

/// Word bank for an affective category
pub fn word_bank(condition: Condition) -> &'static [&'static str] {
    match condition {
        Condition::Positive => &POSITIVE_WORDS,
        Condition::Negative => &NEGATIVE_WORDS,
        _ => &NEUTRAL_WORDS,
    }
}

/// Affective words in a random ink; the condition is the word's category.
pub fn generate<R: Rng + ?Sized>(
    n: usize,
    _config: &ExperimentConfig,
    rng: &mut R,
) -> Result<Vec<TrialSpec>, StroopError> {
    let mut trials: Vec<TrialSpec> = balanced_conditions(Variant::Emotional.conditions(), n)
        .into_iter()
        .map(|condition| {
            let word = pick(word_bank(condition), rng);
            let ink = pick(&InkColor::ALL, rng);
            TrialSpec {
                variant: Variant::Emotional,
                condition,
                task_type: None,
                payload: DisplayPayload::AffectiveWord { word, ink },
                correct_answer: ink.name(),
            }
        })
        .collect();
    shuffle(&mut trials, rng);
    Ok(trials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_come_from_the_conditions_bank() {
        let mut rng = StdRng::seed_from_u64(5);
        let trials = generate(30, &ExperimentConfig::default(), &mut rng).unwrap();
        assert_eq!(trials.len(), 30);
        for t in &trials {
            let DisplayPayload::AffectiveWord { word, ink } = t.payload else {
                panic!("unexpected payload {:?}", t.payload);
            };
            assert!(word_bank(t.condition).contains(&word));
            assert_eq!(t.correct_answer, ink.name());
        }
    }

    #[test]
    fn banks_do_not_overlap() {
        for w in POSITIVE_WORDS {
            assert!(!NEGATIVE_WORDS.contains(&w) && !NEUTRAL_WORDS.contains(&w));
        }
        for w in NEGATIVE_WORDS {
            assert!(!NEUTRAL_WORDS.contains(&w));
        }
    }
}
