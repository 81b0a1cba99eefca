use crate::config::ExperimentConfig;
use crate::random::{balanced_conditions, pick, pick_other, shuffle};
use cogex_core::{Condition, DisplayPayload, InkColor, StroopError, TrialSpec, Variant};
use rand::Rng;

/// Color-word trials: name the ink, ignore the word.
pub fn generate<R: Rng + ?Sized>(
    n: usize,
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<Vec<TrialSpec>, StroopError> {
    let mut trials = balanced_conditions(Variant::Classic.conditions(), n)
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
    let ink = pick(&InkColor::ALL, rng);
    let word = match condition {
        Condition::Incongruent => {
            pick_other(&InkColor::ALL, ink, config.max_resample_attempts, rng).ok_or(
                StroopError::GenerationExhausted {
                    variant: Variant::Classic,
                    attempts: config.max_resample_attempts,
                },
            )?
        }
        _ => ink,
    };

    Ok(TrialSpec {
        variant: Variant::Classic,
        condition,
        task_type: None,
        payload: DisplayPayload::ColorWord { word, ink },
        correct_answer: ink.name(),
    })
}
