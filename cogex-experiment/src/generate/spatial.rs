use crate::config::ExperimentConfig;
use crate::random::{balanced_conditions, pick, pick_other, shuffle};
use cogex_core::{Condition, Direction, DisplayPayload, StroopError, TrialSpec, Variant};
use rand::Rng;

/// Location words placed in a screen zone; report the zone.
pub fn generate<R: Rng + ?Sized>(
    n: usize,
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<Vec<TrialSpec>, StroopError> {
    let mut trials = balanced_conditions(Variant::Spatial.conditions(), n)
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
    let zone = pick(&Direction::ALL, rng);
    let word = if condition == Condition::Incongruent {
        pick_other(&Direction::ALL, zone, config.max_resample_attempts, rng).ok_or(
            StroopError::GenerationExhausted {
                variant: Variant::Spatial,
                attempts: config.max_resample_attempts,
            },
        )?
    } else {
        zone
    };

    Ok(TrialSpec {
        variant: Variant::Spatial,
        condition,
        task_type: None,
        payload: DisplayPayload::PlacedWord { word, zone },
        correct_answer: zone.name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn answer_is_the_zone_not_the_word() {
        let mut rng = StdRng::seed_from_u64(9);
        let trials = generate(100, &ExperimentConfig::default(), &mut rng).unwrap();
        for t in &trials {
            let DisplayPayload::PlacedWord { word, zone } = t.payload else {
                panic!("unexpected payload {:?}", t.payload);
            };
            assert_eq!(t.correct_answer, zone.name());
            match t.condition {
                Condition::Congruent => assert_eq!(word, zone),
                Condition::Incongruent => assert_ne!(word, zone),
                other => panic!("unexpected condition {other}"),
            }
        }
    }
}
