use crate::config::{ExperimentConfig, SwitchingConfig};
use crate::random::{pick, pick_other};
use cogex_core::{Condition, DisplayPayload, InkColor, StroopError, TaskType, TrialSpec, Variant};
use rand::Rng;

/// Cued color-word trials in fixed-length task runs.
///
/// Order is significant: switch labels depend on the preceding trial, so the
/// sequence is never shuffled.
pub fn generate<R: Rng + ?Sized>(
    n: usize,
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<Vec<TrialSpec>, StroopError> {
    let first_task = if rng.random_bool(0.5) {
        TaskType::NameColor
    } else {
        TaskType::ReadWord
    };
    let mut sequence =
        SwitchingSequence::new(&config.switching, first_task, config.max_resample_attempts);
    (0..n).map(|_| sequence.next_trial(rng)).collect()
}

/// Running generation state for the switching variant
#[derive(Debug, Clone)]
pub struct SwitchingSequence {
    run_length: usize,
    min_run_length: usize,
    incongruent_ratio: f64,
    max_attempts: usize,
    first_task: TaskType,
    last_task: Option<TaskType>,
    index: usize,
}

impl SwitchingSequence {
    pub fn new(config: &SwitchingConfig, first_task: TaskType, max_attempts: usize) -> Self {
        Self {
            run_length: config.run_length.max(1),
            min_run_length: config.min_run_length(),
            incongruent_ratio: config.incongruent_ratio.clamp(0.0, 1.0),
            max_attempts,
            first_task,
            last_task: None,
            index: 0,
        }
    }

    /// Task for trial `index`: runs of `run_length`, flipping at every run boundary.
    pub fn task_at(&self, index: usize) -> TaskType {
        if (index / self.run_length) % 2 == 0 {
            self.first_task
        } else {
            self.first_task.other()
        }
    }

    pub fn next_trial<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TrialSpec, StroopError> {
        let task = self.task_at(self.index);
        let condition = match self.last_task {
            Some(last) if self.index >= self.min_run_length && last != task => Condition::Switch,
            _ => Condition::NoSwitch,
        };

        let word = pick(&InkColor::ALL, rng);
        let ink = if rng.random_bool(self.incongruent_ratio) {
            pick_other(&InkColor::ALL, word, self.max_attempts, rng).ok_or(
                StroopError::GenerationExhausted {
                    variant: Variant::Switching,
                    attempts: self.max_attempts,
                },
            )?
        } else {
            word
        };
        let correct_answer = match task {
            TaskType::NameColor => ink.name(),
            TaskType::ReadWord => word.name(),
        };

        self.last_task = Some(task);
        self.index += 1;

        Ok(TrialSpec {
            variant: Variant::Switching,
            condition,
            task_type: Some(task),
            payload: DisplayPayload::CuedColorWord {
                cue: task,
                word,
                ink,
            },
            correct_answer,
        })
    }
}
