use crate::results::ResultsSummary;
use cogex_core::{DisplayPayload, ResponseRecord, TaskType, TrialSpec, Variant};

/// Trial currently on screen
#[derive(Debug, Clone)]
pub struct ActiveTrial {
    pub index: usize,
    pub timestamps: TrialTimestamps,
}

#[derive(Debug, Clone, Default)]
pub struct TrialTimestamps {
    pub presented: u64,
    /// Deadline of the feedback dwell once scored
    pub feedback_until: Option<u64>,
}

/// Everything one session owns: the stimuli, the cursor and the response log
#[derive(Debug, Clone)]
pub struct SessionState {
    pub variant: Variant,
    pub stimuli: Vec<TrialSpec>,
    pub index: usize,
    pub log: Vec<ResponseRecord>,
    pub current: Option<ActiveTrial>,
}

impl SessionState {
    pub fn new(variant: Variant, stimuli: Vec<TrialSpec>) -> Self {
        let capacity = stimuli.len();
        Self {
            variant,
            stimuli,
            index: 0,
            log: Vec::with_capacity(capacity),
            current: None,
        }
    }

    pub fn total(&self) -> usize {
        self.stimuli.len()
    }

    pub fn current_spec(&self) -> Option<&TrialSpec> {
        self.stimuli.get(self.index)
    }
}

/// Handed to the presentation layer when a trial starts
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub index: usize,
    pub total: usize,
    pub variant: Variant,
    pub task_type: Option<TaskType>,
    pub payload: DisplayPayload,
    pub options: Vec<&'static str>,
}

/// Handed to the presentation layer once a trial is scored
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub index: usize,
    pub correct: bool,
    pub timed_out: bool,
    pub rt_ms: f64,
    pub correct_answer: &'static str,
}

/// Handed to the controller when the last trial has been scored
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub variant: Variant,
    pub title: &'static str,
    pub summary: ResultsSummary,
}
