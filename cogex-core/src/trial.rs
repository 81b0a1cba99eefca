use crate::stimulus::DisplayPayload;
use crate::variant::{Condition, TaskType, Variant};
use serde::{Deserialize, Serialize};

/// Runner state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    Idle,
    Presenting,
    AwaitingResponse,
    Scoring,
    Feedback,
    Complete,
}

impl RunnerState {
    pub fn name(&self) -> &'static str {
        match self {
            RunnerState::Idle => "idle",
            RunnerState::Presenting => "presenting",
            RunnerState::AwaitingResponse => "awaiting-response",
            RunnerState::Scoring => "scoring",
            RunnerState::Feedback => "feedback",
            RunnerState::Complete => "complete",
        }
    }

    pub fn accepts_response(&self) -> bool {
        matches!(self, RunnerState::AwaitingResponse)
    }

    pub fn in_session(&self) -> bool {
        !matches!(self, RunnerState::Idle | RunnerState::Complete)
    }
}

/// One generated trial
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialSpec {
    pub variant: Variant,
    pub condition: Condition,
    pub task_type: Option<TaskType>,
    pub payload: DisplayPayload,
    pub correct_answer: &'static str,
}

/// Recorded result per trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub trial_index: usize,
    pub condition: Condition,
    pub task_type: Option<TaskType>,
    /// `None` when the trial timed out
    pub response: Option<String>,
    pub correct: bool,
    pub rt_ms: f64,
    pub correct_answer: String,
    #[serde(default)]
    pub timed_out: bool,
}
