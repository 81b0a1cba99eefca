use crate::variant::Variant;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StroopError {
    #[error("unsupported Stroop variant '{0}'")]
    InvalidVariant(String),

    #[error("no stimuli generated for the {variant} variant (requested {requested} trials)")]
    EmptyStimuli { variant: Variant, requested: usize },

    #[error("gave up resampling a {variant} stimulus after {attempts} attempts")]
    GenerationExhausted { variant: Variant, attempts: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("event {event} is not valid while the runner is {state}")]
    InvalidTransition {
        event: &'static str,
        state: &'static str,
    },
}
