pub mod error;
pub mod stimulus;
pub mod trial;
pub mod variant;

pub use error::StroopError;
pub use stimulus::{Digit, Direction, DisplayPayload, FontSize, InkColor, Side, Stimulus};
pub use trial::{ResponseRecord, RunnerState, TrialSpec};
pub use variant::{Condition, TaskType, Variant};
