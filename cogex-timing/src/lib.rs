pub mod timer;

pub use timer::{HighPrecisionTimer, ManualTimer, Timer, ns_to_ms};
