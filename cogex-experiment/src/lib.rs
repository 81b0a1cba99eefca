pub mod config;
pub mod generate;
pub mod options;
pub mod random;
pub mod results;
pub mod runner;
pub mod session;
pub mod trial;
pub use config::{ExperimentConfig, SwitchingConfig};
pub use generate::generate;
pub use options::{trial_options, variant_options};
pub use results::{ResultsSummary, summarize};
pub use runner::{RunnerEvent, RunnerOutput, TrialRunner};
pub use session::{Presenter, ResponseEvent, ResponseSource, Scripted, ScriptedResponses, run_session};
pub use trial::{Completion, Feedback, Presentation};
