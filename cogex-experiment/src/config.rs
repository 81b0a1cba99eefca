use cogex_core::StroopError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub trial_count: usize,
    /// Pause after feedback before the next trial is presented
    pub feedback_dwell_ms: u64,
    /// Response window; `None` waits indefinitely
    pub response_timeout_ms: Option<u64>,
    /// Upper bound for every rejection-sampling loop
    pub max_resample_attempts: usize,
    pub switching: SwitchingConfig,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchingConfig {
    /// Trials per task before the cue flips
    pub run_length: usize,
    /// Probability that a word/ink pair is incongruent
    pub incongruent_ratio: f64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trial_count: 20,
            feedback_dwell_ms: 1200,
            response_timeout_ms: None,
            max_resample_attempts: 1000,
            switching: SwitchingConfig::default(),
            seed: None,
        }
    }
}

impl Default for SwitchingConfig {
    fn default() -> Self {
        Self {
            run_length: 2,
            incongruent_ratio: 0.8,
        }
    }
}

impl SwitchingConfig {
    /// Leading trials always labelled no-switch
    pub fn min_run_length(&self) -> usize {
        self.run_length.max(2)
    }
}

impl ExperimentConfig {
    pub fn feedback_dwell(&self) -> Duration {
        Duration::from_millis(self.feedback_dwell_ms)
    }

    pub fn response_timeout(&self) -> Option<Duration> {
        self.response_timeout_ms.map(Duration::from_millis)
    }

    pub fn validate(&self) -> Result<(), StroopError> {
        if self.max_resample_attempts == 0 {
            return Err(StroopError::InvalidConfig(
                "max_resample_attempts must be at least 1".into(),
            ));
        }
        if self.switching.run_length == 0 {
            return Err(StroopError::InvalidConfig(
                "switching.run_length must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.switching.incongruent_ratio) {
            return Err(StroopError::InvalidConfig(format!(
                "switching.incongruent_ratio {} is outside [0, 1]",
                self.switching.incongruent_ratio
            )));
        }
        if self.response_timeout_ms == Some(0) {
            return Err(StroopError::InvalidConfig(
                "response_timeout_ms must be positive when set".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_session_design() {
        let config = ExperimentConfig::default();
        assert_eq!(config.trial_count, 20);
        assert_eq!(config.feedback_dwell(), Duration::from_millis(1200));
        assert_eq!(config.response_timeout(), None);
        assert_eq!(config.switching.min_run_length(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: ExperimentConfig =
            serde_json::from_str(r#"{"trial_count": 40, "switching": {"run_length": 3}}"#).unwrap();
        assert_eq!(config.trial_count, 40);
        assert_eq!(config.feedback_dwell_ms, 1200);
        assert_eq!(config.switching.run_length, 3);
        assert_eq!(config.switching.incongruent_ratio, 0.8);
        assert_eq!(config.switching.min_run_length(), 3);
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = ExperimentConfig::default();
        config.switching.incongruent_ratio = 1.5;
        assert!(matches!(config.validate(), Err(StroopError::InvalidConfig(_))));

        let mut config = ExperimentConfig::default();
        config.switching.run_length = 0;
        assert!(config.validate().is_err());

        let mut config = ExperimentConfig::default();
        config.max_resample_attempts = 0;
        assert!(config.validate().is_err());
    }
}
