use anyhow::{Context, Result};
use cogex_experiment::ExperimentConfig;
use std::fs;
use std::path::Path;

/// Values given on the command line; each one replaces the file setting
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub trials: Option<usize>,
    pub seed: Option<u64>,
    pub timeout_ms: Option<u64>,
}

/// Loads the experiment configuration, falling back to defaults without a file
pub fn load_config(path: Option<&Path>) -> Result<ExperimentConfig> {
    let Some(path) = path else {
        return Ok(ExperimentConfig::default());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<ExperimentConfig> {
    let config: ExperimentConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

pub fn apply_overrides(mut config: ExperimentConfig, overrides: &Overrides) -> Result<ExperimentConfig> {
    if let Some(trials) = overrides.trials {
        config.trial_count = trials;
    }
    if let Some(seed) = overrides.seed {
        config.seed = Some(seed);
    }
    if let Some(timeout_ms) = overrides.timeout_ms {
        // 0 turns the response window off
        config.response_timeout_ms = (timeout_ms > 0).then_some(timeout_ms);
    }
    config.validate().context("Invalid configuration after command-line overrides")?;
    Ok(config)
}
