//! Top-level configuration with file, environment, and default layers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, InferenceConfig, ObservabilityConfig};
use crate::constants::{ENV_MAX_CANDIDATES, ENV_SELECTION_POLICY, ENV_UNKNOWN_SYMPTOM_POLICY};
use crate::errors::ConfigError;
use crate::models::{SelectionPolicy, UnknownSymptomPolicy};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PATHOGEN_*`)
/// 2. Config file
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathogenConfig {
    pub inference: InferenceConfig,
    pub observability: ObservabilityConfig,
}

impl PathogenConfig {
    /// Load a config file, apply environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: PathogenConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (no environment layer).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: PathogenConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `PATHOGEN_*` environment variables.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Unset keys are skipped.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_SELECTION_POLICY) {
            self.inference.selection_policy = SelectionPolicy::from_str_name(value.trim())
                .ok_or_else(|| ConfigError::ValidationFailed {
                    field: ENV_SELECTION_POLICY.to_string(),
                    message: format!("unknown selection policy {value:?}"),
                })?;
        }
        if let Some(value) = lookup(ENV_UNKNOWN_SYMPTOM_POLICY) {
            self.inference.unknown_symptom_policy =
                UnknownSymptomPolicy::from_str_name(value.trim()).ok_or_else(|| {
                    ConfigError::ValidationFailed {
                        field: ENV_UNKNOWN_SYMPTOM_POLICY.to_string(),
                        message: format!("unknown symptom policy {value:?}"),
                    }
                })?;
        }
        if let Some(value) = lookup(ENV_MAX_CANDIDATES) {
            let limit = value
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::ValidationFailed {
                    field: ENV_MAX_CANDIDATES.to_string(),
                    message: e.to_string(),
                })?;
            self.inference.max_candidates = Some(limit);
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inference.max_candidates == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "inference.max_candidates".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let level = self.observability.log_level.to_ascii_lowercase();
        if !defaults::VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!(
                    "must be one of {}",
                    defaults::VALID_LOG_LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }
}
