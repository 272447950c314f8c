//! Top-level Optimal configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    GlaConfig, HgConfig, LearnerConfig, MaxEntConfig, OrderingConfig, StratificationConfig,
};
use crate::constants;
use crate::errors::ConfigError;
use crate::models::Algorithm;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`OPTIMAL_*`)
/// 2. Project config (`optimal.toml`, or an explicit path)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OptimalConfig {
    pub learner: LearnerConfig,
    pub ordering: OrderingConfig,
    pub gla: GlaConfig,
    pub hg: HgConfig,
    pub maxent: MaxEntConfig,
    pub stratification: StratificationConfig,
}

impl OptimalConfig {
    /// Load configuration from `path` (or `./optimal.toml` when `None`),
    /// apply environment overrides, and validate.
    ///
    /// A missing default file falls back to compiled defaults; a missing
    /// explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(constants::CONFIG_FILENAME);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. No env overrides, no validation.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the effective configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.algorithm()?;

        positive("gla.plasticity", self.gla.effective_plasticity())?;
        non_negative("gla.noise", self.gla.effective_noise())?;
        finite("gla.initial_value", self.gla.effective_initial_value())?;
        positive("hg.learning_rate", self.hg.effective_learning_rate())?;
        positive("maxent.learning_rate", self.maxent.effective_learning_rate())?;
        positive("maxent.tolerance", self.maxent.effective_tolerance())?;
        non_negative("maxent.l2_penalty", self.maxent.effective_l2_penalty())?;
        non_negative("stratification.epsilon", self.stratification.effective_epsilon())?;

        for (field, cap) in [
            ("ordering.max_passes", self.ordering.effective_max_passes()),
            ("ordering.max_epochs", self.ordering.effective_max_epochs()),
            ("gla.epochs", self.gla.effective_epochs()),
            ("hg.max_epochs", self.hg.effective_max_epochs()),
            ("maxent.max_iterations", self.maxent.effective_max_iterations()),
        ] {
            if cap == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// The configured algorithm, parsed from its token.
    pub fn algorithm(&self) -> Result<Algorithm, ConfigError> {
        self.learner.effective_algorithm().parse()
    }

    fn apply_env_overrides(config: &mut OptimalConfig) {
        if let Ok(val) = std::env::var("OPTIMAL_ALGORITHM") {
            config.learner.algorithm = Some(val);
        }
        if let Ok(val) = std::env::var("OPTIMAL_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.learner.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("OPTIMAL_GLA_PLASTICITY") {
            if let Ok(v) = val.parse::<f64>() {
                config.gla.plasticity = Some(v);
            }
        }
        if let Ok(val) = std::env::var("OPTIMAL_GLA_NOISE") {
            if let Ok(v) = val.parse::<f64>() {
                config.gla.noise = Some(v);
            }
        }
        if let Ok(val) = std::env::var("OPTIMAL_HG_LEARNING_RATE") {
            if let Ok(v) = val.parse::<f64>() {
                config.hg.learning_rate = Some(v);
            }
        }
        if let Ok(val) = std::env::var("OPTIMAL_MAXENT_LEARNING_RATE") {
            if let Ok(v) = val.parse::<f64>() {
                config.maxent.learning_rate = Some(v);
            }
        }
        if let Ok(val) = std::env::var("OPTIMAL_EPSILON") {
            if let Ok(v) = val.parse::<f64>() {
                config.stratification.epsilon = Some(v);
            }
        }
    }
}

fn finite(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: format!("must be finite, got {value}"),
        })
    }
}

fn positive(field: &str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("must be greater than 0, got {value}"),
        })
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("must be at least 0, got {value}"),
        })
    }
}
