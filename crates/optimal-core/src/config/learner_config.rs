//! Learner selection configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LearnerConfig {
    /// Algorithm token. Default: "rcd".
    pub algorithm: Option<String>,
    /// Seed for the GLA random source. Default: 0.
    pub seed: Option<u64>,
}

impl LearnerConfig {
    pub fn effective_algorithm(&self) -> &str {
        self.algorithm
            .as_deref()
            .unwrap_or(constants::DEFAULT_ALGORITHM)
    }

    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(constants::DEFAULT_SEED)
    }
}
