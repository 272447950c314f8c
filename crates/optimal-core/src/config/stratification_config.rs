//! Derivation configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StratificationConfig {
    /// Tolerance below which adjacent values share a stratum. Default: 0.01.
    pub epsilon: Option<f64>,
}

impl StratificationConfig {
    pub fn effective_epsilon(&self) -> f64 {
        self.epsilon.unwrap_or(constants::DEFAULT_EPSILON)
    }
}
