//! Harmonic Grammar configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HgConfig {
    /// Perceptron step size. Default: 0.1.
    pub learning_rate: Option<f64>,
    /// Epoch cap. Default: 1000.
    pub max_epochs: Option<usize>,
}

impl HgConfig {
    pub fn effective_learning_rate(&self) -> f64 {
        self.learning_rate
            .unwrap_or(constants::DEFAULT_HG_LEARNING_RATE)
    }

    pub fn effective_max_epochs(&self) -> usize {
        self.max_epochs.unwrap_or(constants::DEFAULT_HG_MAX_EPOCHS)
    }
}
