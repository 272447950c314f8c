//! Gradual Learning Algorithm configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlaConfig {
    /// Step size of each update. Default: 1.0.
    pub plasticity: Option<f64>,
    /// Standard deviation of the per-trial Gaussian perturbation. Default: 2.0.
    pub noise: Option<f64>,
    /// Number of passes over the comparison pairs. Default: 1000.
    pub epochs: Option<usize>,
    /// Starting ranking value of every constraint. Default: 100.0.
    pub initial_value: Option<f64>,
    /// Shuffle pair order every epoch with the seeded generator. Default: false.
    pub shuffle: Option<bool>,
}

impl GlaConfig {
    pub fn effective_plasticity(&self) -> f64 {
        self.plasticity.unwrap_or(constants::DEFAULT_PLASTICITY)
    }

    pub fn effective_noise(&self) -> f64 {
        self.noise.unwrap_or(constants::DEFAULT_NOISE)
    }

    pub fn effective_epochs(&self) -> usize {
        self.epochs.unwrap_or(constants::DEFAULT_GLA_EPOCHS)
    }

    pub fn effective_initial_value(&self) -> f64 {
        self.initial_value
            .unwrap_or(constants::DEFAULT_INITIAL_RANKING_VALUE)
    }

    pub fn effective_shuffle(&self) -> bool {
        self.shuffle.unwrap_or(constants::DEFAULT_GLA_SHUFFLE)
    }
}
