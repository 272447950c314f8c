//! Maximum Entropy configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MaxEntConfig {
    /// Gradient ascent step size. Default: 0.1.
    pub learning_rate: Option<f64>,
    /// Iteration cap. Default: 10_000.
    pub max_iterations: Option<usize>,
    /// Stop once the projected gradient norm drops below this. Default: 1e-4.
    pub tolerance: Option<f64>,
    /// L2 penalty on weights. Default: 0.01.
    pub l2_penalty: Option<f64>,
    /// Keep weights non-negative. Default: true.
    pub non_negative: Option<bool>,
}

impl MaxEntConfig {
    pub fn effective_learning_rate(&self) -> f64 {
        self.learning_rate
            .unwrap_or(constants::DEFAULT_MAXENT_LEARNING_RATE)
    }

    pub fn effective_max_iterations(&self) -> usize {
        self.max_iterations
            .unwrap_or(constants::DEFAULT_MAXENT_MAX_ITERATIONS)
    }

    pub fn effective_tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(constants::DEFAULT_MAXENT_TOLERANCE)
    }

    pub fn effective_l2_penalty(&self) -> f64 {
        self.l2_penalty.unwrap_or(constants::DEFAULT_L2_PENALTY)
    }

    pub fn effective_non_negative(&self) -> bool {
        self.non_negative.unwrap_or(constants::DEFAULT_NON_NEGATIVE)
    }
}
