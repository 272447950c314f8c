//! Strict-ranking algorithm configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Caps for basic constraint demotion and EDCD.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OrderingConfig {
    /// Pass cap for basic demotion. Default: 100.
    pub max_passes: Option<usize>,
    /// Epoch cap for EDCD. Default: 100.
    pub max_epochs: Option<usize>,
}

impl OrderingConfig {
    pub fn effective_max_passes(&self) -> usize {
        self.max_passes.unwrap_or(constants::DEFAULT_MAX_PASSES)
    }

    pub fn effective_max_epochs(&self) -> usize {
        self.max_epochs.unwrap_or(constants::DEFAULT_EDCD_MAX_EPOCHS)
    }
}
