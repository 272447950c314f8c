use serde::{Deserialize, Serialize};

use super::{Algorithm, LearningStatus};
use crate::ranking::PartialOrder;

/// Result of one training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    pub algorithm: Algorithm,
    pub partial_order: PartialOrder,
    pub status: LearningStatus,
    /// Passes, epochs, or gradient iterations actually run.
    pub iterations: usize,
    /// Number of demotions or value/weight updates applied.
    pub updates: usize,
}

impl TrainingReport {
    pub fn is_converged(&self) -> bool {
        self.status.is_converged()
    }
}
