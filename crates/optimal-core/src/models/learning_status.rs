use serde::{Deserialize, Serialize};

/// How well a learned result explains the data.
///
/// Neither failure variant is fatal: the learner still returns its best
/// partial order and numeric state alongside the status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LearningStatus {
    /// Every winner beats every competitor under the result.
    Converged,
    /// No strict ranking found by the algorithm explains the data.
    Inconsistent {
        /// Inputs of the examples left unexplained.
        unresolved_examples: Vec<String>,
        /// Constraints left together in the final unranked stratum.
        unranked_constraints: Vec<String>,
    },
    /// The iteration cap was hit with residual error.
    NotConverged {
        iterations: usize,
        residual_errors: usize,
        /// Final gradient norm, for gradient-based learners.
        gradient_norm: Option<f64>,
    },
}

impl LearningStatus {
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged)
    }

    pub fn is_inconsistent(&self) -> bool {
        matches!(self, Self::Inconsistent { .. })
    }
}
