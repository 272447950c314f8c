//! Partial order construction and parsing errors.

use super::error_code::{self, OptimalErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankingError {
    #[error("stratum {index} is empty")]
    EmptyStratum { index: usize },

    #[error("constraint {name} appears more than once")]
    DuplicateConstraint { name: String },

    #[error("malformed ranking {input:?}: {reason}")]
    Malformed { input: String, reason: String },

    #[error(
        "ranking does not cover the grammar: missing [{}], unexpected [{}]",
        missing.join(", "),
        unexpected.join(", ")
    )]
    ConstraintMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("dominance {higher} >> {lower} would create a cycle")]
    CycleDetected { higher: String, lower: String },

    #[error("unknown constraint: {name}")]
    UnknownConstraint { name: String },
}

impl OptimalErrorCode for RankingError {
    fn error_code(&self) -> &'static str {
        error_code::RANKING_ERROR
    }
}
