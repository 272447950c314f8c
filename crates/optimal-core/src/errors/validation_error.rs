//! Data-validation errors.

use super::error_code::{self, OptimalErrorCode};

/// A malformed grammar. Raised while the grammar is built, before any
/// learning starts, and never recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("constraint name is empty")]
    EmptyConstraintName,

    #[error("constraint name {name:?} contains reserved characters or surrounding whitespace")]
    InvalidConstraintName { name: String },

    #[error("duplicate constraint: {name}")]
    DuplicateConstraint { name: String },

    #[error("example {input} has no optimal candidate")]
    NoOptimalCandidate { input: String },

    #[error("example {input} has {count} optimal candidates, expected exactly one")]
    MultipleOptimalCandidates { input: String, count: usize },

    #[error("example {input} has no non-optimal competitor")]
    NoCompetitor { input: String },

    #[error("candidate {input} -> {output} has no violation count for constraint {constraint}")]
    MissingViolation {
        input: String,
        output: String,
        constraint: String,
    },

    #[error("candidate {input} -> {output} violates undeclared constraint {constraint}")]
    UnknownConstraint {
        input: String,
        output: String,
        constraint: String,
    },
}

impl OptimalErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
