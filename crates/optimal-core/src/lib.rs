//! # optimal-core
//!
//! Foundation crate for the Optimal constraint-ranking learner.
//! Defines the violation model, partial orders, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod grammar;
pub mod models;
pub mod ranking;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::OptimalConfig;
pub use errors::{OptimalError, OptimalResult, ValidationError};
pub use grammar::{Candidate, Constraint, Example, Grammar, GrammarBuilder};
pub use models::{Algorithm, LearningStatus, TrainingReport};
pub use ranking::{Dominance, DominanceGraph, PartialOrder};
