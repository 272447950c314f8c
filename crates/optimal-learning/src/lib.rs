//! # optimal-learning
//!
//! Ranking and weighting learners over validated grammars.
//!
//! Every algorithm consumes the same winner/competitor comparison pairs and
//! reports a [`TrainingReport`](optimal_core::TrainingReport) whose partial
//! order always covers every constraint. Failure to fit the data is a status,
//! not an error.

pub mod comparison;
pub mod continuous;
pub mod derivation;
pub mod evaluation;
pub mod learner;
pub mod ordering;
pub mod stratification;

pub use comparison::{comparisons, ComparisonPair, Preference};
pub use continuous::{GradualLearner, HarmonicLearner, MaxEntLearner};
pub use derivation::stratify_values;
pub use evaluation::{explains, harmonic_errors, harmony, unexplained_examples};
pub use learner::Learner;
pub use ordering::{BasicDemotion, ErrorDrivenDemotion, RecursiveDemotion};
pub use stratification::Stratification;
