//! Learner-facing models: algorithm selection and training outcomes.

pub mod algorithm;
pub mod learning_status;
pub mod training_report;

pub use algorithm::{Algorithm, AlgorithmFamily};
pub use learning_status::LearningStatus;
pub use training_report::TrainingReport;
