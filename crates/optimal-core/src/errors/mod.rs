//! Error handling for Optimal.
//! One error enum per concern, `thiserror` only.
//!
//! Learning inconsistency and non-convergence are not errors: they travel in
//! the training report so a caller can log them or retry with other settings.

pub mod config_error;
pub mod error_code;
pub mod load_error;
pub mod optimal_error;
pub mod ranking_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::OptimalErrorCode;
pub use load_error::LoadError;
pub use optimal_error::{OptimalError, OptimalResult};
pub use ranking_error::RankingError;
pub use validation_error::ValidationError;
