//! Configuration errors.

use super::error_code::{self, OptimalErrorCode};

/// Errors that can occur during configuration loading, validation, and
/// algorithm selection.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown algorithm: {token} (expected one of basic, rcd, edcd, gla, maxent, hg)")]
    UnknownAlgorithm { token: String },

    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl OptimalErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAlgorithm { .. } => error_code::UNKNOWN_ALGORITHM,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
