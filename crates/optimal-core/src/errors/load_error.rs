//! Grammar loading errors.

use super::error_code::{self, OptimalErrorCode};
use super::ValidationError;

/// Errors raised while reading a serialized grammar. Parsing failures and
/// validation failures are kept apart so callers can tell a broken file from
/// a well-formed file describing bad data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported grammar format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },

    #[error("invalid grammar: {0}")]
    Validation(#[from] ValidationError),
}

impl OptimalErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            _ => error_code::LOAD_ERROR,
        }
    }
}
