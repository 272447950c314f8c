//! Aggregate error type.

use super::error_code::OptimalErrorCode;
use super::{ConfigError, LoadError, RankingError, ValidationError};

/// Aggregates every fatal error via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum OptimalError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Ranking error: {0}")]
    Ranking(#[from] RankingError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),
}

impl OptimalErrorCode for OptimalError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Ranking(e) => e.error_code(),
            Self::Load(e) => e.error_code(),
        }
    }
}

pub type OptimalResult<T> = Result<T, OptimalError>;
