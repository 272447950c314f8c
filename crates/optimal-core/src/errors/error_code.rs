//! OptimalErrorCode trait for structured error reporting.

/// Stable error codes for callers outside the core (command-line front ends,
/// log pipelines). Every error enum implements this.
pub trait OptimalErrorCode {
    /// Returns the error code string (e.g., "VALIDATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const UNKNOWN_ALGORITHM: &str = "UNKNOWN_ALGORITHM";
pub const RANKING_ERROR: &str = "RANKING_ERROR";
pub const LOAD_ERROR: &str = "LOAD_ERROR";
