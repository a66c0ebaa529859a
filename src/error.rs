//! Error types for configuration loading
//!
//! Gameplay itself never fails; bad taps are ignored. Only tuning data read
//! from outside the crate can be rejected.

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::LevelTuning`]
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("Tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, TuningError>;
