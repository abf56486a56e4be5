//! Error handling for the application

use thiserror::Error;

/// Input errors raised while turning user input into engine inputs.
/// The engine itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid token: {0} (expected SYMBOL or ADDRESS:SYMBOL[:DECIMALS])")]
    InvalidToken(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    #[error("Lower bound {lower} must be below upper bound {upper}")]
    InvertedBounds { lower: f64, upper: f64 },

    #[error("Risk score {0} is outside [1, 5]")]
    ScoreOutOfRange(f64),

    #[error("Preset {0} is not available for this pair")]
    PresetUnavailable(String),
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] RangeError),

    #[error("Report serialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),
}
