//! Error types for the mecwise_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for mecwise_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Personalization input did not carry a method list
    #[error("Invalid eligible methods: {0}")]
    InvalidEligibleMethods(String),

    /// A method key outside the 15-method universe
    #[error("Unknown method key: {0:?}")]
    UnknownMethod(String),

    /// BMI filter was not a finite number in [0, 100]
    #[error("Invalid BMI: {0} (expected a finite number between 0 and 100)")]
    InvalidBmi(f64),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
