//! Error types for vibelang-control

use thiserror::Error;

/// Result type alias for vibelang-control operations
pub type Result<T> = std::result::Result<T, Error>;

/// A controller number outside the 7-bit range 0-127.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("controller number {value} out of range (expected 0-127)")]
pub struct InvalidControllerError {
    /// The rejected value
    pub value: i32,
}

impl InvalidControllerError {
    pub fn new(value: i32) -> Self {
        Self { value }
    }
}

/// Errors that can occur in vibelang-control
#[derive(Debug, Error)]
pub enum Error {
    /// Controller number out of range
    #[error(transparent)]
    InvalidController(#[from] InvalidControllerError),

    /// Controller text that is not a number
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
