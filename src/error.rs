//! # Error Types
//!
//! Custom error types for LTM Bridge using `thiserror`.

use thiserror::Error;

/// Main error type for LTM Bridge
#[derive(Debug, Error)]
pub enum LtmError {
    /// LTM protocol errors (malformed payloads, bad frame sizes)
    #[error("LTM protocol error: {0}")]
    Protocol(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors, including transport read failures
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serial port errors
    #[error("Serial port error: {0}")]
    Serial(String),

    /// The byte stream reached end-of-file
    #[error("Telemetry stream closed")]
    StreamClosed,
}

/// Result type alias for LTM Bridge
pub type Result<T> = std::result::Result<T, LtmError>;
