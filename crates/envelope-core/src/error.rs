// Rust guideline compliant 2026-10-17

//! Error types for the envelope core library.

use crate::code::ResultCode;
use thiserror::Error;

/// Result type alias for fallible envelope operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for configuration and parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value or file.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A result code name or number that is not in the code table.
    #[error("Unknown result code: {0}")]
    UnknownCode(String),
}

/// A business failure expressed as a result code and message.
///
/// Converts into a failure `Envelope` at the boundary that renders responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{msg} (code {code})")]
pub struct ServiceError {
    code: i32,
    msg: String,
}

impl ServiceError {
    /// Creates an error from a raw code and message.
    #[must_use]
    pub fn new(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }

    /// Creates an error carrying the result code's default message.
    #[must_use]
    pub fn from_code<C: ResultCode + ?Sized>(code: &C) -> Self {
        Self::new(code.code(), code.msg())
    }

    /// Creates an error with the result code's code and a custom message.
    #[must_use]
    pub fn with_msg<C: ResultCode + ?Sized>(code: &C, msg: impl Into<String>) -> Self {
        Self::new(code.code(), msg)
    }

    /// Returns the status code.
    #[must_use]
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Returns the failure message.
    #[must_use]
    pub fn msg(&self) -> &str {
        &self.msg
    }
}
