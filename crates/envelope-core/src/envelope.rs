// Rust guideline compliant 2026-10-17

//! The result envelope.
//!
//! An `Envelope<T>` reports the outcome of an operation as a status code, a
//! success flag, a message and an optional payload. Envelopes are built only
//! through the factory functions below and are never mutated afterwards; the
//! success flag is computed from the code in a single place, so the two cannot
//! disagree.
//!
//! The serialized form is a JSON object with the fields `code`, `success`,
//! `msg` and `data`.

use crate::code::{ResultCode, SystemCode, SUCCESS_CODE};
use crate::error::{Result, ServiceError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of an operation with an optional payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WireEnvelope<T>")]
pub struct Envelope<T> {
    code: i32,
    success: bool,
    msg: String,
    data: Option<T>,
}

/// Incoming shape; `success` is ignored and recomputed from `code`.
///
/// A missing or null `msg` falls back to the built-in code's message.
#[derive(Deserialize)]
struct WireEnvelope<T> {
    code: i32,
    msg: Option<String>,
    data: Option<T>,
}

impl<T> From<WireEnvelope<T>> for Envelope<T> {
    fn from(wire: WireEnvelope<T>) -> Self {
        let msg = wire.msg.unwrap_or_else(|| {
            SystemCode::from_code(wire.code)
                .map(|code| code.msg().to_string())
                .unwrap_or_default()
        });
        Self::new(wire.code, msg, wire.data)
    }
}

impl<T> Envelope<T> {
    fn new(code: i32, msg: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code,
            success: code == SUCCESS_CODE,
            msg: msg.into(),
            data,
        }
    }

    /// Creates a successful envelope without a payload.
    #[must_use]
    pub fn success() -> Self {
        Self::new(SUCCESS_CODE, SystemCode::Success.msg(), None)
    }

    /// Creates a successful envelope carrying `data`.
    ///
    /// A payload that serializes to JSON `null` reads back as no payload, so
    /// `success_with(Value::Null)` and `success()` have the same wire form.
    #[must_use]
    pub fn success_with(data: T) -> Self {
        Self::new(SUCCESS_CODE, SystemCode::Success.msg(), Some(data))
    }

    /// Creates a failure envelope with the generic failure code and `msg`.
    #[must_use]
    pub fn fail(msg: impl Into<String>) -> Self {
        Self::new(SystemCode::Failure.code(), msg, None)
    }

    /// Creates an envelope from a result code and its default message.
    ///
    /// The success flag follows the code, so passing `SystemCode::Success`
    /// yields a successful envelope.
    #[must_use]
    pub fn fail_code<C: ResultCode + ?Sized>(code: &C) -> Self {
        Self::new(code.code(), code.msg(), None)
    }

    /// Creates an envelope from a result code with an overridden message.
    #[must_use]
    pub fn fail_code_with<C: ResultCode + ?Sized>(code: &C, msg: impl Into<String>) -> Self {
        Self::new(code.code(), msg, None)
    }

    /// Returns `success()` when `ok`, otherwise `fail(msg)`.
    #[must_use]
    pub fn status(ok: bool, msg: impl Into<String>) -> Self {
        if ok {
            Self::success()
        } else {
            Self::fail(msg)
        }
    }

    /// Returns `success()` when `ok`, otherwise `fail_code(code)`.
    #[must_use]
    pub fn status_code<C: ResultCode + ?Sized>(ok: bool, code: &C) -> Self {
        if ok {
            Self::success()
        } else {
            Self::fail_code(code)
        }
    }

    /// Returns the status code.
    #[must_use]
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Returns whether the code is the reserved success code.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the message.
    #[must_use]
    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// Returns the payload, regardless of outcome.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consumes the envelope and returns the payload, regardless of outcome.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Transforms the payload, keeping code and message.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Envelope<U>
    where
        F: FnOnce(T) -> U,
    {
        Envelope::new(self.code, self.msg, self.data.map(f))
    }

    /// Converts the envelope into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns a `ServiceError` with the envelope's code and message when the
    /// envelope is not successful.
    pub fn into_result(self) -> std::result::Result<Option<T>, ServiceError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ServiceError::new(self.code, self.msg))
        }
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Parses an envelope from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if the text is not an envelope object or the
    /// payload does not match `T`.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl<T> From<ServiceError> for Envelope<T> {
    fn from(error: ServiceError) -> Self {
        Self::new(error.code(), error.msg(), None)
    }
}

impl<T> fmt::Display for Envelope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.msg)
    }
}

/// Returns `true` iff `envelope` is present and carries the success code.
#[must_use]
pub fn is_success<T>(envelope: Option<&Envelope<T>>) -> bool {
    envelope.is_some_and(|e| e.code == SUCCESS_CODE)
}

/// Negation of [`is_success`]; `true` for a missing envelope.
#[must_use]
pub fn is_not_success<T>(envelope: Option<&Envelope<T>>) -> bool {
    !is_success(envelope)
}

/// Returns the payload of a present, successful envelope.
#[must_use]
pub fn get_data<T>(envelope: Option<Envelope<T>>) -> Option<T> {
    envelope
        .filter(|e| e.is_success())
        .and_then(Envelope::into_data)
}

/// Borrowing variant of [`get_data`].
#[must_use]
pub fn get_data_ref<T>(envelope: Option<&Envelope<T>>) -> Option<&T> {
    envelope.filter(|e| e.is_success()).and_then(Envelope::data)
}
