// Rust guideline compliant 2026-10-17

//! Result codes carried by envelopes.
//!
//! A result code pairs an integer status code with a default message. The
//! `SystemCode` table ships the codes shared by every service; callers may
//! define their own enumerations by implementing `ResultCode`.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The reserved status code that marks a successful outcome.
pub const SUCCESS_CODE: i32 = 0;

/// Read access to an `(integer code, default message)` pair.
pub trait ResultCode {
    /// Returns the integer status code.
    fn code(&self) -> i32;

    /// Returns the default human-readable message.
    fn msg(&self) -> &str;
}

impl<C: ResultCode + ?Sized> ResultCode for &C {
    fn code(&self) -> i32 {
        (**self).code()
    }

    fn msg(&self) -> &str {
        (**self).msg()
    }
}

/// Built-in result codes.
///
/// `Success` is the only variant whose code equals `SUCCESS_CODE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemCode {
    /// The operation succeeded.
    Success,
    /// Generic business failure.
    Failure,
    /// The caller is not authenticated.
    Unauthorized,
    /// The caller is authenticated but not allowed.
    RequestRejected,
    /// The requested resource does not exist.
    NotFound,
    /// The HTTP method is not supported.
    MethodNotSupported,
    /// The request media type is not supported.
    MediaTypeNotSupported,
    /// Unexpected server-side failure.
    InternalServerError,
    /// A required parameter is missing.
    ParamMiss,
    /// A parameter has the wrong type.
    ParamTypeError,
    /// A parameter could not be bound.
    ParamBindError,
    /// A parameter failed validation.
    ParamValidError,
    /// The request body could not be read.
    MsgNotReadable,
    /// The requested response media type is not acceptable.
    MediaTypeNotAccept,
    /// The referenced data does not exist.
    DataNotExist,
    /// The data already exists.
    DataExisted,
    /// Inserting data failed.
    DataAddFailed,
    /// Updating data failed.
    DataUpdateFailed,
    /// Deleting data failed.
    DataDeleteFailed,
}

const ALL_CODES: [SystemCode; 19] = [
    SystemCode::Success,
    SystemCode::Failure,
    SystemCode::Unauthorized,
    SystemCode::RequestRejected,
    SystemCode::NotFound,
    SystemCode::MethodNotSupported,
    SystemCode::MediaTypeNotSupported,
    SystemCode::InternalServerError,
    SystemCode::ParamMiss,
    SystemCode::ParamTypeError,
    SystemCode::ParamBindError,
    SystemCode::ParamValidError,
    SystemCode::MsgNotReadable,
    SystemCode::MediaTypeNotAccept,
    SystemCode::DataNotExist,
    SystemCode::DataExisted,
    SystemCode::DataAddFailed,
    SystemCode::DataUpdateFailed,
    SystemCode::DataDeleteFailed,
];

impl SystemCode {
    /// Returns every built-in code in table order.
    #[must_use]
    pub fn all() -> &'static [SystemCode] {
        &ALL_CODES
    }

    /// Looks up a built-in code by its integer value.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        ALL_CODES.iter().copied().find(|c| c.code() == code)
    }

    /// Returns the snake_case name used in config files and on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SystemCode::Success => "success",
            SystemCode::Failure => "failure",
            SystemCode::Unauthorized => "unauthorized",
            SystemCode::RequestRejected => "request_rejected",
            SystemCode::NotFound => "not_found",
            SystemCode::MethodNotSupported => "method_not_supported",
            SystemCode::MediaTypeNotSupported => "media_type_not_supported",
            SystemCode::InternalServerError => "internal_server_error",
            SystemCode::ParamMiss => "param_miss",
            SystemCode::ParamTypeError => "param_type_error",
            SystemCode::ParamBindError => "param_bind_error",
            SystemCode::ParamValidError => "param_valid_error",
            SystemCode::MsgNotReadable => "msg_not_readable",
            SystemCode::MediaTypeNotAccept => "media_type_not_accept",
            SystemCode::DataNotExist => "data_not_exist",
            SystemCode::DataExisted => "data_existed",
            SystemCode::DataAddFailed => "data_add_failed",
            SystemCode::DataUpdateFailed => "data_update_failed",
            SystemCode::DataDeleteFailed => "data_delete_failed",
        }
    }
}

impl ResultCode for SystemCode {
    fn code(&self) -> i32 {
        match self {
            SystemCode::Success => SUCCESS_CODE,
            SystemCode::Failure => 1,
            SystemCode::Unauthorized => 401,
            SystemCode::RequestRejected => 403,
            SystemCode::NotFound => 404,
            SystemCode::MethodNotSupported => 405,
            SystemCode::MediaTypeNotSupported => 415,
            SystemCode::InternalServerError => 500,
            SystemCode::ParamMiss => 100_000,
            SystemCode::ParamTypeError => 100_001,
            SystemCode::ParamBindError => 100_002,
            SystemCode::ParamValidError => 100_003,
            SystemCode::MsgNotReadable => 100_004,
            SystemCode::MediaTypeNotAccept => 100_005,
            SystemCode::DataNotExist => 100_100,
            SystemCode::DataExisted => 100_101,
            SystemCode::DataAddFailed => 100_102,
            SystemCode::DataUpdateFailed => 100_103,
            SystemCode::DataDeleteFailed => 100_104,
        }
    }

    fn msg(&self) -> &str {
        match self {
            SystemCode::Success => "Operation succeeded",
            SystemCode::Failure => "Business failure",
            SystemCode::Unauthorized => "Request unauthorized",
            SystemCode::RequestRejected => "Request rejected",
            SystemCode::NotFound => "Resource not found",
            SystemCode::MethodNotSupported => "Method not supported",
            SystemCode::MediaTypeNotSupported => "Media type not supported",
            SystemCode::InternalServerError => "Internal server error",
            SystemCode::ParamMiss => "Missing required parameter",
            SystemCode::ParamTypeError => "Parameter type mismatch",
            SystemCode::ParamBindError => "Parameter binding failed",
            SystemCode::ParamValidError => "Parameter validation failed",
            SystemCode::MsgNotReadable => "Message not readable",
            SystemCode::MediaTypeNotAccept => "Media type not acceptable",
            SystemCode::DataNotExist => "Data does not exist",
            SystemCode::DataExisted => "Data already exists",
            SystemCode::DataAddFailed => "Failed to add data",
            SystemCode::DataUpdateFailed => "Failed to update data",
            SystemCode::DataDeleteFailed => "Failed to delete data",
        }
    }
}

impl fmt::Display for SystemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SystemCode {
    type Err = Error;

    /// Parses a snake_case name; dashes are accepted in place of underscores.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase().replace('-', "_");
        ALL_CODES
            .iter()
            .copied()
            .find(|c| c.name() == normalized)
            .ok_or_else(|| Error::UnknownCode(value.to_string()))
    }
}
