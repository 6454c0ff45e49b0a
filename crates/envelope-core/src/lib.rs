// Rust guideline compliant 2026-10-17

//! Envelope Core Library
//!
//! This crate provides the result envelope used to report operation outcomes:
//! - The `Envelope<T>` value (code, success flag, message, optional payload)
//! - Result codes (`ResultCode` trait and the built-in `SystemCode` table)
//! - Null-safe inspection helpers (`is_success`, `is_not_success`, `get_data`)
//! - Error types and configuration loading

pub mod code;
pub mod config;
pub mod envelope;
pub mod error;

pub use code::{ResultCode, SystemCode, SUCCESS_CODE};
pub use config::{Config, OutputFormat};
pub use envelope::{get_data, get_data_ref, is_not_success, is_success, Envelope};
pub use error::{Error, Result, ServiceError};
