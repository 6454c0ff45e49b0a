// Rust guideline compliant 2026-10-17

//! Implementation of the `envl fail` command.

use super::parse_code;
use crate::OutputFormatter;
use anyhow::Result;
use envelope_core::{Envelope, SystemCode};
use serde_json::Value;

/// Builds a failure envelope.
///
/// - message only: generic failure code with the message
/// - code only: the code's default message
/// - both: the code with the message
/// - neither: the generic failure code and its default message
///
/// # Errors
///
/// Returns an error if `code` names no built-in result code.
pub fn build(code: Option<&str>, message: Option<String>) -> Result<Envelope<Value>> {
    let envelope = match (code, message) {
        (None, Some(msg)) => Envelope::fail(msg),
        (Some(code), None) => Envelope::fail_code(&parse_code(code)?),
        (Some(code), Some(msg)) => Envelope::fail_code_with(&parse_code(code)?, msg),
        (None, None) => Envelope::fail_code(&SystemCode::Failure),
    };
    Ok(envelope)
}

/// Prints a failure envelope.
///
/// # Errors
///
/// Returns an error if `code` names no built-in result code.
pub fn execute(
    code: Option<String>,
    message: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let envelope = build(code.as_deref(), message)?;
    tracing::debug!(code = envelope.code(), msg = envelope.msg(), "built failure envelope");
    println!("{}", formatter.format_envelope(&envelope));
    Ok(())
}
