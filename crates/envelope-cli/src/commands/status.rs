// Rust guideline compliant 2026-10-17

//! Implementation of the `envl status` command.

use super::parse_code;
use crate::OutputFormatter;
use anyhow::Result;
use envelope_core::{Envelope, SystemCode};
use serde_json::Value;

/// Builds `success()` when `ok`, otherwise a failure from `code` and/or `message`.
///
/// # Errors
///
/// Returns an error if `code` names no built-in result code, even when `ok`.
pub fn build(ok: bool, code: Option<&str>, message: Option<String>) -> Result<Envelope<Value>> {
    let code = code.map(parse_code).transpose()?;
    let envelope = match (code, message) {
        (Some(code), Some(msg)) if !ok => Envelope::fail_code_with(&code, msg),
        (Some(code), _) => Envelope::status_code(ok, &code),
        (None, Some(msg)) => Envelope::status(ok, msg),
        (None, None) => Envelope::status_code(ok, &SystemCode::Failure),
    };
    Ok(envelope)
}

/// Prints the envelope selected by `ok`.
///
/// # Errors
///
/// Returns an error if `code` names no built-in result code.
pub fn execute(
    ok: bool,
    code: Option<String>,
    message: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let envelope = build(ok, code.as_deref(), message)?;
    tracing::debug!(ok, code = envelope.code(), "built status envelope");
    println!("{}", formatter.format_envelope(&envelope));
    Ok(())
}
