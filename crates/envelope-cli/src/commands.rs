// Rust guideline compliant 2026-10-17

//! Command implementations for the envelope CLI.

use anyhow::{Context, Result};
use envelope_core::SystemCode;
use serde_json::Value;

pub mod codes;
pub mod fail;
pub mod init;
pub mod inspect;
pub mod status;
pub mod success;

/// Resolves a result code given by name (`not_found`) or number (`404`).
///
/// # Errors
///
/// Returns an error if the value matches no built-in code.
pub fn parse_code(value: &str) -> Result<SystemCode> {
    if let Ok(number) = value.trim().parse::<i32>() {
        return SystemCode::from_code(number)
            .with_context(|| format!("Unknown result code: {}", number));
    }
    Ok(value.parse::<SystemCode>()?)
}

/// Parses a JSON payload argument.
fn parse_payload(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).with_context(|| format!("Invalid JSON payload: {}", raw))
}
