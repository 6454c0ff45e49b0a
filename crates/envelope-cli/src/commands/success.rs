// Rust guideline compliant 2026-10-17

//! Implementation of the `envl success` command.

use super::parse_payload;
use crate::OutputFormatter;
use anyhow::Result;
use envelope_core::Envelope;
use serde_json::Value;

/// Builds a successful envelope, with a payload when `data` is given.
///
/// # Errors
///
/// Returns an error if `data` is not valid JSON.
pub fn build(data: Option<&str>) -> Result<Envelope<Value>> {
    match data {
        Some(raw) => Ok(Envelope::success_with(parse_payload(raw)?)),
        None => Ok(Envelope::success()),
    }
}

/// Prints a successful envelope.
///
/// # Errors
///
/// Returns an error if `data` is not valid JSON.
pub fn execute(data: Option<String>, formatter: &dyn OutputFormatter) -> Result<()> {
    let envelope = build(data.as_deref())?;
    tracing::debug!(
        code = envelope.code(),
        has_data = envelope.data().is_some(),
        "built success envelope"
    );
    println!("{}", formatter.format_envelope(&envelope));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_without_data() {
        let envelope = build(None).unwrap();
        assert!(envelope.is_success());
        assert!(envelope.data().is_none());
    }

    #[test]
    fn test_build_with_data() {
        let envelope = build(Some(r#"{"id":7}"#)).unwrap();
        assert_eq!(envelope.data(), Some(&json!({ "id": 7 })));
    }

    #[test]
    fn test_build_rejects_invalid_json() {
        assert!(build(Some("{not json")).is_err());
    }
}
