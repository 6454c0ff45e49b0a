// Rust guideline compliant 2026-10-17

//! Implementation of the `envl inspect` command.
//!
//! Reads an envelope from a file or stdin and reports its outcome.

use crate::OutputFormatter;
use anyhow::{Context, Result};
use envelope_core::{get_data_ref, is_success, Envelope};
use serde_json::Value;
use std::io::Read;

/// Reads the raw envelope text from a file, or from stdin for `None` or `-`.
///
/// # Errors
///
/// Returns an error if the source cannot be read.
pub fn read_source(source: Option<&str>) -> Result<String> {
    match source {
        None | Some("-") => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read envelope from stdin")?;
            Ok(content)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read envelope file: {}", path)),
    }
}

/// Parses envelope JSON text.
///
/// # Errors
///
/// Returns an error if the text is not an envelope object.
pub fn parse(content: &str) -> Result<Envelope<Value>> {
    Envelope::from_json(content).context("Invalid envelope JSON")
}

/// Prints the inspected envelope and returns whether it is successful.
///
/// # Errors
///
/// Returns an error if the source cannot be read or parsed.
pub fn execute(source: Option<String>, formatter: &dyn OutputFormatter) -> Result<bool> {
    let content = read_source(source.as_deref())?;
    let envelope = parse(&content)?;
    let success = is_success(Some(&envelope));

    tracing::info!(
        code = envelope.code(),
        success,
        has_data = get_data_ref(Some(&envelope)).is_some(),
        "inspected envelope"
    );
    println!("{}", formatter.format_envelope(&envelope));
    Ok(success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_parse_recomputes_success() {
        let envelope = parse(r#"{"code":0,"success":false,"msg":"ok","data":[1]}"#).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.data(), Some(&json!([1])));
    }

    #[test]
    fn test_parse_rejects_non_envelope() {
        assert!(parse("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_read_source_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("envelope.json");
        std::fs::write(&path, r#"{"code":1,"msg":"x"}"#).unwrap();

        let content = read_source(path.to_str()).unwrap();
        assert!(!parse(&content).unwrap().is_success());
    }

    #[test]
    fn test_read_source_missing_file() {
        assert!(read_source(Some("/nonexistent/envelope.json")).is_err());
    }
}
