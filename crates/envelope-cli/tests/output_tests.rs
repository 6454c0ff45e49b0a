// Rust guideline compliant 2026-10-17

//! Unit tests for output formatting module.

use envelope_cli::create_formatter;
use envelope_core::{Envelope, OutputFormat, SystemCode};
use serde_json::{json, Value};

#[test]
fn test_json_formatter_envelope() {
    let envelope = Envelope::success_with(json!({ "name": "widget" }));
    let formatter = create_formatter(OutputFormat::Json, true);
    let output = formatter.format_envelope(&envelope);

    let parsed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["success"], true);
    assert_eq!(parsed["data"]["name"], "widget");
}

#[test]
fn test_json_formatter_compact() {
    let envelope: Envelope<Value> = Envelope::fail("nope");
    let formatter = create_formatter(OutputFormat::Json, false);
    assert_eq!(
        formatter.format_envelope(&envelope),
        r#"{"code":1,"success":false,"msg":"nope","data":null}"#
    );
}

#[test]
fn test_json_formatter_codes() {
    let formatter = create_formatter(OutputFormat::Json, false);
    let output = formatter.format_codes(SystemCode::all());
    let parsed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["total"], SystemCode::all().len());
    assert_eq!(parsed["codes"][0]["name"], "success");
}

#[test]
fn test_json_formatter_error() {
    let formatter = create_formatter(OutputFormat::Json, true);
    let output = formatter.format_error("Test error message");
    assert!(output.contains("Test error message"));
    assert!(output.contains("\"error\""));
}

#[test]
fn test_table_formatter_envelope() {
    let envelope: Envelope<Value> = Envelope::fail_code(&SystemCode::NotFound);
    let formatter = create_formatter(OutputFormat::Table, true);
    let output = formatter.format_envelope(&envelope);

    assert!(output.contains("404"));
    assert!(output.contains("Resource not found"));
    assert!(output.contains("false"));
}

#[test]
fn test_table_formatter_codes() {
    let formatter = create_formatter(OutputFormat::Table, false);
    let output = formatter.format_codes(&[SystemCode::Success, SystemCode::DataExisted]);
    assert!(output.contains("success"));
    assert!(output.contains("100101"));

    assert_eq!(formatter.format_codes(&[]), "No result codes.");
}

#[test]
fn test_plain_formatter_envelope() {
    let envelope = Envelope::success_with(json!([1, 2]));
    let formatter = create_formatter(OutputFormat::Plain, false);
    assert_eq!(
        formatter.format_envelope(&envelope),
        "0 true Operation succeeded\n[1,2]\n"
    );
}

#[test]
fn test_plain_formatter_error() {
    let formatter = create_formatter(OutputFormat::Plain, false);
    assert_eq!(formatter.format_error("boom"), "Error: boom");
}
