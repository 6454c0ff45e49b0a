// Rust guideline compliant 2026-10-17

//! Unit tests for error types and messages.

use envelope_core::{Error, ServiceError, SystemCode};

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = Error::Io(io_err);
    assert!(error.to_string().contains("IO error"));
}

#[test]
fn test_json_error_formatting() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
        .expect_err("Should fail to parse invalid JSON");
    let error = Error::Json(json_err);
    assert!(error.to_string().contains("JSON error"));
}

#[test]
fn test_invalid_config_formatting() {
    let error = Error::InvalidConfig("log_level must be set".to_string());
    assert_eq!(error.to_string(), "Invalid config: log_level must be set");
}

#[test]
fn test_unknown_code_from_parse() {
    let error = "teapot".parse::<SystemCode>().unwrap_err();
    assert_eq!(error.to_string(), "Unknown result code: teapot");
}

#[test]
fn test_service_error_formatting() {
    let error = ServiceError::from_code(&SystemCode::DataNotExist);
    assert_eq!(error.to_string(), "Data does not exist (code 100100)");

    let error = ServiceError::new(42, "custom");
    assert_eq!(error.code(), 42);
    assert_eq!(error.msg(), "custom");
}
