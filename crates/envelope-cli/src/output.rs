// Rust guideline compliant 2026-10-17

//! Output formatting module for the envelope CLI.
//!
//! This module renders envelopes and the result code table
//! in various output formats (JSON, table, plain text).

use envelope_core::{Envelope, OutputFormat, ResultCode, SystemCode};
use serde_json::{json, Value};
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
///
/// Defines the interface for rendering envelopes in different output formats.
pub trait OutputFormatter {
    /// Formats a single envelope for display.
    fn format_envelope(&self, envelope: &Envelope<Value>) -> String;

    /// Formats a list of result codes for display.
    fn format_codes(&self, codes: &[SystemCode]) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Emits the envelope's wire form for machine consumption.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render<T: serde::Serialize>(&self, value: &T) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_envelope(&self, envelope: &Envelope<Value>) -> String {
        self.render(envelope)
    }

    fn format_codes(&self, codes: &[SystemCode]) -> String {
        let rows: Vec<Value> = codes
            .iter()
            .map(|code| {
                json!({
                    "name": code.name(),
                    "code": code.code(),
                    "msg": code.msg(),
                })
            })
            .collect();
        self.render(&json!({ "codes": rows, "total": codes.len() }))
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats envelopes as human-readable tables.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_envelope(&self, envelope: &Envelope<Value>) -> String {
        let data = match envelope.data() {
            Some(value) => value.to_string(),
            None => "-".to_string(),
        };

        let mut builder = Builder::default();
        builder.push_record(vec!["Field", "Value"]);
        builder.push_record(vec!["code".to_string(), envelope.code().to_string()]);
        builder.push_record(vec!["success".to_string(), envelope.is_success().to_string()]);
        builder.push_record(vec!["msg".to_string(), envelope.msg().to_string()]);
        builder.push_record(vec!["data".to_string(), data]);

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_codes(&self, codes: &[SystemCode]) -> String {
        if codes.is_empty() {
            return "No result codes.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Name", "Code", "Message"]);

        for code in codes {
            builder.push_record(vec![
                code.name().to_string(),
                code.code().to_string(),
                code.msg().to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Plain text output formatter.
///
/// Formats envelopes as simple lines without tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_envelope(&self, envelope: &Envelope<Value>) -> String {
        let mut output = format!(
            "{} {} {}\n",
            envelope.code(),
            envelope.is_success(),
            envelope.msg()
        );
        if let Some(data) = envelope.data() {
            output.push_str(&format!("{}\n", data));
        }
        output
    }

    fn format_codes(&self, codes: &[SystemCode]) -> String {
        let mut output = String::new();
        for code in codes {
            output.push_str(&format!("{} {} {}\n", code.code(), code.name(), code.msg()));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Creates the formatter for an output format.
///
/// `pretty` only affects JSON output.
pub fn create_formatter(format: OutputFormat, pretty: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter::new(pretty)),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
