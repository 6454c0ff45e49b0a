// Rust guideline compliant 2026-10-17

//! Implementation of the `envl codes` command.

use crate::OutputFormatter;
use anyhow::Result;
use envelope_core::SystemCode;

/// Prints the built-in result code table.
pub fn execute(formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", formatter.format_codes(SystemCode::all()));
    Ok(())
}
