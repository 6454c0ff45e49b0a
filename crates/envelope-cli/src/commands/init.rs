// Rust guideline compliant 2026-10-17

//! Implementation of the `envl init` command.
//!
//! Writes the effective configuration to a TOML file so later runs pick it up.

use anyhow::{bail, Result};
use envelope_core::Config;
use std::path::Path;

/// Saves `config` to `config_path`.
///
/// # Errors
///
/// Returns an error if:
/// - The file already exists and `force` is not set
/// - The file cannot be written
pub fn execute(config: &Config, config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config file {} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    config.save(config_path)?;
    tracing::info!(path = %config_path.display(), "wrote config file");
    println!("Wrote {}", config_path.display());
    Ok(())
}
