// Rust guideline compliant 2026-10-17

//! Configuration management for envelope tooling.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Output format for rendered envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

impl OutputFormat {
    /// Returns the lowercase name of the format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
            OutputFormat::Plain => "plain",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "plain" => Ok(OutputFormat::Plain),
            _ => Err(Error::InvalidConfig(format!(
                "output format must be json, table, or plain, got {}",
                value
            ))),
        }
    }
}

const LOG_LEVELS: [&str; 4] = ["error", "warn", "info", "debug"];

/// Configuration for envelope rendering and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Whether JSON output is pretty-printed.
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,

    /// Logging level (error, warn, info, debug).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_pretty_json() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            pretty_json: default_pretty_json(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `config_path`, if it exists
    /// 3. Environment variables with `ENVELOPE_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `ENVELOPE_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `ENVELOPE_PRETTY_JSON` - Pretty-print JSON (true/false)
    /// - `ENVELOPE_LOG_LEVEL` - Logging level
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("ENVELOPE_OUTPUT_FORMAT") {
            self.output_format = val.parse()?;
        }

        if let Ok(val) = std::env::var("ENVELOPE_PRETTY_JSON") {
            self.pretty_json = val.parse().map_err(|_| {
                Error::InvalidConfig("ENVELOPE_PRETTY_JSON must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("ENVELOPE_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("failed to serialize config: {}", e)))?;
        std::fs::write(config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("ENVELOPE_OUTPUT_FORMAT");
        std::env::remove_var("ENVELOPE_PRETTY_JSON");
        std::env::remove_var("ENVELOPE_LOG_LEVEL");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.pretty_json);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_load_missing_file() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(&temp_dir.path().join("envelope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("envelope.toml");
        let content = r#"
output_format = "json"
pretty_json = false
log_level = "debug"
"#;
        std::fs::write(&config_path, content).unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(!config.pretty_json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_partial_file_keeps_defaults() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("envelope.toml");
        std::fs::write(&config_path, "output_format = \"plain\"").unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.output_format, OutputFormat::Plain);
        assert!(config.pretty_json);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_invalid_toml() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("envelope.toml");
        std::fs::write(&config_path, "output_format = [").unwrap();

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("envelope.toml");
        std::fs::write(&config_path, "log_level = \"verbose\"").unwrap();

        let result = Config::load(&config_path);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_config_env_overrides_file() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("envelope.toml");
        std::fs::write(&config_path, "output_format = \"table\"").unwrap();

        std::env::set_var("ENVELOPE_OUTPUT_FORMAT", "json");
        std::env::set_var("ENVELOPE_PRETTY_JSON", "false");
        std::env::set_var("ENVELOPE_LOG_LEVEL", "INFO");
        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(!config.pretty_json);
        assert_eq!(config.log_level, "info");

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_values() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("envelope.toml");

        std::env::set_var("ENVELOPE_OUTPUT_FORMAT", "xml");
        assert!(Config::load(&config_path).is_err());
        clear_all_env_vars();

        std::env::set_var("ENVELOPE_PRETTY_JSON", "sometimes");
        assert!(Config::load(&config_path).is_err());
        clear_all_env_vars();
    }

    #[test]
    fn test_config_save_and_load() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("envelope.toml");

        let original = Config {
            output_format: OutputFormat::Plain,
            pretty_json: false,
            log_level: "error".to_string(),
        };

        original.save(&config_path).unwrap();
        let loaded = Config::load(&config_path).unwrap();
        assert_eq!(original, loaded);
    }
}
