// Rust guideline compliant 2026-10-17

//! Envelope CLI Application
//!
//! Command-line interface for building and inspecting result envelopes.

use clap::Parser;
use envelope_cli::{commands, create_formatter, logging};
use envelope_core::{Config, OutputFormat};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DEFAULT_CONFIG_FILE: &str = "envelope.toml";

#[derive(Parser, Debug)]
#[command(
    name = "envl",
    version,
    about = "Build and inspect result envelopes",
    long_about = "envl prints result envelopes (code, success, msg, data) in JSON, table or plain form, lists the built-in result codes, and checks envelopes produced by other services.",
    after_help = "Examples:\n  envl success --data '{\"id\": 1}'\n  envl fail --message \"bad request\"\n  envl fail --code not_found\n  envl status --ok false --code 403\n  envl codes --format plain\n  envl init --force\n  curl -s http://localhost/api | envl inspect -\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Print a successful envelope
    Success {
        /// Payload as JSON
        #[arg(long)]
        data: Option<String>,
    },

    /// Print a failure envelope
    Fail {
        /// Result code name or number (e.g. not_found or 404)
        #[arg(long)]
        code: Option<String>,

        /// Failure message
        #[arg(long)]
        message: Option<String>,
    },

    /// Print a success or failure envelope depending on a flag
    Status {
        /// Whether the operation succeeded
        #[arg(long, action = clap::ArgAction::Set)]
        ok: bool,

        /// Result code used on failure
        #[arg(long)]
        code: Option<String>,

        /// Message used on failure
        #[arg(long)]
        message: Option<String>,
    },

    /// List the built-in result codes
    Codes,

    /// Write the effective configuration to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Read an envelope and report its outcome
    Inspect {
        /// Envelope file ('-' or omitted for stdin)
        source: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let format = match cli.format {
        Some(FormatArg::Json) => OutputFormat::Json,
        Some(FormatArg::Table) => OutputFormat::Table,
        Some(FormatArg::Plain) => OutputFormat::Plain,
        None if cli.json => OutputFormat::Json,
        None => config.output_format,
    };
    let formatter = create_formatter(format, config.pretty_json);

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let _guard = match logging::init_tracing(level, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{}", formatter.format_error(&err.to_string()));
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, formatter.as_ref(), &config, &config_path) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::warn!(error = %err, "command failed");
            eprintln!("{}", formatter.format_error(&format!("{:#}", err)));
            ExitCode::FAILURE
        }
    }
}

/// Dispatches a command; `Ok(false)` signals an unsuccessful inspected envelope.
fn run(
    command: Option<Commands>,
    formatter: &dyn envelope_cli::OutputFormatter,
    config: &Config,
    config_path: &Path,
) -> anyhow::Result<bool> {
    tracing::debug!(config = %config_path.display(), command = ?command, "dispatching command");

    match command {
        Some(Commands::Success { data }) => {
            commands::success::execute(data, formatter)?;
        }
        Some(Commands::Fail { code, message }) => {
            commands::fail::execute(code, message, formatter)?;
        }
        Some(Commands::Status { ok, code, message }) => {
            commands::status::execute(ok, code, message, formatter)?;
        }
        Some(Commands::Codes) => {
            commands::codes::execute(formatter)?;
        }
        Some(Commands::Init { force }) => {
            commands::init::execute(config, config_path, force)?;
        }
        Some(Commands::Inspect { source }) => {
            return commands::inspect::execute(source, formatter);
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(true)
}
