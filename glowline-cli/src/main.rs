// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Glowline CLI - Glowmarkt metering data from the command line.
//!
//! # Examples
//!
//! ```bash
//! # List metering resources on the account
//! glow resources
//!
//! # Fetch half-hourly readings for one resource
//! glow readings --resource 1dd27b2f-46eb-4cd0-8125-ec104393cc99 \
//!     --from 2020-01-10 --to 2020-01-17
//!
//! # Fetch the last 10 days for every resource
//! glow dump
//!
//! # Verify credentials
//! glow auth
//!
//! # JSON output
//! glow resources --format json --pretty
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use glowline_core::CoreError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{auth, dump, readings, resources};

// ============================================================================
// CLI Definition
// ============================================================================

/// Glowline CLI - Glowmarkt metering data.
#[derive(Parser)]
#[command(name = "glow")]
#[command(about = "Glowmarkt energy-metering CLI")]
#[command(long_about = r#"
Glowline fetches metering resources and aggregated readings from the
Glowmarkt API.

Credentials come from the environment:
  GLOWMARKT_APP_ID     application id issued by Glowmarkt
  GLOWMARKT_USERNAME   account username
  GLOWMARKT_PASSWORD   account password

Examples:
  glow resources                 # List metering resources
  glow readings -r <id> --from 2020-01-10 --to 2020-01-17
  glow dump --days 10            # Recent readings for every resource
  glow auth                      # Verify credentials
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List metering resources on the account.
    #[command(visible_alias = "r")]
    Resources,

    /// Fetch readings for one resource over a time range.
    Readings(readings::ReadingsArgs),

    /// Fetch recent readings for every resource on the account.
    Dump(dump::DumpArgs),

    /// Verify credentials by performing a login.
    Auth,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// Required configuration missing.
    ConfigMissing = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("glowline=debug,info")
    } else {
        EnvFilter::new("glowline=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Resources => resources::run(&cli).await,
        Commands::Readings(args) => readings::run(args, &cli).await,
        Commands::Dump(args) => dump::run(args, &cli).await,
        Commands::Auth => auth::run(&cli).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        let code = match e.downcast_ref::<CoreError>() {
            Some(CoreError::MissingConfig(_)) => ExitCode::ConfigMissing,
            _ => ExitCode::Error,
        };
        std::process::exit(code as i32);
    }

    Ok(())
}
