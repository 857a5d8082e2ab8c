//! Readings command - windowed readings for one resource.

use anyhow::Result;
use clap::Args;
use glowline_core::{format_utc, Period, TimeRange};
use tracing::info;

use super::{connect, parse_instant, print_json};
use crate::{Cli, OutputFormat};

/// Arguments for the readings command.
#[derive(Args)]
pub struct ReadingsArgs {
    /// Resource id to fetch readings for.
    #[arg(long, short)]
    pub resource: String,

    /// Range start: epoch seconds, YYYY-MM-DD, or YYYY-MM-DDTHH:MM:SS (UTC).
    #[arg(long, value_parser = parse_instant)]
    pub from: i64,

    /// Range end, same formats as --from.
    #[arg(long, value_parser = parse_instant)]
    pub to: i64,

    /// Aggregation period wire code (PT1M, PT30M, PT1H, P1D, P1W, P1M, P1Y).
    #[arg(long, short, default_value = "PT30M")]
    pub period: Period,
}

/// Runs the readings command.
pub async fn run(args: &ReadingsArgs, cli: &Cli) -> Result<()> {
    let range = TimeRange::new(args.from, args.to)?;

    let client = connect().await?;
    let pages = client
        .get_readings(&args.resource, range, &args.period)
        .await?;

    info!(pages = pages.len(), "Fetched readings");

    match cli.format {
        OutputFormat::Json => print_json(&pages, cli.pretty)?,
        OutputFormat::Text => {
            for page in &pages {
                println!(
                    "{} .. {}  {} readings",
                    format_utc(page.from)?,
                    format_utc(page.to)?,
                    page.readings().map_or(0, Vec::len)
                );
            }
        }
    }

    Ok(())
}
