//! Dump command - recent readings for every resource on the account.

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use glowline_core::{Period, TimeRange};
use serde_json::json;
use tracing::info;

use super::{connect, print_json};
use crate::{Cli, OutputFormat};

/// Arguments for the dump command.
#[derive(Args)]
pub struct DumpArgs {
    /// How many days back from now to fetch.
    #[arg(long, default_value = "10")]
    pub days: u32,

    /// Aggregation period wire code.
    #[arg(long, short, default_value = "PT30M")]
    pub period: Period,
}

/// Runs the dump command.
pub async fn run(args: &DumpArgs, cli: &Cli) -> Result<()> {
    let end = Utc::now().timestamp();
    let start = end - i64::from(args.days) * 86_400;
    let range = TimeRange::new(start, end)?;

    let client = connect().await?;
    let resources = client.list_resources().await?;

    info!(
        resources = resources.len(),
        days = args.days,
        "Dumping readings"
    );

    let mut report = Vec::with_capacity(resources.len());
    for resource in &resources {
        let pages = client
            .get_readings(&resource.resource_id, range, &args.period)
            .await?;

        match cli.format {
            OutputFormat::Json => {
                report.push(json!({"resource": resource, "pages": pages}));
            }
            OutputFormat::Text => {
                let readings: usize =
                    pages.iter().map(|p| p.readings().map_or(0, Vec::len)).sum();
                println!(
                    "{:<40} {:>3} pages {:>6} readings",
                    resource.label(),
                    pages.len(),
                    readings
                );
            }
        }
    }

    if cli.format == OutputFormat::Json {
        print_json(&report, cli.pretty)?;
    }

    Ok(())
}
