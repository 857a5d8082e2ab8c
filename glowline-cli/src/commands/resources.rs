//! Resources command - list the account's metering resources.

use anyhow::Result;
use tracing::info;

use super::{connect, print_json};
use crate::{Cli, OutputFormat};

/// Runs the resources command.
pub async fn run(cli: &Cli) -> Result<()> {
    let client = connect().await?;
    let resources = client.list_resources().await?;

    info!(count = resources.len(), "Listed resources");

    match cli.format {
        OutputFormat::Json => print_json(&resources, cli.pretty)?,
        OutputFormat::Text => {
            if resources.is_empty() {
                println!("No resources on this account.");
                return Ok(());
            }

            println!("{:<38} {:<30} NAME", "RESOURCE ID", "CLASSIFIER");
            for resource in &resources {
                println!(
                    "{:<38} {:<30} {}",
                    resource.resource_id,
                    resource.classifier.as_deref().unwrap_or("-"),
                    resource.name.as_deref().unwrap_or("-")
                );
            }
        }
    }

    Ok(())
}
