//! Auth command - verify credentials by performing a login.

use anyhow::Result;
use glowline_core::format_utc;
use serde_json::json;

use super::{connect, print_json};
use crate::{Cli, OutputFormat};

/// Runs the auth command.
pub async fn run(cli: &Cli) -> Result<()> {
    // Login acquires the initial token eagerly; reaching this point means
    // the credentials were accepted.
    let client = connect().await?;
    let expires_at = client.session().expires_at().await;

    match cli.format {
        OutputFormat::Json => {
            print_json(&json!({"authenticated": true, "expires_at": expires_at}), cli.pretty)?;
        }
        OutputFormat::Text => match expires_at {
            Some(exp) => println!("Authenticated. Token expires {} ({exp})", format_utc(exp)?),
            None => println!("Authenticated."),
        },
    }

    Ok(())
}
