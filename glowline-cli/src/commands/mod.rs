//! CLI command implementations.

pub mod auth;
pub mod dump;
pub mod readings;
pub mod resources;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use glowline_client::GlowClient;
use glowline_core::Credentials;
use serde::Serialize;

/// Builds a logged-in client from environment credentials.
pub async fn connect() -> Result<GlowClient> {
    let credentials = Credentials::from_env()?;
    Ok(GlowClient::login(credentials).await?)
}

/// Prints a value as JSON, optionally pretty-printed.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

/// Parses a CLI instant: integer epoch seconds, `YYYY-MM-DD`, or
/// `YYYY-MM-DDTHH:MM:SS`, all interpreted as UTC.
pub fn parse_instant(value: &str) -> Result<i64, String> {
    if let Ok(epoch) = value.parse::<i64>() {
        return Ok(epoch);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime.and_utc().timestamp());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| format!("Invalid date: {value}"))?;
        return Ok(midnight.and_utc().timestamp());
    }
    Err(format!(
        "Expected epoch seconds, YYYY-MM-DD, or YYYY-MM-DDTHH:MM:SS: {value}"
    ))
}

// ============================================================================
// Tests
// ============================================================================
