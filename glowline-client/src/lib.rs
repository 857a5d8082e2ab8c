// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Glowline Client
//!
//! HTTP client for the Glowmarkt energy-metering API. The client owns two
//! responsibilities, composed into one object:
//!
//! - [`Session`] - holds credentials, caches the access token and its
//!   expiry, and produces a valid token on demand
//! - [`GlowClient`] - lists the account's metering resources and fetches
//!   readings over arbitrary ranges, splitting them into per-granularity
//!   query windows
//!
//! ## Example
//!
//! ```no_run
//! use glowline_client::GlowClient;
//! use glowline_core::{Credentials, Period, TimeRange};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GlowClient::login(Credentials::from_env()?).await?;
//! for resource in client.list_resources().await? {
//!     let range = TimeRange::new(1_579_261_478, 1_579_361_478)?;
//!     let pages = client
//!         .get_readings(&resource.resource_id, range, &Period::HalfHour)
//!         .await?;
//!     println!("{}: {} pages", resource.label(), pages.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod session;

// Re-export the client surface
pub use api::API_ROOT;
pub use client::GlowClient;
pub use error::ClientError;
pub use session::Session;
