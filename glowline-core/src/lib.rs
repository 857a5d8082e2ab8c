// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Glowline Core
//!
//! Core types and models for the Glowline client, shared across the other
//! Glowline crates:
//!
//! - Aggregation periods and the per-period query span limits
//! - Metering resource and readings-page models
//! - Time ranges and the windowing logic that splits long ranges into
//!   provider-compliant sub-queries
//! - Credential configuration
//! - Error types
//!
//! ## Key Types
//!
//! - [`Period`] - Aggregation granularity with wire code and maximum span
//! - [`Resource`] - A meter/data stream attached to the account
//! - [`ReadingsPage`] - One provider payload for a bounded sub-query
//! - [`TimeRange`] - Half-open `[start, end)` range of UTC epoch seconds
//! - [`Credentials`] - API credentials, loadable from the environment

pub mod config;
pub mod error;
pub mod models;
pub mod range;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{Period, ReadingsPage, Resource};

// Re-export range types
pub use range::{format_utc, TimeRange, Windows};

// Re-export configuration
pub use config::Credentials;
