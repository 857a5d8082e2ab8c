//! Domain models for Glowline.
//!
//! ## Submodules
//!
//! - [`period`] - Aggregation granularities and their query span limits
//! - [`resource`] - Metering resources attached to the account
//! - [`reading`] - Readings payloads returned per query window

mod period;
mod reading;
mod resource;

// Re-export everything at the models level
pub use period::Period;
pub use reading::ReadingsPage;
pub use resource::Resource;
