//! Core error types for Glowline.

use thiserror::Error;

/// Core error type for Glowline operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Required configuration value absent.
    #[error("Missing configuration value: {0}")]
    MissingConfig(&'static str),

    /// A readings range whose start is not strictly before its end.
    #[error("Empty time range: start {start} is not before end {end}")]
    EmptyRange {
        /// Requested range start (epoch seconds).
        start: i64,
        /// Requested range end (epoch seconds).
        end: i64,
    },

    /// A resource identifier that is empty.
    #[error("Resource id must not be empty")]
    EmptyResourceId,

    /// A timestamp chrono cannot represent.
    #[error("Timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
