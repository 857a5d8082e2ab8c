//! Readings payload types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Readings Page
// ============================================================================

/// One provider payload for a single bounded readings sub-query.
///
/// A long range is split into several queries; each produces one page. Pages
/// are collected in chronological window order. The payload is kept as raw
/// JSON since its shape is provider-defined, with [`ReadingsPage::readings`]
/// as a typed peek at the usual `data` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingsPage {
    /// Window start (inclusive, epoch seconds).
    pub from: i64,
    /// Window end (exclusive, epoch seconds).
    pub to: i64,
    /// The parsed response body.
    pub payload: serde_json::Value,
}

impl ReadingsPage {
    /// Creates a page covering `[from, to)`.
    pub fn new(from: i64, to: i64, payload: serde_json::Value) -> Self {
        Self { from, to, payload }
    }

    /// Returns the `data` array of `[timestamp, value]` pairs, if the
    /// payload carries one.
    pub fn readings(&self) -> Option<&Vec<serde_json::Value>> {
        self.payload.get("data")?.as_array()
    }

    /// Returns the unit the payload reports readings in, if present.
    pub fn units(&self) -> Option<&str> {
        self.payload.get("units")?.as_str()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_readings_accessor() {
        let payload = json!({
            "status": "OK",
            "name": "electricity consumption",
            "data": [[1579261478, 0.25], [1579263278, 0.31]],
            "units": "kWh"
        });

        let page = ReadingsPage::new(1_579_261_478, 1_579_263_478, payload);
        assert_eq!(page.readings().map(Vec::len), Some(2));
        assert_eq!(page.units(), Some("kWh"));
    }

    #[test]
    fn test_payload_without_data() {
        let page = ReadingsPage::new(0, 10, serde_json::json!({"status": "OK"}));
        assert!(page.readings().is_none());
        assert!(page.units().is_none());
    }
}
