//! Metering resource types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Resource
// ============================================================================

/// A meter/data stream attached to the account.
///
/// The API returns more fields than the client acts on; only `resourceId`
/// drives readings queries. The descriptive fields are kept for display and
/// anything else lands in `extra` so payloads survive a serialize round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Identifier used in readings queries.
    pub resource_id: String,

    /// Human-readable name (e.g. "electricity consumption").
    #[serde(default)]
    pub name: Option<String>,

    /// Classifier (e.g. "electricity.consumption").
    #[serde(default)]
    pub classifier: Option<String>,

    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,

    /// Unit readings are reported in (e.g. "kWh").
    #[serde(default)]
    pub base_unit: Option<String>,

    /// Remaining provider fields, preserved as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Resource {
    /// Returns the best display label: the name if present, else the id.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.resource_id)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resource() {
        let json = r#"{
            "resourceId": "1dd27b2f-46eb-4cd0-8125-ec104393cc99",
            "name": "electricity consumption",
            "classifier": "electricity.consumption",
            "description": "Electricity consumption",
            "baseUnit": "kWh",
            "resourceTypeId": "e3a5bd7c-4a4a-4d26-b4bd-4f9e6b9f68cb"
        }"#;

        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.resource_id, "1dd27b2f-46eb-4cd0-8125-ec104393cc99");
        assert_eq!(resource.label(), "electricity consumption");
        assert_eq!(resource.base_unit.as_deref(), Some("kWh"));
        assert!(resource.extra.contains_key("resourceTypeId"));
    }

    #[test]
    fn test_parse_minimal_resource() {
        let json = r#"{"resourceId": "abc"}"#;

        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.label(), "abc");
        assert!(resource.name.is_none());
    }

    #[test]
    fn test_parse_resource_list() {
        let json = r#"[
            {"resourceId": "a"},
            {"resourceId": "b", "name": "gas consumption"}
        ]"#;

        let resources: Vec<Resource> = serde_json::from_str(json).unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[1].label(), "gas consumption");
    }
}
