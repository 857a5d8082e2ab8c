//! Endpoints, headers, and wire types for the Glowmarkt API.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ClientError;

// ============================================================================
// Constants
// ============================================================================

/// Glowmarkt API base URL.
pub const API_ROOT: &str = "https://api.glowmarkt.com/";

/// Authentication endpoint path.
const AUTH_PATH: &str = "api/v0-1/auth";

/// Resource-listing endpoint path.
const RESOURCE_PATH: &str = "api/v0-1/resource";

/// Application-id header. Every endpoint requires it.
const APPLICATION_ID_HEADER: &str = "applicationid";

/// Token header used by authenticated endpoints.
const TOKEN_HEADER: &str = "token";

/// User agent for API requests.
const USER_AGENT_VALUE: &str = concat!("glowline/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// URL Building
// ============================================================================

/// Returns the auth endpoint URL under `root`.
pub fn auth_url(root: &Url) -> Result<Url, ClientError> {
    join(root, AUTH_PATH)
}

/// Returns the resource-listing endpoint URL under `root`.
pub fn resource_url(root: &Url) -> Result<Url, ClientError> {
    join(root, RESOURCE_PATH)
}

/// Returns the readings endpoint URL for one resource under `root`.
pub fn readings_url(root: &Url, resource_id: &str) -> Result<Url, ClientError> {
    join(root, &format!("{RESOURCE_PATH}/{resource_id}/readings"))
}

fn join(root: &Url, path: &str) -> Result<Url, ClientError> {
    root.join(path)
        .map_err(|e| ClientError::InvalidUrl(e.to_string()))
}

// ============================================================================
// Headers
// ============================================================================

/// Builds the request headers every endpoint expects: the application id,
/// a JSON content type, and (for authenticated endpoints) the token.
pub fn build_headers(app_id: &str, token: Option<&str>) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::new();

    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        HeaderName::from_static(APPLICATION_ID_HEADER),
        HeaderValue::from_str(app_id).map_err(|e| ClientError::InvalidHeader(e.to_string()))?,
    );

    if let Some(token) = token {
        headers.insert(
            HeaderName::from_static(TOKEN_HEADER),
            HeaderValue::from_str(token)
                .map_err(|e| ClientError::InvalidHeader(e.to_string()))?,
        );
    }

    Ok(headers)
}

// ============================================================================
// Wire Types
// ============================================================================

/// Body of the auth request.
#[derive(Debug, Serialize)]
pub struct AuthRequest<'a> {
    /// Account username.
    pub username: &'a str,
    /// Account password.
    pub password: &'a str,
}

/// Response from the auth endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Issued access token.
    pub token: String,

    /// Absolute expiry of the token (epoch seconds).
    pub exp: i64,

    /// Whether the provider considers the login valid.
    #[serde(default)]
    pub valid: Option<bool>,

    /// Account id the token belongs to.
    #[serde(default)]
    pub account_id: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> Url {
        Url::parse(API_ROOT).unwrap()
    }

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(
            auth_url(&root()).unwrap().as_str(),
            "https://api.glowmarkt.com/api/v0-1/auth"
        );
        assert_eq!(
            resource_url(&root()).unwrap().as_str(),
            "https://api.glowmarkt.com/api/v0-1/resource"
        );
        assert_eq!(
            readings_url(&root(), "abc-123").unwrap().as_str(),
            "https://api.glowmarkt.com/api/v0-1/resource/abc-123/readings"
        );
    }

    #[test]
    fn test_headers_with_token() {
        let headers = build_headers("my-app", Some("jwt-token")).unwrap();
        assert_eq!(headers.get("applicationId").unwrap(), "my-app");
        assert_eq!(headers.get("token").unwrap(), "jwt-token");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_headers_without_token() {
        let headers = build_headers("my-app", None).unwrap();
        assert!(headers.get("token").is_none());
    }

    #[test]
    fn test_parse_auth_response() {
        let json = r#"{
            "valid": true,
            "token": "eyJhbGciOiJIUzI1NiJ9.payload.sig",
            "exp": 1579871962,
            "accountId": "d5d11d82-2175-4b25-8db3-16b8e2ba4bc5"
        }"#;

        let auth: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(auth.exp, 1_579_871_962);
        assert_eq!(auth.valid, Some(true));
        assert!(auth.token.starts_with("eyJ"));
    }

    #[test]
    fn test_parse_minimal_auth_response() {
        let auth: AuthResponse =
            serde_json::from_str(r#"{"token": "t", "exp": 100}"#).unwrap();
        assert_eq!(auth.token, "t");
        assert!(auth.account_id.is_none());
    }

    #[test]
    fn test_auth_request_serializes_credentials_only() {
        let body = AuthRequest {
            username: "user@example.com",
            password: "hunter2",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"username": "user@example.com", "password": "hunter2"})
        );
    }
}
