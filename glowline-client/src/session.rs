//! Session and token management.
//!
//! The provider issues time-limited tokens from its auth endpoint. The
//! session caches the current token with its absolute expiry and refreshes
//! it on demand: a token is valid strictly before its expiry, and at or
//! after expiry the next caller triggers a fresh authentication exchange.

use chrono::Utc;
use glowline_core::Credentials;
use reqwest::Client;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::api::{auth_url, build_headers, AuthRequest, AuthResponse};
use crate::error::ClientError;

// ============================================================================
// Token Cache
// ============================================================================

/// Cached token and its absolute expiry (epoch seconds).
#[derive(Debug, Clone)]
struct TokenCache {
    token: String,
    expires_at: i64,
}

impl TokenCache {
    /// A cache that forces the first use to authenticate.
    fn expired() -> Self {
        Self {
            token: String::new(),
            expires_at: 0,
        }
    }

    /// A token is valid strictly before its expiry.
    fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at <= now
    }
}

// ============================================================================
// Session
// ============================================================================

/// Holds credentials and guarantees callers a non-expired token.
///
/// The cache is behind a mutex held across the whole check-then-refresh
/// sequence, so concurrent call sites on one session serialize and cannot
/// race into duplicate authentication calls.
#[derive(Debug)]
pub struct Session {
    credentials: Credentials,
    http: Client,
    root: Url,
    cache: Mutex<TokenCache>,
}

impl Session {
    /// Creates a session with an empty token cache; the first
    /// [`Session::ensure_token`] call authenticates.
    pub fn new(credentials: Credentials, http: Client, root: Url) -> Self {
        Self {
            credentials,
            http,
            root,
            cache: Mutex::new(TokenCache::expired()),
        }
    }

    /// The application id these credentials belong to.
    pub fn app_id(&self) -> &str {
        &self.credentials.app_id
    }

    /// Returns a token valid at call time.
    ///
    /// Uses the cached token when its expiry is still in the future;
    /// otherwise performs the authentication exchange and replaces the
    /// cache with the newly issued token and expiry.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Authentication`] when the auth endpoint
    /// responds with a non-success status. Not retried internally.
    #[instrument(skip(self))]
    pub async fn ensure_token(&self) -> Result<String, ClientError> {
        let mut cache = self.cache.lock().await;

        if cache.is_expired_at(Utc::now().timestamp()) {
            debug!("Cached token expired, authenticating");
            let auth = self.authenticate().await?;
            *cache = TokenCache {
                token: auth.token,
                expires_at: auth.exp,
            };
        }

        Ok(cache.token.clone())
    }

    /// Expiry (epoch seconds) of the currently cached token, or `None` if
    /// no token has been issued yet.
    pub async fn expires_at(&self) -> Option<i64> {
        let cache = self.cache.lock().await;
        (!cache.token.is_empty()).then_some(cache.expires_at)
    }

    /// Submits credentials to the auth endpoint.
    async fn authenticate(&self) -> Result<AuthResponse, ClientError> {
        let url = auth_url(&self.root)?;
        let headers = build_headers(self.app_id(), None)?;
        let body = AuthRequest {
            username: &self.credentials.username,
            password: &self.credentials.password,
        };

        let response = self
            .http
            .post(url)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Authentication { status, body: text });
        }

        let auth: AuthResponse = serde_json::from_str(&text).map_err(|e| {
            warn!(error = %e, "Failed to parse auth response");
            ClientError::Json(e)
        })?;

        debug!(expires_at = auth.exp, "Authenticated");
        Ok(auth)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_cache_is_expired() {
        let cache = TokenCache::expired();
        assert!(cache.is_expired_at(0));
        assert!(cache.is_expired_at(1_700_000_000));
    }

    #[test]
    fn test_future_expiry_is_valid() {
        let cache = TokenCache {
            token: "t".to_string(),
            expires_at: 1_000,
        };
        assert!(!cache.is_expired_at(999));
    }

    #[test]
    fn test_expiry_boundary_is_expired() {
        // Valid strictly before expiry; at expiry the token must refresh.
        let cache = TokenCache {
            token: "t".to_string(),
            expires_at: 1_000,
        };
        assert!(cache.is_expired_at(1_000));
        assert!(cache.is_expired_at(1_001));
    }
}
