//! Credential configuration.
//!
//! The API needs three values on every request path: the application id
//! issued by the provider plus the account username and password. They are
//! read from the environment; a missing or empty value is a fatal
//! configuration error raised before any network activity.

use crate::error::CoreError;

// ============================================================================
// Constants
// ============================================================================

/// Environment variable for the application id.
pub const APP_ID_ENV: &str = "GLOWMARKT_APP_ID";

/// Environment variable for the account username.
pub const USERNAME_ENV: &str = "GLOWMARKT_USERNAME";

/// Environment variable for the account password.
pub const PASSWORD_ENV: &str = "GLOWMARKT_PASSWORD";

// ============================================================================
// Credentials
// ============================================================================

/// API credentials, immutable for the lifetime of a client.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Application id issued by the provider.
    pub app_id: String,
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Creates credentials from explicit values.
    pub fn new(
        app_id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Loads credentials from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingConfig`] naming the first variable that
    /// is unset or empty.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads credentials through a lookup function. Split out from
    /// [`Credentials::from_env`] so tests don't have to mutate process
    /// environment variables.
    fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(CoreError::MissingConfig(name))
        };

        Ok(Self {
            app_id: require(APP_ID_ENV)?,
            username: require(USERNAME_ENV)?,
            password: require(PASSWORD_ENV)?,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
