//! The Glowmarkt client.

use std::future::Future;
use std::time::Duration;

use glowline_core::{format_utc, CoreError, Credentials, Period, ReadingsPage, Resource, TimeRange};
use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::api::{build_headers, readings_url, resource_url, API_ROOT};
use crate::error::ClientError;
use crate::session::Session;

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Glow Client
// ============================================================================

/// Client for the Glowmarkt energy-metering API.
///
/// Owns a [`Session`] for token management and exposes the two data
/// operations: listing the account's resources and fetching windowed
/// readings for one resource.
#[derive(Debug)]
pub struct GlowClient {
    session: Session,
    http: Client,
    root: Url,
}

impl GlowClient {
    /// Authenticates against the production API root and returns a ready
    /// client. The initial token is acquired eagerly, so a credentials
    /// problem surfaces here rather than on the first data call.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Authentication`] for rejected credentials and
    /// [`ClientError::Http`] for transport failures.
    pub async fn login(credentials: Credentials) -> Result<Self, ClientError> {
        let root = Url::parse(API_ROOT).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        Self::login_with_root(credentials, root).await
    }

    /// Same as [`GlowClient::login`] but against a different API root,
    /// e.g. a local test server.
    pub async fn login_with_root(credentials: Credentials, root: Url) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        let session = Session::new(credentials, http.clone(), root.clone());
        session.ensure_token().await?;

        Ok(Self {
            session,
            http,
            root,
        })
    }

    /// The session backing this client.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Lists the metering resources attached to the account.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Provider`] with status and body when the
    /// endpoint responds with a non-success status.
    #[instrument(skip(self))]
    pub async fn list_resources(&self) -> Result<Vec<Resource>, ClientError> {
        let token = self.session.ensure_token().await?;
        let url = resource_url(&self.root)?;
        let headers = build_headers(self.session.app_id(), Some(&token))?;

        let response = self.http.get(url).headers(headers).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Provider { status, body });
        }

        let resources: Vec<Resource> = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Failed to parse resource list");
            ClientError::Json(e)
        })?;

        debug!(count = resources.len(), "Listed resources");
        Ok(resources)
    }

    /// Fetches aggregated readings for one resource over `range`.
    ///
    /// The range is split into windows no longer than the period's maximum
    /// query span and one request is issued per window, sequentially and in
    /// chronological order. The returned pages follow window order.
    ///
    /// Failure policy is discard-all: the first window that fails aborts
    /// the operation and pages collected from earlier windows are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyResourceId`] (wrapped) for an empty id and
    /// [`ClientError::Provider`] when any window's request returns a
    /// non-success status.
    #[instrument(skip(self, range, period), fields(start = range.start(), end = range.end(), period = %period))]
    pub async fn get_readings(
        &self,
        resource_id: &str,
        range: TimeRange,
        period: &Period,
    ) -> Result<Vec<ReadingsPage>, ClientError> {
        if resource_id.is_empty() {
            return Err(CoreError::EmptyResourceId.into());
        }

        let url = readings_url(&self.root, resource_id)?;
        let windows: Vec<TimeRange> = range.windows(period).collect();
        debug!(windows = windows.len(), "Fetching readings");

        collect_pages(windows, |window| self.fetch_window(&url, window, period)).await
    }

    /// Issues the request for one query window.
    async fn fetch_window(
        &self,
        url: &Url,
        window: TimeRange,
        period: &Period,
    ) -> Result<ReadingsPage, ClientError> {
        let token = self.session.ensure_token().await?;
        let headers = build_headers(self.session.app_id(), Some(&token))?;
        let query = window_query(window, period)?;

        debug!(from = %query[0].1, to = %query[1].1, "Fetching readings window");

        let response = self
            .http
            .get(url.clone())
            .headers(headers)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Provider { status, body });
        }

        let payload = serde_json::from_str(&body)?;
        Ok(ReadingsPage::new(window.start(), window.end(), payload))
    }
}

// ============================================================================
// Paging Helpers
// ============================================================================

/// Fetches every window in order, applying the discard-all policy: the
/// first failure aborts and pages already collected are dropped.
async fn collect_pages<F, Fut>(
    windows: Vec<TimeRange>,
    mut fetch: F,
) -> Result<Vec<ReadingsPage>, ClientError>
where
    F: FnMut(TimeRange) -> Fut,
    Fut: Future<Output = Result<ReadingsPage, ClientError>>,
{
    let mut pages = Vec::with_capacity(windows.len());
    for window in windows {
        pages.push(fetch(window).await?);
    }
    Ok(pages)
}

/// Query parameters for one readings window. Timestamps go on the wire as
/// ISO-8601 UTC without an offset suffix.
fn window_query(
    window: TimeRange,
    period: &Period,
) -> Result<[(&'static str, String); 5], ClientError> {
    Ok([
        ("from", format_utc(window.start())?),
        ("to", format_utc(window.end())?),
        ("period", period.code().to_string()),
        ("offset", "0".to_string()),
        ("function", "sum".to_string()),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::cell::Cell;

    fn page_for(window: TimeRange) -> ReadingsPage {
        ReadingsPage::new(window.start(), window.end(), serde_json::json!({"status": "OK"}))
    }

    #[test]
    fn test_window_query_params() {
        let window = TimeRange::new(1_579_261_478, 1_579_261_538).unwrap();
        let query = window_query(window, &Period::HalfHour).unwrap();

        assert_eq!(query[0], ("from", "2020-01-17T11:44:38".to_string()));
        assert_eq!(query[1], ("to", "2020-01-17T11:45:38".to_string()));
        assert_eq!(query[2], ("period", "PT30M".to_string()));
        assert_eq!(query[3], ("offset", "0".to_string()));
        assert_eq!(query[4], ("function", "sum".to_string()));
    }

    #[test]
    fn test_window_query_custom_period() {
        let window = TimeRange::new(0, 60).unwrap();
        let query = window_query(window, &Period::Custom("PT5M".to_string())).unwrap();
        assert_eq!(query[2], ("period", "PT5M".to_string()));
    }

    #[tokio::test]
    async fn test_pages_follow_window_order() {
        let range = TimeRange::new(0, 864_000 * 5 / 2).unwrap();
        let windows: Vec<TimeRange> = range.windows(&Period::HalfHour).collect();

        let pages = collect_pages(windows, |w| async move { Ok(page_for(w)) })
            .await
            .unwrap();

        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].from, 0);
        assert_eq!(pages[1].from, 864_000);
        assert_eq!(pages[2].to, 2_160_000);
    }

    #[tokio::test]
    async fn test_window_failure_discards_prior_pages() {
        let range = TimeRange::new(0, 864_000 * 3).unwrap();
        let windows: Vec<TimeRange> = range.windows(&Period::HalfHour).collect();
        assert_eq!(windows.len(), 3);

        let calls = Cell::new(0_u32);
        let result = collect_pages(windows, |w| {
            let call = calls.get();
            calls.set(call + 1);
            async move {
                if call == 1 {
                    Err(ClientError::Provider {
                        status: StatusCode::INTERNAL_SERVER_ERROR,
                        body: "boom".to_string(),
                    })
                } else {
                    Ok(page_for(w))
                }
            }
        })
        .await;

        // The failure aborts the fetch: no partial pages, no further calls.
        assert!(matches!(result, Err(ClientError::Provider { .. })));
        assert_eq!(calls.get(), 2);
    }
}
