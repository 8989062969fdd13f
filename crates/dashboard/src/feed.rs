//! HTTP read client for the four dashboard view endpoints.
//!
//! The [`Feed`] trait is the seam between the refresh orchestrator and
//! the network; [`FeedClient`] is the real [`reqwest`] implementation.
//! All reads are credentialed (optional bearer token) and cache-disabled.

use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;

use revboard_core::analytics::Overview;
use revboard_core::review::RawReview;
use revboard_core::widget::{Timeseries, Widget};

/// Read access to the dashboard view endpoints.
#[async_trait]
pub trait Feed: Send + Sync {
    /// `GET /analytics/overview`
    async fn overview(&self) -> Result<Overview, FeedError>;

    /// `GET /dashboard/widgets/`
    async fn widgets(&self) -> Result<Vec<Widget>, FeedError>;

    /// `GET /reviews/recent?limit=N`
    async fn recent_reviews(&self, limit: usize) -> Result<Vec<RawReview>, FeedError>;

    /// `GET /widgets/{id}/timeseries`
    async fn widget_timeseries(&self, widget_id: i64) -> Result<Timeseries, FeedError>;
}

/// Errors from the read layer.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The HTTP request itself failed (network, DNS, TLS, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("Feed API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// HTTP client for the dashboard read API.
pub struct FeedClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl FeedClient {
    /// Create a new read client.
    ///
    /// * `base_url`   - API base, e.g. `http://host:8000`.
    /// * `auth_token` - optional bearer token for the `Authorization`
    ///   header; `None` means cookie/anonymous auth.
    pub fn new(base_url: String, auth_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            auth_token,
        }
    }

    /// Issue a cache-disabled GET and deserialize the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, FeedError> {
        let mut request = self
            .client
            .get(format!("{}{path}", self.base_url))
            .header(CACHE_CONTROL, "no-store");

        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl Feed for FeedClient {
    async fn overview(&self) -> Result<Overview, FeedError> {
        self.get_json("/analytics/overview").await
    }

    async fn widgets(&self) -> Result<Vec<Widget>, FeedError> {
        self.get_json("/dashboard/widgets/").await
    }

    async fn recent_reviews(&self, limit: usize) -> Result<Vec<RawReview>, FeedError> {
        self.get_json(&format!("/reviews/recent?limit={limit}")).await
    }

    async fn widget_timeseries(&self, widget_id: i64) -> Result<Timeseries, FeedError> {
        self.get_json(&format!("/widgets/{widget_id}/timeseries")).await
    }
}
