//! Dashboard client configuration loaded from environment variables.

use std::time::Duration;

/// Client configuration.
///
/// All fields have defaults suitable for a local server. Override via
/// environment variables.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL of the read API (default: `http://localhost:8000`).
    pub api_base_url: String,
    /// Realtime channel URL (default: `ws://localhost:8000/ws/dashboard`).
    pub ws_url: String,
    /// Optional bearer token attached to every read request and the
    /// WebSocket handshake. Absent means cookie/anonymous auth.
    pub auth_token: Option<String>,
    /// Interval of the periodic refresh timer.
    pub refresh_interval: Duration,
    /// Fixed delay before each channel reconnect attempt.
    pub reconnect_delay: Duration,
    /// Row cap of the recent-reviews table.
    pub recent_limit: usize,
    /// How long a toast stays visible before auto-dismissing.
    pub toast_ttl: Duration,
    /// The location the dashboard was opened at, carrying one-shot
    /// flash markers (`status`, `error`, `job`) to bootstrap from.
    pub location: Option<String>,
}

impl DashboardConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                           |
    /// |--------------------------|-----------------------------------|
    /// | `API_BASE_URL`           | `http://localhost:8000`           |
    /// | `WS_URL`                 | `ws://localhost:8000/ws/dashboard`|
    /// | `AUTH_TOKEN`             | unset                             |
    /// | `REFRESH_INTERVAL_SECS`  | `30`                              |
    /// | `RECONNECT_DELAY_SECS`   | `3`                               |
    /// | `RECENT_REVIEWS_LIMIT`   | `20`                              |
    /// | `TOAST_TTL_SECS`         | `5`                               |
    /// | `DASHBOARD_LOCATION`     | unset                             |
    pub fn from_env() -> Self {
        let api_base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".into());

        let ws_url = std::env::var("WS_URL")
            .unwrap_or_else(|_| "ws://localhost:8000/ws/dashboard".into());

        let auth_token = std::env::var("AUTH_TOKEN").ok().filter(|t| !t.is_empty());

        let refresh_interval_secs: u64 = std::env::var("REFRESH_INTERVAL_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REFRESH_INTERVAL_SECS must be a valid u64");

        let reconnect_delay_secs: u64 = std::env::var("RECONNECT_DELAY_SECS")
            .unwrap_or_else(|_| "3".into())
            .parse()
            .expect("RECONNECT_DELAY_SECS must be a valid u64");

        let recent_limit: usize = std::env::var("RECENT_REVIEWS_LIMIT")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("RECENT_REVIEWS_LIMIT must be a valid usize");

        let toast_ttl_secs: u64 = std::env::var("TOAST_TTL_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("TOAST_TTL_SECS must be a valid u64");

        let location = std::env::var("DASHBOARD_LOCATION").ok().filter(|l| !l.is_empty());

        Self {
            api_base_url,
            ws_url,
            auth_token,
            refresh_interval: Duration::from_secs(refresh_interval_secs),
            reconnect_delay: Duration::from_secs(reconnect_delay_secs),
            recent_limit,
            toast_ttl: Duration::from_secs(toast_ttl_secs),
            location,
        }
    }
}
