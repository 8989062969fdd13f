//! Fixed-delay reconnection for the dashboard channel.
//!
//! When the connection drops, the channel manager calls
//! [`reconnect_loop`] to keep retrying until either a connection is
//! restored or the [`CancellationToken`] is triggered. The delay is
//! constant: a dashboard is a long-lived session and the server being
//! down for a while is normal, so there is no exponential growth and no
//! retry limit.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::client::{ChannelClient, ChannelConnection};

/// Tunable parameters for the reconnect strategy.
#[derive(Debug, Clone)]
pub struct ReconnectConfig {
    /// Fixed delay before every reconnection attempt.
    pub delay: Duration,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(3),
        }
    }
}

/// Retry connecting with a fixed delay before each attempt.
///
/// Exactly one attempt is scheduled per iteration, never sooner than
/// [`ReconnectConfig::delay`] after the previous close or failure.
/// Returns `Some(connection)` once a connection succeeds, or `None` if
/// the `cancel` token is triggered first.
pub async fn reconnect_loop(
    client: &ChannelClient,
    config: &ReconnectConfig,
    cancel: &CancellationToken,
) -> Option<ChannelConnection> {
    let mut attempt = 0u32;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(url = %client.ws_url(), "Reconnect cancelled");
                return None;
            }
            _ = tokio::time::sleep(config.delay) => {}
        }

        attempt += 1;
        tracing::info!(
            url = %client.ws_url(),
            attempt,
            delay_ms = config.delay.as_millis() as u64,
            "Reconnecting to dashboard channel",
        );

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(url = %client.ws_url(), "Reconnect cancelled");
                return None;
            }
            result = client.connect() => {
                match result {
                    Ok(conn) => {
                        tracing::info!(url = %client.ws_url(), attempt, "Reconnected to dashboard channel");
                        return Some(conn);
                    }
                    Err(e) => {
                        tracing::warn!(
                            url = %client.ws_url(),
                            error = %e,
                            "Reconnect attempt {attempt} failed",
                        );
                    }
                }
            }
        }
    }
}
