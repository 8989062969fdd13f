//! WebSocket client for the dashboard realtime channel.
//!
//! [`ChannelClient`] holds the connection configuration for the server's
//! `/ws/dashboard` endpoint. Call [`ChannelClient::connect`] to
//! establish a live [`ChannelConnection`].

use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::header::AUTHORIZATION;
use tokio_tungstenite::{connect_async, MaybeTlsStream};

/// Configuration handle for the realtime channel.
pub struct ChannelClient {
    ws_url: String,
    auth_token: Option<String>,
}

/// A live WebSocket connection to the dashboard channel.
pub struct ChannelConnection {
    /// The raw WebSocket stream for reading frames.
    pub ws_stream: tokio_tungstenite::WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>,
}

impl ChannelClient {
    /// Create a new client for the channel endpoint.
    ///
    /// * `ws_url`     - full WebSocket URL, e.g. `ws://host:8000/ws/dashboard`.
    /// * `auth_token` - optional bearer token sent in the handshake.
    pub fn new(ws_url: String, auth_token: Option<String>) -> Self {
        Self { ws_url, auth_token }
    }

    /// WebSocket URL this client connects to.
    pub fn ws_url(&self) -> &str {
        &self.ws_url
    }

    /// Connect to the dashboard WebSocket endpoint.
    ///
    /// When a bearer token is configured it is attached as an
    /// `Authorization` header on the handshake request; otherwise the
    /// server falls back to cookie auth.
    pub async fn connect(&self) -> Result<ChannelConnection, ChannelError> {
        let mut request = self
            .ws_url
            .as_str()
            .into_client_request()
            .map_err(|e| ChannelError::Connection(format!("Invalid WebSocket URL: {e}")))?;

        if let Some(token) = &self.auth_token {
            let value = format!("Bearer {token}")
                .parse()
                .map_err(|_| ChannelError::Connection("Invalid auth token".into()))?;
            request.headers_mut().insert(AUTHORIZATION, value);
        }

        let (ws_stream, _response) = connect_async(request).await.map_err(|e| {
            ChannelError::Connection(format!(
                "Failed to connect to dashboard channel at {}: {e}",
                self.ws_url
            ))
        })?;

        tracing::info!(url = %self.ws_url, "Connected to dashboard channel");

        Ok(ChannelConnection { ws_stream })
    }
}

/// Errors that can occur when working with the channel client.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// Failed to establish the WebSocket connection.
    #[error("Connection error: {0}")]
    Connection(String),
}
