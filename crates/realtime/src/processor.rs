//! WebSocket frame processing loop.
//!
//! Reads raw frames from a live channel connection, parses text frames
//! into typed [`ServerMessage`]s, and forwards them to the dashboard
//! event loop. A frame that fails to parse is logged and dropped; the
//! connection stays up.

use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

use crate::events::ChannelEvent;
use crate::messages::parse_message;

/// Process frames from a channel connection until it closes.
///
/// Loops until the WebSocket closes, a receive error occurs, or the
/// event receiver is dropped. Each text frame is parsed via
/// [`parse_message`]; the resulting message is forwarded as a
/// [`ChannelEvent::Message`].
pub async fn process_messages(
    ws_stream: &mut tokio_tungstenite::WebSocketStream<
        tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
    >,
    events: &mpsc::Sender<ChannelEvent>,
) {
    while let Some(frame_result) = ws_stream.next().await {
        match frame_result {
            Ok(Message::Text(text)) => {
                if !handle_text_frame(&text, events).await {
                    return;
                }
            }
            Ok(Message::Binary(_)) => {
                tracing::trace!("Ignoring binary frame on dashboard channel");
            }
            Ok(Message::Ping(_) | Message::Pong(_)) => {
                // Handled automatically by tungstenite.
            }
            Ok(Message::Close(frame)) => {
                tracing::info!(?frame, "Dashboard channel closed by server");
                break;
            }
            Ok(Message::Frame(_)) => {}
            Err(e) => {
                tracing::error!(error = %e, "WebSocket receive error");
                break;
            }
        }
    }
}

/// Parse and forward one text frame. Returns `false` when the event
/// receiver is gone and processing should stop.
async fn handle_text_frame(text: &str, events: &mpsc::Sender<ChannelEvent>) -> bool {
    match parse_message(text) {
        Ok(msg) => {
            if events.send(ChannelEvent::Message(msg)).await.is_err() {
                tracing::debug!("Event receiver dropped, stopping channel processor");
                return false;
            }
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                raw_message = %text,
                "Failed to parse dashboard channel message",
            );
        }
    }
    true
}
