//! Events emitted by the channel manager toward the dashboard.
//!
//! Raw WebSocket frames never leave this crate; the dashboard event
//! loop only ever sees these typed events.

use crate::messages::ServerMessage;

/// A channel-level event delivered to the dashboard event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelEvent {
    /// The WebSocket connection was established (or re-established).
    Connected,

    /// The WebSocket connection was lost; a reconnect is scheduled.
    Disconnected,

    /// A parsed server-push message.
    Message(ServerMessage),
}
