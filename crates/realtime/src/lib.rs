//! Realtime channel client for the dashboard.
//!
//! Provides typed parsing of server-push messages, WebSocket connection
//! management, a fixed-delay reconnect loop, and a channel-manager task
//! that forwards [`events::ChannelEvent`]s to the dashboard event loop.
//!
//! The channel is receive-only: the dashboard never sends application
//! messages to the server over it.

pub mod client;
pub mod events;
pub mod manager;
pub mod messages;
pub mod processor;
pub mod reconnect;
