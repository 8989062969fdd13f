//! Channel manager: one persistent connection, reconnected forever.
//!
//! [`spawn_channel`] starts a long-lived task that owns the WebSocket
//! connection to the dashboard server. The task cycles through
//! connect -> process frames -> reconnect with a fixed delay, emitting
//! [`ChannelEvent`]s to the dashboard event loop, until the
//! [`CancellationToken`] is triggered.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::client::ChannelClient;
use crate::events::ChannelEvent;
use crate::processor::process_messages;
use crate::reconnect::{reconnect_loop, ReconnectConfig};

/// Buffer size of the event channel toward the dashboard loop.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Spawn the channel-manager task.
///
/// Returns the receiving end of the event stream and the task handle.
/// Dropping the receiver stops the task at the next frame; cancelling
/// the token stops it at the next await point.
pub fn spawn_channel(
    client: ChannelClient,
    config: ReconnectConfig,
    cancel: CancellationToken,
) -> (mpsc::Receiver<ChannelEvent>, tokio::task::JoinHandle<()>) {
    let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

    let handle = tokio::spawn(async move {
        tracing::info!(url = %client.ws_url(), "Starting dashboard channel task");
        run_connection_loop(&client, &config, &tx, &cancel).await;
        tracing::info!("Dashboard channel task exited");
    });

    (rx, handle)
}

/// Core connection loop: connect -> process frames -> reconnect.
///
/// Runs until the cancellation token is triggered. The first attempt
/// connects immediately; every subsequent attempt waits the configured
/// fixed delay.
async fn run_connection_loop(
    client: &ChannelClient,
    config: &ReconnectConfig,
    events: &mpsc::Sender<ChannelEvent>,
    cancel: &CancellationToken,
) {
    // Initial connection, without the reconnect delay.
    let mut conn = {
        let first = tokio::select! {
            _ = cancel.cancelled() => return,
            result = client.connect() => result,
        };
        match first {
            Ok(conn) => conn,
            Err(e) => {
                tracing::warn!(error = %e, "Initial connection failed, entering reconnect loop");
                match reconnect_loop(client, config, cancel).await {
                    Some(conn) => conn,
                    None => return, // cancelled
                }
            }
        }
    };

    loop {
        if events.send(ChannelEvent::Connected).await.is_err() {
            return;
        }

        let mut ws_stream = conn.ws_stream;
        tokio::select! {
            _ = cancel.cancelled() => return,
            _ = process_messages(&mut ws_stream, events) => {}
        }

        if events.send(ChannelEvent::Disconnected).await.is_err() {
            return;
        }

        if cancel.is_cancelled() {
            return;
        }

        tracing::info!("Connection lost, entering reconnect loop");
        conn = match reconnect_loop(client, config, cancel).await {
            Some(conn) => conn,
            None => return, // cancelled
        };
    }
}
