use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use revboard_dashboard::app::DashboardApp;
use revboard_dashboard::config::DashboardConfig;
use revboard_dashboard::feed::FeedClient;
use revboard_dashboard::refresh::RefreshOrchestrator;
use revboard_realtime::client::ChannelClient;
use revboard_realtime::manager::spawn_channel;
use revboard_realtime::reconnect::ReconnectConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "revboard_dashboard=debug,revboard_realtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = DashboardConfig::from_env();
    tracing::info!(
        api = %config.api_base_url,
        ws = %config.ws_url,
        "Loaded dashboard configuration",
    );

    // --- Read client and orchestrator ---
    let feed = Arc::new(FeedClient::new(
        config.api_base_url.clone(),
        config.auth_token.clone(),
    ));
    let orchestrator = Arc::new(RefreshOrchestrator::new(feed, config.recent_limit));

    // --- Application loop ---
    let (internal_tx, internal_rx) = mpsc::channel(16);
    let mut app = DashboardApp::new(Arc::clone(&orchestrator), config.toast_ttl, internal_tx);

    // One-shot flash bootstrap before anything else runs.
    if let Some(location) = &config.location {
        if let Some(scrubbed) = app.bootstrap(location) {
            tracing::info!(location = %scrubbed, "Bootstrapped from flash markers");
        }
    }

    // --- Realtime channel ---
    let cancel = CancellationToken::new();
    let channel_client = ChannelClient::new(config.ws_url.clone(), config.auth_token.clone());
    let reconnect = ReconnectConfig {
        delay: config.reconnect_delay,
    };
    let (channel_rx, channel_handle) =
        spawn_channel(channel_client, reconnect, cancel.child_token());

    // --- Shutdown on Ctrl-C ---
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            signal_cancel.cancel();
        }
    });

    app.run(channel_rx, internal_rx, config.refresh_interval, cancel)
        .await;

    // Give the channel task a moment to wind down.
    let _ = tokio::time::timeout(Duration::from_secs(5), channel_handle).await;
    tracing::info!("Dashboard stopped");
}
