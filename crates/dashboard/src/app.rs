//! The dashboard event loop.
//!
//! A single task owns the job tracker, toast queue, and indicator, and
//! receives typed events from the realtime channel, the periodic
//! refresh timer, and settled refresh cycles. All mutation of shared
//! dashboard state happens here, one event at a time.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use revboard_realtime::events::ChannelEvent;
use revboard_realtime::messages::ServerMessage;

use crate::bootstrap::{consume_location, IMPORT_STARTED};
use crate::indicator::Indicator;
use crate::refresh::RefreshOrchestrator;
use crate::toast::{ToastLevel, ToastNotifier};
use crate::tracker::{progress_label, CompletionOutcome, JobTracker};

/// Events the loop sends itself.
#[derive(Debug)]
pub enum AppEvent {
    /// A channel-triggered refresh cycle has settled; re-derive the
    /// indicator from the (possibly changed) job set.
    RefreshSettled,
}

pub struct DashboardApp {
    tracker: JobTracker,
    toasts: ToastNotifier,
    indicator: Indicator,
    orchestrator: Arc<RefreshOrchestrator>,
    internal_tx: mpsc::Sender<AppEvent>,
}

impl DashboardApp {
    pub fn new(
        orchestrator: Arc<RefreshOrchestrator>,
        toast_ttl: Duration,
        internal_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            tracker: JobTracker::new(),
            toasts: ToastNotifier::new(toast_ttl),
            indicator: Indicator::new(),
            orchestrator,
            internal_tx,
        }
    }

    /// Consume the one-shot flash markers from the initial location.
    ///
    /// Seeds the toast queue and tracker, then returns the scrubbed
    /// location the caller should treat as canonical. An unparseable
    /// location is logged and ignored.
    pub fn bootstrap(&mut self, location: &str) -> Option<String> {
        let outcome = match consume_location(location) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(location, error = %e, "Ignoring unparseable dashboard location");
                return None;
            }
        };

        if let Some((level, message)) = outcome.toast {
            self.toasts.push(level, message);
        }

        if let Some(job_id) = &outcome.job_id {
            // Counts are unknown until the first progress message.
            self.tracker.upsert(job_id, None, None);
            self.indicator.show(IMPORT_STARTED);
        }

        Some(outcome.scrubbed)
    }

    /// Run the loop until cancelled.
    ///
    /// Performs the first refresh, then reacts to channel events, the
    /// periodic timer, and settled refresh notifications.
    pub async fn run(
        mut self,
        mut channel_rx: mpsc::Receiver<ChannelEvent>,
        mut internal_rx: mpsc::Receiver<AppEvent>,
        refresh_interval: Duration,
        cancel: CancellationToken,
    ) {
        self.orchestrator.refresh().await;

        let mut ticker = tokio::time::interval_at(
            tokio::time::Instant::now() + refresh_interval,
            refresh_interval,
        );
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Dashboard loop shutting down");
                    return;
                }
                Some(event) = channel_rx.recv() => self.handle_channel_event(event),
                Some(event) = internal_rx.recv() => self.handle_app_event(event),
                _ = ticker.tick() => {
                    // Periodic reconciliation; never touches the job set.
                    self.schedule_refresh(false);
                }
            }
            self.toasts.sweep();
        }
    }

    pub fn handle_channel_event(&mut self, event: ChannelEvent) {
        match event {
            ChannelEvent::Connected => {
                tracing::info!("Realtime channel open");
            }
            ChannelEvent::Disconnected => {
                tracing::info!("Realtime channel closed, reconnect scheduled");
            }
            ChannelEvent::Message(msg) => self.handle_message(msg),
        }
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::RefreshSettled => self.indicator.recompute(&self.tracker),
        }
    }

    fn handle_message(&mut self, msg: ServerMessage) {
        match msg {
            ServerMessage::ReviewsUpdated => {
                self.schedule_refresh(true);
            }

            ServerMessage::ImportProgress {
                job_id,
                processed,
                total,
            } => {
                if let Some(id) = &job_id {
                    self.tracker.upsert(id, processed, total);
                }
                let shown_processed = processed.unwrap_or(0).max(0) as u64;
                let shown_total = total.filter(|t| *t >= 0).map(|t| t as u64);
                self.indicator
                    .show(progress_label(shown_processed, shown_total));
            }

            ServerMessage::ImportCompleted { job_id, count } => {
                match self.tracker.complete(job_id.as_deref()) {
                    CompletionOutcome::Completed => {
                        self.toasts
                            .push(ToastLevel::Success, completed_message(count));
                        self.indicator.recompute(&self.tracker);
                    }
                    CompletionOutcome::Anonymous => {
                        self.toasts
                            .push(ToastLevel::Success, completed_message(count));
                        self.indicator.hide();
                    }
                    CompletionOutcome::UnknownJob => {
                        // Duplicate or late completion for a job this
                        // client never started or already reconciled.
                        tracing::debug!(
                            job_id = job_id.as_deref().unwrap_or(""),
                            "Dropping completion for untracked job",
                        );
                    }
                }
            }
        }
    }

    /// Fire-and-forget a coalesced refresh. When `reconcile_indicator`
    /// is set, a [`AppEvent::RefreshSettled`] comes back once the cycle
    /// settles.
    fn schedule_refresh(&self, reconcile_indicator: bool) {
        let orchestrator = Arc::clone(&self.orchestrator);
        let internal_tx = self.internal_tx.clone();
        tokio::spawn(async move {
            orchestrator.schedule().await;
            if reconcile_indicator {
                let _ = internal_tx.send(AppEvent::RefreshSettled).await;
            }
        });
    }

    // ---- accessors used by main and tests ----

    pub fn tracker(&self) -> &JobTracker {
        &self.tracker
    }

    pub fn toasts(&self) -> &ToastNotifier {
        &self.toasts
    }

    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }
}

/// Success toast for a finished import.
fn completed_message(count: Option<u64>) -> String {
    format!("Imported {} reviews", count.unwrap_or(0))
}
