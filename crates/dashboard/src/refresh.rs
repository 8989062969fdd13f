//! The refresh orchestrator: one serialized chain of refresh cycles.
//!
//! A cycle pulls the four read views (overview, widget list, recent
//! reviews, per-widget timeseries) and applies each result to its view
//! region as that read resolves. Cycles never run concurrently: they
//! are chained through a fair async mutex, so a burst of triggers
//! (timer tick, channel message, manual request) executes as a strictly
//! sequential run of cycles in trigger order. [`schedule`] additionally
//! coalesces bursts down to at most one queued cycle behind the running
//! one.
//!
//! A failed read is logged and leaves its region stale; it never aborts
//! the other reads, the cycle, or the chain.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::feed::Feed;
use crate::view::DashboardView;

pub struct RefreshOrchestrator {
    feed: Arc<dyn Feed>,
    view: Arc<RwLock<DashboardView>>,
    /// Serializes cycles; tokio's mutex is FIFO-fair, which preserves
    /// trigger order.
    chain: Mutex<()>,
    /// Single-slot "queued next" flag for coalescing.
    queued: AtomicBool,
    recent_limit: usize,
}

impl RefreshOrchestrator {
    pub fn new(feed: Arc<dyn Feed>, recent_limit: usize) -> Self {
        Self {
            feed,
            view: Arc::new(RwLock::new(DashboardView::default())),
            chain: Mutex::new(()),
            queued: AtomicBool::new(false),
            recent_limit,
        }
    }

    /// Shared handle to the view state this orchestrator writes.
    pub fn view(&self) -> Arc<RwLock<DashboardView>> {
        Arc::clone(&self.view)
    }

    /// Run one refresh cycle, queued behind any cycle already in
    /// flight. Resolves once all four reads have settled.
    pub async fn refresh(&self) {
        let _guard = self.chain.lock().await;
        self.run_cycle().await;
    }

    /// Coalescing trigger entry point.
    ///
    /// If a cycle is running and another is already queued, this call
    /// collapses into the queued one and returns without running
    /// anything; otherwise it queues (or immediately runs) a cycle.
    pub async fn schedule(&self) {
        if self.queued.swap(true, Ordering::AcqRel) {
            // A queued cycle will observe state at least as fresh as
            // this trigger would have.
            return;
        }
        let _guard = self.chain.lock().await;
        self.queued.store(false, Ordering::Release);
        self.run_cycle().await;
    }

    /// Issue the four reads together and apply each as it resolves.
    async fn run_cycle(&self) {
        let overview = async {
            match self.feed.overview().await {
                Ok(raw) => self.view.write().await.apply_overview(raw),
                Err(e) => tracing::warn!(error = %e, "Overview read failed"),
            }
        };

        let widgets = async {
            match self.feed.widgets().await {
                Ok(list) => {
                    let chart_ids = self.view.write().await.apply_widgets(list);
                    // Series reads run concurrently; each updates only
                    // its own card, in whatever order they complete.
                    let reads = chart_ids.into_iter().map(|id| async move {
                        match self.feed.widget_timeseries(id).await {
                            Ok(series) => self.view.write().await.apply_series(id, series),
                            Err(e) => {
                                tracing::warn!(widget_id = id, error = %e, "Timeseries read failed")
                            }
                        }
                    });
                    futures::future::join_all(reads).await;
                }
                Err(e) => tracing::warn!(error = %e, "Widget list read failed"),
            }
        };

        let reviews = async {
            match self.feed.recent_reviews(self.recent_limit).await {
                Ok(records) => self
                    .view
                    .write()
                    .await
                    .apply_reviews(records, self.recent_limit),
                Err(e) => tracing::warn!(error = %e, "Recent reviews read failed"),
            }
        };

        tokio::join!(overview, widgets, reviews);
    }
}
