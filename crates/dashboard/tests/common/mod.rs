//! Shared test doubles for the dashboard integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use revboard_core::analytics::Overview;
use revboard_core::review::RawReview;
use revboard_core::widget::{Timeseries, Widget};
use revboard_dashboard::feed::{Feed, FeedError};

/// Scriptable in-memory [`Feed`].
///
/// Every read takes `delay` to resolve, so overlapping refresh cycles
/// overlap their overview reads; `max_concurrent` records the largest
/// overlap observed and `cycles` counts cycles started.
pub struct StubFeed {
    pub delay: Duration,
    pub fail_overview: bool,
    pub overview: Overview,
    pub widgets: Vec<Widget>,
    pub reviews: Vec<RawReview>,
    pub series: Timeseries,
    active: AtomicUsize,
    max_active: AtomicUsize,
    cycles: AtomicUsize,
}

impl Default for StubFeed {
    fn default() -> Self {
        Self {
            delay: Duration::ZERO,
            fail_overview: false,
            overview: Overview::default(),
            widgets: Vec::new(),
            reviews: Vec::new(),
            series: Timeseries::default(),
            active: AtomicUsize::new(0),
            max_active: AtomicUsize::new(0),
            cycles: AtomicUsize::new(0),
        }
    }
}

impl StubFeed {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Default::default()
        }
    }

    /// Number of refresh cycles that have started.
    pub fn cycles(&self) -> usize {
        self.cycles.load(Ordering::SeqCst)
    }

    /// Largest number of concurrently in-flight overview reads seen.
    pub fn max_concurrent(&self) -> usize {
        self.max_active.load(Ordering::SeqCst)
    }

    async fn pace(&self) {
        if self.delay > Duration::ZERO {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl Feed for StubFeed {
    async fn overview(&self) -> Result<Overview, FeedError> {
        self.cycles.fetch_add(1, Ordering::SeqCst);
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(now, Ordering::SeqCst);
        self.pace().await;
        self.active.fetch_sub(1, Ordering::SeqCst);

        if self.fail_overview {
            Err(FeedError::Api {
                status: 500,
                body: "stub overview failure".into(),
            })
        } else {
            Ok(self.overview.clone())
        }
    }

    async fn widgets(&self) -> Result<Vec<Widget>, FeedError> {
        self.pace().await;
        Ok(self.widgets.clone())
    }

    async fn recent_reviews(&self, _limit: usize) -> Result<Vec<RawReview>, FeedError> {
        self.pace().await;
        Ok(self.reviews.clone())
    }

    async fn widget_timeseries(&self, _widget_id: i64) -> Result<Timeseries, FeedError> {
        self.pace().await;
        Ok(self.series.clone())
    }
}

/// Build a widget from JSON, the way the wire delivers one.
pub fn widget_from_json(json: serde_json::Value) -> Widget {
    serde_json::from_value(json).expect("valid widget json")
}
