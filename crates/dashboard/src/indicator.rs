//! The shared "work in progress" indicator.
//!
//! Visibility is derived state: visible iff at least one job is tracked,
//! or a show was forced (progress message, bootstrap marker). Published
//! through a watch channel so render code and tests can observe changes.

use tokio::sync::watch;

use crate::tracker::JobTracker;

/// What the indicator currently displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorState {
    pub visible: bool,
    /// Last progress message shown; kept when the indicator hides.
    pub message: String,
}

/// Owner side of the indicator state.
#[derive(Debug)]
pub struct Indicator {
    tx: watch::Sender<IndicatorState>,
}

impl Default for Indicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(IndicatorState::default());
        Self { tx }
    }

    /// Observe indicator changes.
    pub fn subscribe(&self) -> watch::Receiver<IndicatorState> {
        self.tx.subscribe()
    }

    /// Current state.
    pub fn state(&self) -> IndicatorState {
        self.tx.borrow().clone()
    }

    /// Force the indicator visible with a new message.
    pub fn show(&self, message: impl Into<String>) {
        let message = message.into();
        self.tx.send_modify(|state| {
            state.visible = true;
            state.message = message;
        });
    }

    /// Force the indicator hidden.
    pub fn hide(&self) {
        self.tx.send_modify(|state| state.visible = false);
    }

    /// Re-derive visibility from the tracked-job set.
    pub fn recompute(&self, tracker: &JobTracker) {
        let visible = !tracker.is_empty();
        self.tx.send_if_modified(|state| {
            if state.visible == visible {
                return false;
            }
            state.visible = visible;
            true
        });
    }
}
