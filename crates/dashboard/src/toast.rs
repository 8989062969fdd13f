//! Transient, auto-dismissing user messages.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::time::Instant;

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// One visible message.
#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    expires_at: Instant,
}

/// Queue of active toasts with a fixed time-to-live.
#[derive(Debug)]
pub struct ToastNotifier {
    ttl: Duration,
    queue: VecDeque<Toast>,
    /// Total toasts ever pushed; lets tests assert at-most-once rules
    /// without racing the expiry sweep.
    pushed: u64,
}

impl ToastNotifier {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            queue: VecDeque::new(),
            pushed: 0,
        }
    }

    /// Show a new toast.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            ToastLevel::Error => tracing::warn!(toast = %message, "toast"),
            _ => tracing::info!(toast = %message, "toast"),
        }
        self.queue.push_back(Toast {
            level,
            message,
            expires_at: Instant::now() + self.ttl,
        });
        self.pushed += 1;
    }

    /// Drop expired toasts.
    pub fn sweep(&mut self) {
        let now = Instant::now();
        self.queue.retain(|t| t.expires_at > now);
    }

    /// Currently visible toasts, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    /// Number of toasts shown since creation (expired ones included).
    pub fn total_shown(&self) -> u64 {
        self.pushed
    }
}
