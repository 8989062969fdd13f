//! Server-push message types and parser.
//!
//! The dashboard server sends flat JSON messages over the WebSocket
//! tagged by a `"type"` field, e.g.
//! `{"type": "import_progress", "job_id": "J1", "processed": 3, "total": 10}`.
//! This module deserializes them into a strongly-typed [`ServerMessage`]
//! enum.

use serde::Deserialize;

/// All known server-push message types.
///
/// Fields beyond the tag are optional on the wire: a well-behaved server
/// sends them all, but the client degrades to defaults rather than
/// rejecting a message over a missing field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// The review store changed; the dashboard should refresh its views.
    ReviewsUpdated,

    /// An import job made progress (`processed` of `total` records).
    ImportProgress {
        #[serde(default)]
        job_id: Option<String>,
        #[serde(default)]
        processed: Option<i64>,
        #[serde(default)]
        total: Option<i64>,
    },

    /// An import job finished. `job_id` is absent for legacy/anonymous
    /// imports; `count` is the number of records imported.
    ImportCompleted {
        #[serde(default)]
        job_id: Option<String>,
        #[serde(default)]
        count: Option<u64>,
    },
}

/// Parse a WebSocket text frame into a typed message.
///
/// Returns `Err` for malformed JSON or unknown `type` values. Callers
/// log the failure and keep the connection alive.
pub fn parse_message(text: &str) -> Result<ServerMessage, serde_json::Error> {
    serde_json::from_str(text)
}
