//! Review records as they arrive from the recent-reviews endpoint, and
//! the normalization applied before they reach the table.
//!
//! The feed is lenient about shapes: ids arrive as numbers or strings,
//! string fields may be missing entirely. Normalization coerces rather
//! than rejects, so a partially malformed record still renders as a row.

use serde::Deserialize;
use serde_json::Value;

/// How many rows the recent-reviews table displays.
pub const RECENT_DISPLAY_LIMIT: usize = 20;

/// A raw review record from `GET /reviews/recent`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReview {
    /// Number or string on the wire; coerced during normalization.
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub sentiment: String,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub sentiment_summary: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub date: String,
}

/// A normalized table row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewRow {
    pub id: i64,
    pub product: String,
    pub sentiment: String,
    pub sentiment_score: Option<f64>,
    pub sentiment_summary: String,
    pub text: String,
    pub date: String,
}

/// Coerce a wire id to an integer. Non-numeric ids coerce to 0.
pub fn coerce_id(id: &Value) -> i64 {
    match id {
        Value::Number(n) => n.as_i64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

impl From<RawReview> for ReviewRow {
    fn from(raw: RawReview) -> Self {
        ReviewRow {
            id: coerce_id(&raw.id),
            product: raw.product,
            sentiment: raw.sentiment,
            sentiment_score: raw.sentiment_score,
            sentiment_summary: raw.sentiment_summary,
            text: raw.text,
            date: raw.date,
        }
    }
}

/// Normalize, sort by id descending, and cap at the display limit.
pub fn prepare_recent(records: Vec<RawReview>, limit: usize) -> Vec<ReviewRow> {
    let mut rows: Vec<ReviewRow> = records.into_iter().map(ReviewRow::from).collect();
    // Stable sort keeps arrival order among equal (e.g. coerced-to-0) ids.
    rows.sort_by(|a, b| b.id.cmp(&a.id));
    rows.truncate(limit);
    rows
}
