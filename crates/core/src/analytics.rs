//! Analytics overview payload and shaping rules.

use serde::Deserialize;

use crate::format::round2;

/// How many highlight strings the overview region displays at most.
pub const HIGHLIGHT_LIMIT: usize = 5;

/// Payload of the `GET /analytics/overview` endpoint.
///
/// The server also sends a `metrics` label map; the client has no use
/// for it, so it is simply not declared here and serde drops it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Overview {
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub average_sentiment: f64,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// The overview region as displayed: sentiment rounded to two decimal
/// places, highlights capped at [`HIGHLIGHT_LIMIT`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewRegion {
    pub total_reviews: u64,
    pub average_sentiment: f64,
    pub highlights: Vec<String>,
}

impl OverviewRegion {
    /// True when there are no highlights to show (the region renders
    /// its empty-state copy instead).
    pub fn is_empty_highlights(&self) -> bool {
        self.highlights.is_empty()
    }
}

/// Shape a raw overview payload for display.
pub fn shape_overview(raw: Overview) -> OverviewRegion {
    let mut highlights = raw.highlights;
    highlights.truncate(HIGHLIGHT_LIMIT);
    OverviewRegion {
        total_reviews: raw.total_reviews,
        average_sentiment: round2(raw.average_sentiment),
        highlights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_rounds_sentiment_to_two_decimals() {
        let region = shape_overview(Overview {
            total_reviews: 12,
            average_sentiment: 0.666_666,
            highlights: vec![],
        });
        assert_eq!(region.average_sentiment, 0.67);
        assert_eq!(region.total_reviews, 12);
    }

    #[test]
    fn shape_caps_highlights_at_five() {
        let raw = Overview {
            total_reviews: 0,
            average_sentiment: 0.0,
            highlights: (0..8).map(|i| format!("h{i}")).collect(),
        };
        let region = shape_overview(raw);
        assert_eq!(region.highlights.len(), 5);
        assert_eq!(region.highlights[0], "h0");
        assert_eq!(region.highlights[4], "h4");
    }

    #[test]
    fn empty_highlights_flag() {
        let region = shape_overview(Overview::default());
        assert!(region.is_empty_highlights());
    }

    #[test]
    fn deserialize_ignores_metrics_map() {
        let json = r#"{
            "total_reviews": 3,
            "average_sentiment": 0.5,
            "metrics": {"total_reviews": "Total reviews"},
            "highlights": ["fast onboarding"]
        }"#;
        let raw: Overview = serde_json::from_str(json).unwrap();
        assert_eq!(raw.total_reviews, 3);
        assert_eq!(raw.highlights, vec!["fast onboarding"]);
    }

    #[test]
    fn deserialize_tolerates_missing_fields() {
        let raw: Overview = serde_json::from_str("{}").unwrap();
        assert_eq!(raw.total_reviews, 0);
        assert!(raw.highlights.is_empty());
    }
}
