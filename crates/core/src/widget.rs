//! Widget payloads from the widget-list and timeseries endpoints.

use serde::Deserialize;

/// How a widget renders its metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visualization {
    Metric,
    Line,
    Bar,
    /// Forward-compatibility: an unrecognized kind is kept but treated
    /// as chart-less.
    #[serde(other)]
    Unknown,
}

impl Default for Visualization {
    fn default() -> Self {
        Visualization::Metric
    }
}

impl Visualization {
    /// True for kinds that carry a chart and need a timeseries read.
    pub fn has_chart(self) -> bool {
        matches!(self, Visualization::Line | Visualization::Bar)
    }
}

/// One entry of the `GET /dashboard/widgets/` list.
#[derive(Debug, Clone, Deserialize)]
pub struct Widget {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub metric: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub visualization: Visualization,
}

/// One `{date, value}` pair of a widget timeseries.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SeriesPoint {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub value: f64,
}

/// Payload of `GET /widgets/{id}/timeseries`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Timeseries {
    #[serde(default)]
    pub metric: String,
    #[serde(default)]
    pub data: Vec<SeriesPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_metric_widget() {
        let json = r#"{"id": 4, "title": "Total", "metric": "total_reviews",
                       "value": 128.0, "visualization": "metric"}"#;
        let widget: Widget = serde_json::from_str(json).unwrap();
        assert_eq!(widget.id, 4);
        assert_eq!(widget.visualization, Visualization::Metric);
        assert!(!widget.visualization.has_chart());
        assert_eq!(widget.value, Some(128.0));
    }

    #[test]
    fn chart_kinds_need_series() {
        assert!(Visualization::Line.has_chart());
        assert!(Visualization::Bar.has_chart());
        assert!(!Visualization::Metric.has_chart());
        assert!(!Visualization::Unknown.has_chart());
    }

    #[test]
    fn unknown_visualization_is_tolerated() {
        let json = r#"{"id": 1, "metric": "positive_share", "visualization": "gauge"}"#;
        let widget: Widget = serde_json::from_str(json).unwrap();
        assert_eq!(widget.visualization, Visualization::Unknown);
    }

    #[test]
    fn null_value_is_absent() {
        let json = r#"{"id": 2, "metric": "average_sentiment", "value": null}"#;
        let widget: Widget = serde_json::from_str(json).unwrap();
        assert_eq!(widget.value, None);
    }

    #[test]
    fn timeseries_maps_date_value_pairs() {
        let json = r#"{"metric": "total_reviews", "visualization": "line",
                       "data": [{"date": "2024-01-01", "value": 3.0},
                                {"date": "2024-01-02", "value": 5.0}]}"#;
        let series: Timeseries = serde_json::from_str(json).unwrap();
        assert_eq!(series.data.len(), 2);
        assert_eq!(series.data[0].date, "2024-01-01");
        assert_eq!(series.data[1].value, 5.0);
    }
}
