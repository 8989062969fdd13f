//! Mutable view state: the regions a refresh cycle writes into.
//!
//! Each region is written independently as its read resolves; a failed
//! read leaves the prior region untouched. Chart series are mutated in
//! place keyed by widget id rather than recreated, so a widget's chart
//! keeps its identity across refreshes.

use std::collections::HashMap;

use revboard_core::analytics::{shape_overview, Overview, OverviewRegion};
use revboard_core::format::metric_value;
use revboard_core::review::{prepare_recent, RawReview, ReviewRow};
use revboard_core::widget::{Timeseries, Visualization, Widget};

/// One widget card.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetCard {
    pub id: i64,
    pub title: String,
    /// Metric tag, stored for the later chart refresh.
    pub metric: String,
    pub visualization: Visualization,
    /// Rendered scalar for metric cards (em dash when absent).
    pub value_text: String,
}

/// Label/value arrays consumed by the charting layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// All dashboard view regions.
#[derive(Debug, Default)]
pub struct DashboardView {
    pub overview: OverviewRegion,
    pub cards: Vec<WidgetCard>,
    pub reviews: Vec<ReviewRow>,
    /// Authoritative total from the overview read; when present the
    /// table footer uses it instead of the local row count.
    pub review_total: Option<u64>,
    charts: HashMap<i64, ChartSeries>,
}

impl DashboardView {
    /// Apply the overview read: shapes the region and records the
    /// authoritative total for the table footer.
    pub fn apply_overview(&mut self, raw: Overview) {
        let region = shape_overview(raw);
        self.review_total = Some(region.total_reviews);
        self.overview = region;
    }

    /// Apply the widget-list read.
    ///
    /// Metric cards render their scalar immediately; chart-bearing cards
    /// keep their metric/visualization tags and are reported back so the
    /// cycle can fetch their series. Charts for removed widgets are
    /// pruned.
    pub fn apply_widgets(&mut self, widgets: Vec<Widget>) -> Vec<i64> {
        let mut chart_ids = Vec::new();
        self.cards = widgets
            .into_iter()
            .map(|w| {
                if w.visualization.has_chart() {
                    chart_ids.push(w.id);
                }
                WidgetCard {
                    id: w.id,
                    title: w.title,
                    metric: w.metric,
                    visualization: w.visualization,
                    value_text: metric_value(w.value),
                }
            })
            .collect();

        let live: std::collections::HashSet<i64> = chart_ids.iter().copied().collect();
        self.charts.retain(|id, _| live.contains(id));

        chart_ids
    }

    /// Apply the recent-reviews read: normalize, sort, cap.
    pub fn apply_reviews(&mut self, records: Vec<RawReview>, limit: usize) {
        self.reviews = prepare_recent(records, limit);
    }

    /// Apply one widget's timeseries read, mutating the existing series
    /// in place when the chart already exists.
    pub fn apply_series(&mut self, widget_id: i64, series: Timeseries) {
        let chart = self.charts.entry(widget_id).or_default();
        chart.labels.clear();
        chart.values.clear();
        for point in series.data {
            chart.labels.push(point.date);
            chart.values.push(point.value);
        }
    }

    /// The chart for a widget, if one has been rendered.
    pub fn chart(&self, widget_id: i64) -> Option<&ChartSeries> {
        self.charts.get(&widget_id)
    }

    /// Count shown in the recent-reviews footer.
    pub fn footer_total(&self) -> u64 {
        self.review_total.unwrap_or(self.reviews.len() as u64)
    }
}
