//! Performance metrics snapshot and its chart-row transform.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Point-in-time set of named performance scores.
///
/// `metrics` preserves the server's iteration order; the chart renders rows
/// in exactly that order.  The envelope fields are informational and may be
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub metrics: IndexMap<String, f64>,
    #[serde(default)]
    pub model_version: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// One bar of the metrics chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub name: String,
    /// Score scaled to a percentage and rendered with two decimals,
    /// e.g. `"87.50"`.
    pub display_value: String,
}

/// Shape a snapshot into chart rows, order preserved.
pub fn metric_chart_rows(snapshot: &MetricsSnapshot) -> Vec<MetricRow> {
    snapshot
        .metrics
        .iter()
        .map(|(name, score)| MetricRow {
            name: name.clone(),
            display_value: format!("{:.2}", score * 100.0),
        })
        .collect()
}
