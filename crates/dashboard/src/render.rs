//! Chart-ready view data derived from the dashboard state.
//!
//! Pure functions over a borrowed [`DashboardState`]; the rendering layer
//! turns these into widgets and charts without further computation.

use churnboard_core::metrics::{metric_chart_rows, MetricRow};
use churnboard_core::prediction::{
    churn_label, format_probability, probability_gauge, GaugePoint,
};
use churnboard_core::registry::{model_table_rows, ModelRow};

use crate::session::DashboardState;

/// The prediction panel's result card.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionPanel {
    /// e.g. `"83.70%"`.
    pub probability_display: String,
    /// `Will Churn` or `Will Not Churn`.
    pub verdict: &'static str,
    pub model_version: String,
    pub gauge: GaugePoint,
}

/// Prediction view: form status, error alert, and the result card.
///
/// `error` and `panel` can both be present at once -- a failed
/// re-submission keeps the stale result card visible under the fresh
/// error alert.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionViewData {
    /// Whether the submit control is disabled (a request is in flight).
    pub submitting: bool,
    pub error: Option<String>,
    pub panel: Option<PredictionPanel>,
}

/// Models view: one row per registry entry, server order.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelsViewData {
    pub rows: Vec<ModelRow>,
}

/// Metrics view: one bar per metric, snapshot order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsViewData {
    pub rows: Vec<MetricRow>,
}

/// Derive the prediction view.
pub fn prediction_view(state: &DashboardState) -> PredictionViewData {
    let prediction = state.prediction();

    let panel = prediction.result().map(|result| PredictionPanel {
        probability_display: format_probability(result.probability),
        verdict: churn_label(result),
        model_version: result.model_version.clone(),
        gauge: probability_gauge(result),
    });

    PredictionViewData {
        submitting: prediction.is_pending(),
        error: prediction.error().map(str::to_string),
        panel,
    }
}

/// Derive the models view.
pub fn models_view(state: &DashboardState) -> ModelsViewData {
    ModelsViewData {
        rows: model_table_rows(state.models()),
    }
}

/// Derive the metrics view.  Empty when no snapshot has loaded.
pub fn metrics_view(state: &DashboardState) -> MetricsViewData {
    MetricsViewData {
        rows: state
            .metrics()
            .map(metric_chart_rows)
            .unwrap_or_default(),
    }
}
