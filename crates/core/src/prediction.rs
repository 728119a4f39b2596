//! Prediction results and the scoring request lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Chart label for the single probability gauge bar.
pub const GAUGE_LABEL: &str = "Churn Probability";

// ---------------------------------------------------------------------------
// PredictionResult
// ---------------------------------------------------------------------------

/// Snapshot returned by a successful scoring call.
///
/// The backend serializes the binary label as a float; `1` means churn.
/// `customer_id` and `timestamp` are echoed by the backend but optional
/// here so older payload shapes still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Churn probability in `[0, 1]`.
    pub probability: f64,
    pub prediction: f64,
    pub model_version: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl PredictionResult {
    /// Whether the binary label says the customer will churn.
    pub fn will_churn(&self) -> bool {
        self.prediction == 1.0
    }
}

/// Probability rendered as a two-decimal percentage, e.g. `"83.70%"`.
pub fn format_probability(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// Verdict text shown next to the probability.
pub fn churn_label(result: &PredictionResult) -> &'static str {
    if result.will_churn() {
        "Will Churn"
    } else {
        "Will Not Churn"
    }
}

/// One bar of the probability gauge chart.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugePoint {
    pub name: &'static str,
    /// Probability scaled to `[0, 100]`.
    pub value: f64,
}

/// Shape a result into the single gauge bar.
pub fn probability_gauge(result: &PredictionResult) -> GaugePoint {
    GaugePoint {
        name: GAUGE_LABEL,
        value: result.probability * 100.0,
    }
}

// ---------------------------------------------------------------------------
// Request lifecycle
// ---------------------------------------------------------------------------

/// Lifecycle of the scoring request workflow.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestPhase {
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

/// Scoring workflow state: the current phase plus the last stored result.
///
/// The result slot deliberately survives a failed re-submission, so a stale
/// success panel can render alongside the fresh error alert.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionState {
    phase: RequestPhase,
    result: Option<PredictionResult>,
}

impl Default for PredictionState {
    fn default() -> Self {
        Self {
            phase: RequestPhase::Idle,
            result: None,
        }
    }
}

impl PredictionState {
    /// Start a new scoring request.
    ///
    /// Returns `false` while a request is already in flight; the caller
    /// must not issue a network call in that case.  Starting clears a
    /// previous error but keeps the previous result visible.
    pub fn begin(&mut self) -> bool {
        if self.phase == RequestPhase::Pending {
            return false;
        }
        self.phase = RequestPhase::Pending;
        true
    }

    /// Settle the in-flight request with a fresh result.
    pub fn settle_ok(&mut self, result: PredictionResult) {
        self.phase = RequestPhase::Succeeded;
        self.result = Some(result);
    }

    /// Settle the in-flight request with a failure message.  The stored
    /// result is left untouched.
    pub fn settle_err(&mut self, message: String) {
        self.phase = RequestPhase::Failed(message);
    }

    pub fn phase(&self) -> &RequestPhase {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == RequestPhase::Pending
    }

    /// Message of the most recent failure, if the workflow is in it.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            RequestPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
