//! Dashboard view selection.

use serde::{Deserialize, Serialize};

/// The three mutually exclusive dashboard panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardView {
    Prediction,
    Models,
    Metrics,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::Prediction
    }
}
