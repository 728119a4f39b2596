//! Model registry entries and their table-row shaping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One deployed model version as returned by the registry endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub version: String,
    pub model_type: String,
    /// Lifecycle status string, e.g. `production` or `canary`.
    pub status: String,
    /// Share of live traffic routed to this version, 0-100.
    pub traffic_percent: i64,
    pub created_at: DateTime<Utc>,
}

/// One row of the model versions table, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRow {
    pub version: String,
    pub model_type: String,
    pub status: String,
    pub traffic_display: String,
    pub created_display: String,
}

/// Format a registry timestamp for the table.
///
/// Fixed UTC rendering, e.g. `2024-01-15 10:30:00`.
pub fn format_created_at(created_at: &DateTime<Utc>) -> String {
    created_at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Shape registry entries into display rows, order preserved.
pub fn model_table_rows(models: &[ModelRecord]) -> Vec<ModelRow> {
    models
        .iter()
        .map(|m| ModelRow {
            version: m.version.clone(),
            model_type: m.model_type.clone(),
            status: m.status.clone(),
            traffic_display: format!("{}%", m.traffic_percent),
            created_display: format_created_at(&m.created_at),
        })
        .collect()
}
