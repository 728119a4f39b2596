//! The dashboard session: owned state bundle plus its orchestration.
//!
//! A [`DashboardSession`] couples the state with the backend API client.
//! All mutation goes through the session (or through the draft record's
//! own setters); render code only ever borrows [`DashboardState`].

use churnboard_client::{ChurnApi, ChurnApiError};
use churnboard_core::customer::CustomerRecord;
use churnboard_core::metrics::MetricsSnapshot;
use churnboard_core::prediction::PredictionState;
use churnboard_core::registry::ModelRecord;
use churnboard_core::view::DashboardView;

/// Everything the dashboard renders from.
///
/// Lifecycle is tied to the session: initialized once at mount, mutated
/// only by the session's operations, never replaced wholesale.
#[derive(Debug, Default)]
pub struct DashboardState {
    view: DashboardView,
    draft: CustomerRecord,
    models: Vec<ModelRecord>,
    metrics: Option<MetricsSnapshot>,
    prediction: PredictionState,
}

impl DashboardState {
    pub fn view(&self) -> DashboardView {
        self.view
    }

    pub fn draft(&self) -> &CustomerRecord {
        &self.draft
    }

    pub fn models(&self) -> &[ModelRecord] {
        &self.models
    }

    pub fn metrics(&self) -> Option<&MetricsSnapshot> {
        self.metrics.as_ref()
    }

    pub fn prediction(&self) -> &PredictionState {
        &self.prediction
    }
}

/// A live dashboard session against one backend.
pub struct DashboardSession {
    api: ChurnApi,
    state: DashboardState,
}

impl DashboardSession {
    /// Create a session with the default draft record and empty data.
    pub fn new(api: ChurnApi) -> Self {
        Self {
            api,
            state: DashboardState::default(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Mutable access to the draft record for form edits.
    pub fn draft_mut(&mut self) -> &mut CustomerRecord {
        &mut self.state.draft
    }

    /// Switch the active panel. Unconditional and idempotent.
    pub fn select_view(&mut self, view: DashboardView) {
        self.state.view = view;
    }

    /// Run the startup loads.
    ///
    /// The registry and metrics fetches are independent and run
    /// concurrently; either may settle first, and each updates only its
    /// own slot.  Neither is retried.
    pub async fn mount(&mut self) {
        let (models, metrics) = tokio::join!(self.api.list_models(), self.api.get_metrics());
        self.apply_models(models);
        self.apply_metrics(metrics);
    }

    /// Reload the model registry once.
    pub async fn load_models(&mut self) {
        let result = self.api.list_models().await;
        self.apply_models(result);
    }

    /// Reload the metrics snapshot once.
    pub async fn load_metrics(&mut self) {
        let result = self.api.get_metrics().await;
        self.apply_metrics(result);
    }

    /// Submit the current draft for scoring.
    ///
    /// No-op while a request is already in flight.  Returns `true` when a
    /// network call was issued; exactly one state transition is applied at
    /// settlement.
    pub async fn submit(&mut self) -> bool {
        if !self.state.prediction.begin() {
            return false;
        }

        match self.api.predict(&self.state.draft).await {
            Ok(result) => {
                tracing::debug!(model_version = %result.model_version, "Prediction settled");
                self.state.prediction.settle_ok(result);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Prediction request failed");
                self.state.prediction.settle_err(e.user_message());
            }
        }
        true
    }

    // ---- private helpers ----

    /// Apply a registry load settlement.  Failures degrade silently: the
    /// prior collection stays and only a log line records the error.
    fn apply_models(&mut self, result: Result<Vec<ModelRecord>, ChurnApiError>) {
        match result {
            Ok(models) => {
                tracing::debug!(count = models.len(), "Model registry loaded");
                self.state.models = models;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load model registry");
            }
        }
    }

    /// Apply a metrics load settlement, same degrade policy.
    fn apply_metrics(&mut self, result: Result<MetricsSnapshot, ChurnApiError>) {
        match result {
            Ok(snapshot) => {
                tracing::debug!(count = snapshot.metrics.len(), "Metrics snapshot loaded");
                self.state.metrics = Some(snapshot);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load metrics snapshot");
            }
        }
    }
}
