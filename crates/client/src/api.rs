//! REST API client for the churn-prediction backend.
//!
//! Wraps the backend HTTP API (model registry, metrics snapshot, single
//! and batch scoring, health) using [`reqwest`].  Any non-2xx status is
//! treated as a failure regardless of code; a human-readable message is
//! extracted from the error body's optional `detail` field.

use churnboard_core::customer::CustomerRecord;
use churnboard_core::metrics::MetricsSnapshot;
use churnboard_core::prediction::PredictionResult;
use churnboard_core::registry::ModelRecord;
use serde::Deserialize;

/// Fallback message when a failure carries no usable `detail`.
pub const PREDICTION_FAILED: &str = "Prediction failed";

/// HTTP client for a single backend instance.
pub struct ChurnApi {
    client: reqwest::Client,
    base_url: String,
}

/// Response returned by the batch scoring endpoint.
#[derive(Debug, Deserialize)]
pub struct BatchPredictionResponse {
    pub predictions: Vec<PredictionResult>,
    pub total: i64,
    pub model_version: String,
}

/// Response returned by the health endpoint.
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub mlflow: String,
    pub model_loaded: bool,
}

/// Shape of backend error bodies; `detail` is optional.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Errors from the backend REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ChurnApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("Backend error ({status})")]
    Api {
        /// HTTP status code.
        status: u16,
        /// `detail` field of the error body, when one was present.
        detail: Option<String>,
    },
}

impl ChurnApiError {
    /// Message suitable for the dashboard's error alert.
    ///
    /// Uses the backend's `detail` text when available and falls back to
    /// the generic [`PREDICTION_FAILED`] otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => PREDICTION_FAILED.to_string(),
        }
    }
}

impl ChurnApi {
    /// Create a new API client for a backend instance.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:8000`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for applying a request timeout once at startup).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Base HTTP URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the model registry.
    ///
    /// Sends a `GET /api/v1/models` request.  The returned sequence keeps
    /// the server's ordering.
    pub async fn list_models(&self) -> Result<Vec<ModelRecord>, ChurnApiError> {
        let response = self
            .client
            .get(format!("{}/api/v1/models", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch a single registry entry by version.
    ///
    /// Sends a `GET /api/v1/models/{version}` request.
    pub async fn get_model(&self, version: &str) -> Result<ModelRecord, ChurnApiError> {
        let response = self
            .client
            .get(format!("{}/api/v1/models/{}", self.base_url, version))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the latest metrics snapshot.
    ///
    /// Sends a `GET /api/v1/metrics` request.
    pub async fn get_metrics(&self) -> Result<MetricsSnapshot, ChurnApiError> {
        let response = self
            .client
            .get(format!("{}/api/v1/metrics", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Score a single customer record.
    ///
    /// Sends a `POST /api/v1/predict` request with the whole draft record.
    pub async fn predict(
        &self,
        customer: &CustomerRecord,
    ) -> Result<PredictionResult, ChurnApiError> {
        let body = serde_json::json!({
            "customer": customer,
        });

        let response = self
            .client
            .post(format!("{}/api/v1/predict", self.base_url))
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Score a batch of customer records.
    ///
    /// Sends a `POST /api/v1/predict/batch` request.
    pub async fn predict_batch(
        &self,
        customers: &[CustomerRecord],
    ) -> Result<BatchPredictionResponse, ChurnApiError> {
        let body = serde_json::json!({
            "customers": customers,
        });

        let response = self
            .client
            .post(format!("{}/api/v1/predict/batch", self.base_url))
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Check backend health.
    ///
    /// Sends a `GET /api/v1/health` request.
    pub async fn health(&self) -> Result<HealthResponse, ChurnApiError> {
        let response = self
            .client
            .get(format!("{}/api/v1/health", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code.  Returns the
    /// response unchanged on success, or a [`ChurnApiError::Api`] carrying
    /// the status and any `detail` text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ChurnApiError> {
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .ok()
                .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
                .and_then(|body| body.detail);
            return Err(ChurnApiError::Api {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ChurnApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
