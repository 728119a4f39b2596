//! Typed HTTP client for the churn-prediction backend.
//!
//! Wraps the backend's `/api/v1` endpoints (model registry, metrics
//! snapshot, scoring) using [`reqwest`].

pub mod api;

pub use api::{BatchPredictionResponse, ChurnApi, ChurnApiError, HealthResponse};
