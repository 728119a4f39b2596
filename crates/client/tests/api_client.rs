//! Integration tests for the backend API client.
//!
//! Each test boots a stub backend (an `axum` router on an ephemeral port)
//! and points a real client at it, so the full request/response path is
//! exercised including error-body handling.

use assert_matches::assert_matches;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use churnboard_client::{ChurnApi, ChurnApiError};
use churnboard_core::customer::CustomerRecord;
use serde_json::json;

/// Serve a router on an ephemeral local port, returning its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Metrics payload as raw JSON so the key order on the wire is fixed.
const METRICS_BODY: &str =
    r#"{"model_version":"v3","metrics":{"roc_auc":0.91,"accuracy":0.86,"f1":0.79},"timestamp":"2024-01-15T10:30:00Z"}"#;

fn model_json(version: &str, status: &str, traffic: i64) -> serde_json::Value {
    json!({
        "version": version,
        "model_type": "xgboost",
        "status": status,
        "traffic_percent": traffic,
        "created_at": "2024-01-15T10:30:00Z",
    })
}

// ---------------------------------------------------------------------------
// Model registry
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_models_preserves_server_order() {
    let app = Router::new().route(
        "/api/v1/models",
        get(|| async { Json(json!([model_json("v3", "production", 90), model_json("v4", "canary", 10)])) }),
    );
    let api = ChurnApi::new(serve(app).await);

    let models = api.list_models().await.unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0].version, "v3");
    assert_eq!(models[0].traffic_percent, 90);
    assert_eq!(models[1].version, "v4");
    assert_eq!(models[1].status, "canary");
}

#[tokio::test]
async fn get_model_hits_versioned_path() {
    let app = Router::new().route(
        "/api/v1/models/{version}",
        get(|Path(version): Path<String>| async move {
            Json(model_json(&version, "production", 100))
        }),
    );
    let api = ChurnApi::new(serve(app).await);

    let model = api.get_model("v1").await.unwrap();
    assert_eq!(model.version, "v1");
}

#[tokio::test]
async fn get_model_not_found_maps_to_api_error() {
    let app = Router::new().route(
        "/api/v1/models/{version}",
        get(|| async {
            (StatusCode::NOT_FOUND, Json(json!({"detail": "Model not found"})))
        }),
    );
    let api = ChurnApi::new(serve(app).await);

    let err = api.get_model("v9").await.unwrap_err();
    assert_matches!(
        err,
        ChurnApiError::Api {
            status: 404,
            detail: Some(ref d),
        } if d.as_str() == "Model not found"
    );
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_metrics_preserves_key_order() {
    let app = Router::new().route(
        "/api/v1/metrics",
        get(|| async { ([(header::CONTENT_TYPE, "application/json")], METRICS_BODY) }),
    );
    let api = ChurnApi::new(serve(app).await);

    let snapshot = api.get_metrics().await.unwrap();
    let names: Vec<&String> = snapshot.metrics.keys().collect();
    assert_eq!(names, ["roc_auc", "accuracy", "f1"]);
    assert_eq!(snapshot.metrics["accuracy"], 0.86);
    assert_eq!(snapshot.model_version.as_deref(), Some("v3"));
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

#[tokio::test]
async fn predict_wraps_record_in_customer_envelope() {
    let app = Router::new().route(
        "/api/v1/predict",
        post(|Json(body): Json<serde_json::Value>| async move {
            // Echo the submitted customer_id back so the test can confirm
            // the envelope shape.
            let customer_id = body["customer"]["customer_id"].clone();
            Json(json!({
                "customer_id": customer_id,
                "probability": 0.837,
                "prediction": 1.0,
                "model_version": "v3",
                "timestamp": "2024-01-15T10:30:00Z",
            }))
        }),
    );
    let api = ChurnApi::new(serve(app).await);

    let result = api.predict(&CustomerRecord::default()).await.unwrap();
    assert_eq!(result.customer_id.as_deref(), Some("CUST_00001"));
    assert_eq!(result.probability, 0.837);
    assert!(result.will_churn());
    assert_eq!(result.model_version, "v3");
}

#[tokio::test]
async fn predict_failure_extracts_detail() {
    let app = Router::new().route(
        "/api/v1/predict",
        post(|| async {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"detail": "invalid input"})))
        }),
    );
    let api = ChurnApi::new(serve(app).await);

    let err = api.predict(&CustomerRecord::default()).await.unwrap_err();
    assert_eq!(err.user_message(), "invalid input");
}

#[tokio::test]
async fn predict_failure_without_detail_uses_generic_message() {
    let app = Router::new().route(
        "/api/v1/predict",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR.into_response() }),
    );
    let api = ChurnApi::new(serve(app).await);

    let err = api.predict(&CustomerRecord::default()).await.unwrap_err();
    assert_matches!(err, ChurnApiError::Api { status: 500, detail: None });
    assert_eq!(err.user_message(), "Prediction failed");
}

#[tokio::test]
async fn predict_transport_error_uses_generic_message() {
    // Nothing listens here; the connect fails before any HTTP exchange.
    let api = ChurnApi::new("http://127.0.0.1:1".to_string());

    let err = api.predict(&CustomerRecord::default()).await.unwrap_err();
    assert_matches!(err, ChurnApiError::Request(_));
    assert_eq!(err.user_message(), "Prediction failed");
}

#[tokio::test]
async fn predict_batch_deserializes_envelope() {
    let app = Router::new().route(
        "/api/v1/predict/batch",
        post(|Json(body): Json<serde_json::Value>| async move {
            let total = body["customers"].as_array().map(|c| c.len()).unwrap_or(0);
            Json(json!({
                "predictions": [
                    {"probability": 0.837, "prediction": 1.0, "model_version": "v3"},
                    {"probability": 0.12, "prediction": 0.0, "model_version": "v3"},
                ],
                "total": total,
                "model_version": "v3",
            }))
        }),
    );
    let api = ChurnApi::new(serve(app).await);

    let customers = vec![CustomerRecord::default(), CustomerRecord::default()];
    let batch = api.predict_batch(&customers).await.unwrap();
    assert_eq!(batch.total, 2);
    assert_eq!(batch.predictions.len(), 2);
    assert!(batch.predictions[0].will_churn());
    assert!(!batch.predictions[1].will_churn());
    assert_eq!(batch.model_version, "v3");
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_deserializes_component_statuses() {
    let app = Router::new().route(
        "/api/v1/health",
        get(|| async {
            Json(json!({
                "status": "healthy",
                "database": "healthy",
                "mlflow": "unhealthy",
                "model_loaded": true,
            }))
        }),
    );
    let api = ChurnApi::new(serve(app).await);

    let health = api.health().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.database, "healthy");
    assert_eq!(health.mlflow, "unhealthy");
    assert!(health.model_loaded);
}
