//! `churnboard` -- headless front for the churn dashboard session.
//!
//! Resolves configuration, mounts a dashboard session against the backend,
//! and logs one pass of the derived view data.  The graphical shell renders
//! the same view data; this binary is the smoke front used to check a
//! deployment from a shell.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default                 | Description               |
//! |------------------------|----------|-------------------------|---------------------------|
//! | `API_BASE_URL`         | no       | `http://localhost:8000` | Backend base URL          |
//! | `REQUEST_TIMEOUT_SECS` | no       | `30`                    | HTTP request timeout      |

use std::time::Duration;

use churnboard_client::ChurnApi;
use churnboard_dashboard::render::{metrics_view, models_view};
use churnboard_dashboard::{DashboardConfig, DashboardSession};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "churnboard=info,churnboard_dashboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DashboardConfig::from_env();
    tracing::info!(
        api_base_url = %config.api_base_url,
        timeout_secs = config.request_timeout_secs,
        "Starting churnboard",
    );

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .expect("Failed to build HTTP client");

    let api = ChurnApi::with_client(client, config.api_base_url.clone());
    let mut session = DashboardSession::new(api);

    session.mount().await;

    let models = models_view(session.state());
    tracing::info!(count = models.rows.len(), "Model registry");
    for row in &models.rows {
        tracing::info!(
            version = %row.version,
            model_type = %row.model_type,
            status = %row.status,
            traffic = %row.traffic_display,
            created = %row.created_display,
            "model",
        );
    }

    let metrics = metrics_view(session.state());
    tracing::info!(count = metrics.rows.len(), "Performance metrics");
    for row in &metrics.rows {
        tracing::info!(name = %row.name, value = %row.display_value, "metric");
    }
}
