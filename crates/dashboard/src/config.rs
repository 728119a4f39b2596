//! Dashboard configuration loaded from environment variables.

/// Configuration resolved once at startup.
///
/// All fields have defaults suitable for a local backend. Override via
/// environment variables.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Backend base URL (default: `http://localhost:8000`).
    pub api_base_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl DashboardConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `API_BASE_URL`         | `http://localhost:8000` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        let api_base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".into());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            api_base_url,
            request_timeout_secs,
        }
    }
}
