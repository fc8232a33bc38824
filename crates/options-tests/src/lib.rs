//! Integration tests for the Options Tool API.
//!
//! These tests require the API server to be running. Configure the server URL
//! via the `API_BASE_URL` environment variable (default: `http://localhost:8080`).

use chrono::{Duration, NaiveDateTime, Utc};
use options_client::{ClientConfig, OptionRequest, OptionsClient};

/// Gets the API base URL from environment or uses default.
#[must_use]
pub fn get_api_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Creates a test client configured for the API.
///
/// # Errors
/// Returns error if client creation fails.
pub fn create_test_client() -> Result<OptionsClient, options_client::Error> {
    OptionsClient::new(ClientConfig {
        base_url: get_api_url(),
        timeout: std::time::Duration::from_secs(10),
    })
}

/// Generates a unique test symbol to avoid conflicts between tests.
#[must_use]
pub fn unique_symbol(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);

    format!("{}_{}_{}", prefix, ts, counter)
}

/// Midnight, 90 days from now.
#[must_use]
pub fn future_expiration() -> NaiveDateTime {
    (Utc::now() + Duration::days(90))
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
}

/// Builds a request with only the required fields set.
#[must_use]
pub fn sample_request(symbol: &str, option_type: &str) -> OptionRequest {
    OptionRequest::new(symbol, option_type, 150.0, 155.0, future_expiration())
}
