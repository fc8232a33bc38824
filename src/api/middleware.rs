//! API middleware for cross-origin requests.
//!
//! Every endpoint is open: there is no authentication layer, only CORS.

use crate::config::{ConfigError, CorsConfig};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Methods browsers may use against the API.
pub const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
    Method::PATCH,
];

/// Builds the CORS layer for the configured origins.
///
/// Credentials are allowed, so request headers are mirrored instead of
/// answered with a wildcard.
///
/// # Errors
/// Returns error if an origin is not a valid header value.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, ConfigError> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| ConfigError::InvalidValue(format!("invalid CORS origin: {origin}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
