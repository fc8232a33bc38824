//! API request handlers.

use crate::error::ApiError;
use crate::models::{
    ApiInfoResponse, EndpointMap, HealthResponse, OptionContract, OptionQuery, OptionRequest,
    ReadinessResponse,
};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::warn;

// ============================================================================
// Info & Health
// ============================================================================

/// API information endpoint.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API descriptor", body = ApiInfoResponse)
    ),
    tag = "Health"
)]
pub async fn api_info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        name: "Options Tool API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
        endpoints: EndpointMap {
            options: "/api/options".to_string(),
            health: "/api/health".to_string(),
        },
        documentation: "See /api/options for available endpoints".to_string(),
    })
}

/// Liveness probe. Does not check storage.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
    })
}

/// Readiness probe. Verifies the storage backend answers.
#[utoipa::path(
    get,
    path = "/api/health/ready",
    responses(
        (status = 200, description = "Storage reachable", body = ReadinessResponse),
        (status = 503, description = "Storage unreachable", body = ReadinessResponse)
    ),
    tag = "Health"
)]
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ReadinessResponse>) {
    match state.options.check_storage().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "UP".to_string(),
                storage: "UP".to_string(),
            }),
        ),
        Err(e) => {
            warn!("Storage check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "DOWN".to_string(),
                    storage: "DOWN".to_string(),
                }),
            )
        }
    }
}

// ============================================================================
// Option Contracts
// ============================================================================

/// List option contracts, optionally filtered by symbol and/or type.
#[utoipa::path(
    get,
    path = "/api/options",
    params(OptionQuery),
    responses(
        (status = 200, description = "Matching option contracts", body = [OptionContract])
    ),
    tag = "Options"
)]
pub async fn list_options(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OptionQuery>,
) -> Result<Json<Vec<OptionContract>>, ApiError> {
    let options = state
        .options
        .search(query.symbol.as_deref(), query.option_type.as_deref())
        .await?;
    Ok(Json(options))
}

/// Get an option contract by id.
#[utoipa::path(
    get,
    path = "/api/options/{id}",
    params(
        ("id" = i64, Path, description = "Option id")
    ),
    responses(
        (status = 200, description = "Option contract", body = OptionContract),
        (status = 404, description = "Option not found")
    ),
    tag = "Options"
)]
pub async fn get_option(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<OptionContract>, ApiError> {
    state
        .options
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("option {}", id)))
}

/// List option contracts for a symbol.
#[utoipa::path(
    get,
    path = "/api/options/symbol/{symbol}",
    params(
        ("symbol" = String, Path, description = "Underlying symbol, exact match")
    ),
    responses(
        (status = 200, description = "Option contracts for the symbol, possibly empty", body = [OptionContract])
    ),
    tag = "Options"
)]
pub async fn list_options_by_symbol(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<Vec<OptionContract>>, ApiError> {
    let options = state.options.list_by_symbol(&symbol).await?;
    Ok(Json(options))
}

/// List option contracts of a type.
#[utoipa::path(
    get,
    path = "/api/options/type/{type}",
    params(
        ("type" = String, Path, description = "Option type, exact match (e.g., CALL)")
    ),
    responses(
        (status = 200, description = "Option contracts of the type, possibly empty", body = [OptionContract])
    ),
    tag = "Options"
)]
pub async fn list_options_by_type(
    State(state): State<Arc<AppState>>,
    Path(option_type): Path<String>,
) -> Result<Json<Vec<OptionContract>>, ApiError> {
    let options = state.options.list_by_type(&option_type).await?;
    Ok(Json(options))
}

/// Create an option contract.
#[utoipa::path(
    post,
    path = "/api/options",
    request_body = OptionRequest,
    responses(
        (status = 201, description = "Option created", body = OptionContract)
    ),
    tag = "Options"
)]
pub async fn create_option(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OptionRequest>,
) -> Result<(StatusCode, Json<OptionContract>), ApiError> {
    let created = state.options.create(&request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace every mutable field of an option contract.
#[utoipa::path(
    put,
    path = "/api/options/{id}",
    params(
        ("id" = i64, Path, description = "Option id")
    ),
    request_body = OptionRequest,
    responses(
        (status = 200, description = "Option updated", body = OptionContract),
        (status = 404, description = "Option not found")
    ),
    tag = "Options"
)]
pub async fn update_option(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(request): Json<OptionRequest>,
) -> Result<Json<OptionContract>, ApiError> {
    state
        .options
        .update(id, &request)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("option {}", id)))
}

/// Delete an option contract.
#[utoipa::path(
    delete,
    path = "/api/options/{id}",
    params(
        ("id" = i64, Path, description = "Option id")
    ),
    responses(
        (status = 204, description = "Option deleted"),
        (status = 404, description = "Option not found")
    ),
    tag = "Options"
)]
pub async fn delete_option(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.options.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("option {}", id)))
    }
}
