//! Request and response models for the REST API.

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Returns the current UTC time at the precision the `options` table stores.
///
/// PostgreSQL `TIMESTAMP` keeps microseconds, so anything finer would make a
/// freshly written record differ from the same record read back.
#[must_use]
pub fn now_timestamp() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(6)
}

/// Reads a zone-less timestamp, also accepting an RFC 3339 offset such as
/// the `Z` that JavaScript's `toISOString()` appends. Offsets are converted
/// to UTC before the zone is dropped.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse::<NaiveDateTime>()
        .or_else(|_| DateTime::parse_from_rfc3339(&raw).map(|dt| dt.naive_utc()))
        .map_err(serde::de::Error::custom)
}

// ============================================================================
// Option Contracts
// ============================================================================

/// A stored option contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionContract {
    /// Surrogate key assigned by the store.
    pub id: i64,
    /// Underlying symbol (e.g., "AAPL").
    pub symbol: String,
    /// Contract type, conventionally "CALL" or "PUT". Stored as given.
    pub option_type: String,
    /// Strike price.
    pub strike_price: f64,
    /// Current price of the underlying.
    pub current_price: f64,
    /// Expiration timestamp.
    pub expiration_date: NaiveDateTime,
    /// Option premium.
    pub premium: Option<f64>,
    /// Delta.
    pub delta: Option<f64>,
    /// Gamma.
    pub gamma: Option<f64>,
    /// Theta.
    pub theta: Option<f64>,
    /// Vega.
    pub vega: Option<f64>,
    /// Set once when the record is created.
    pub created_at: NaiveDateTime,
    /// Refreshed on every write.
    pub updated_at: NaiveDateTime,
}

impl OptionContract {
    /// Builds a new record from a request, stamping both timestamps with `now`.
    #[must_use]
    pub fn from_request(id: i64, request: &OptionRequest, now: NaiveDateTime) -> Self {
        Self {
            id,
            symbol: request.symbol.clone(),
            option_type: request.option_type.clone(),
            strike_price: request.strike_price,
            current_price: request.current_price,
            expiration_date: request.expiration_date,
            premium: request.premium,
            delta: request.delta,
            gamma: request.gamma,
            theta: request.theta,
            vega: request.vega,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites every mutable field from `request`.
    ///
    /// Greeks and premium missing from the request are cleared, not kept.
    /// `id` and `created_at` never change, and `updated_at` never goes below
    /// `created_at` even if the clock stepped back.
    pub fn overwrite(&mut self, request: &OptionRequest, now: NaiveDateTime) {
        self.symbol = request.symbol.clone();
        self.option_type = request.option_type.clone();
        self.strike_price = request.strike_price;
        self.current_price = request.current_price;
        self.expiration_date = request.expiration_date;
        self.premium = request.premium;
        self.delta = request.delta;
        self.gamma = request.gamma;
        self.theta = request.theta;
        self.vega = request.vega;
        self.updated_at = now.max(self.created_at);
    }
}

/// Body of create and update requests.
///
/// Identity and timestamps are assigned by the store; if a client sends
/// `id`, `createdAt` or `updatedAt` they are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionRequest {
    /// Underlying symbol.
    pub symbol: String,
    /// Contract type. Not validated.
    pub option_type: String,
    /// Strike price.
    pub strike_price: f64,
    /// Current price of the underlying.
    pub current_price: f64,
    /// Expiration timestamp, e.g. "2025-12-19T00:00:00". A UTC suffix is
    /// accepted and dropped.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub expiration_date: NaiveDateTime,
    /// Option premium.
    pub premium: Option<f64>,
    /// Delta.
    pub delta: Option<f64>,
    /// Gamma.
    pub gamma: Option<f64>,
    /// Theta.
    pub theta: Option<f64>,
    /// Vega.
    pub vega: Option<f64>,
}

/// Optional filters for listing option contracts.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OptionQuery {
    /// Exact symbol match.
    pub symbol: Option<String>,
    /// Exact option type match.
    #[serde(rename = "type")]
    pub option_type: Option<String>,
}

// ============================================================================
// Health & Info
// ============================================================================

/// Entry points advertised by the info endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EndpointMap {
    /// Option contracts collection.
    pub options: String,
    /// Liveness probe.
    pub health: String,
}

/// Static API descriptor returned from `/`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiInfoResponse {
    /// API name.
    pub name: String,
    /// API version.
    pub version: String,
    /// Always "running".
    pub status: String,
    /// Main endpoints.
    pub endpoints: EndpointMap,
    /// Pointer to the documentation.
    pub documentation: String,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "UP".
    pub status: String,
}

/// Readiness response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    /// "UP" when the service can serve requests.
    pub status: String,
    /// Storage reachability, "UP" or "DOWN".
    pub storage: String,
}
