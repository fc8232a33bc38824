//! Request and response types for the options API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};


// ============================================================================
// Info & Health
// ============================================================================

/// Entry points advertised by the info endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointMap {
    /// Option contracts collection.
    pub options: String,
    /// Liveness probe.
    pub health: String,
}

/// API descriptor returned from `/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfoResponse {
    /// API name.
    pub name: String,
    /// API version.
    pub version: String,
    /// Service status.
    pub status: String,
    /// Main endpoints.
    pub endpoints: EndpointMap,
    /// Pointer to the documentation.
    pub documentation: String,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
}

/// Readiness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Service status.
    pub status: String,
    /// Storage status.
    pub storage: String,
}

// ============================================================================
// Option Contracts
// ============================================================================

/// A stored option contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionContract {
    /// Server-assigned id.
    pub id: i64,
    /// Underlying symbol.
    pub symbol: String,
    /// Contract type ("CALL" or "PUT" by convention).
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
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last write timestamp.
    pub updated_at: NaiveDateTime,
}

/// Body of create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionRequest {
    /// Underlying symbol.
    pub symbol: String,
    /// Contract type.
    pub option_type: String,
    /// Strike price.
    pub strike_price: f64,
    /// Current price of the underlying.
    pub current_price: f64,
    /// Expiration timestamp.
    pub expiration_date: NaiveDateTime,
    /// Option premium.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium: Option<f64>,
    /// Delta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    /// Gamma.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
    /// Theta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theta: Option<f64>,
    /// Vega.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vega: Option<f64>,
}

impl OptionRequest {
    /// Creates a request with the required fields and no premium or greeks.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        option_type: impl Into<String>,
        strike_price: f64,
        current_price: f64,
        expiration_date: NaiveDateTime,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            option_type: option_type.into(),
            strike_price,
            current_price,
            expiration_date,
            premium: None,
            delta: None,
            gamma: None,
            theta: None,
            vega: None,
        }
    }

    /// Sets the premium.
    #[must_use]
    pub fn with_premium(mut self, premium: f64) -> Self {
        self.premium = Some(premium);
        self
    }

    /// Sets all four greeks.
    #[must_use]
    pub fn with_greeks(mut self, delta: f64, gamma: f64, theta: f64, vega: f64) -> Self {
        self.delta = Some(delta);
        self.gamma = Some(gamma);
        self.theta = Some(theta);
        self.vega = Some(vega);
        self
    }
}

/// Query filters for listing option contracts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionQuery {
    /// Exact symbol match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Exact option type match.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub option_type: Option<String>,
}
