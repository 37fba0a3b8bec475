//! API request and response types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to validate a token.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateTokenRequest {
    /// The token to validate.
    #[serde(default)]
    pub token: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Whether the configured account has usable credentials.
    pub credentials: String,
    pub timestamp: String,
}
