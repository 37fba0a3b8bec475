//! HTTP request handlers.

use axum::{extract::State, Extension, Json};

use crate::api::types::*;
use crate::auth::{resolve, GuardState, ValidationResult};
use crate::error::GuardResult;

/// Validate a token with the configured account.
///
/// POST /v1/tokens/validate
#[utoipa::path(
    post,
    path = "/v1/tokens/validate",
    request_body = ValidateTokenRequest,
    responses(
        (status = 200, description = "Token is valid, body is the IAM validation result"),
        (status = 403, description = "Token missing, rejected or not checkable")
    ),
    tag = "tokens"
)]
pub async fn validate_token(
    State(state): State<GuardState>,
    Json(request): Json<ValidateTokenRequest>,
) -> GuardResult<Json<ValidationResult>> {
    let result = state.validate(&request.token).await?;

    tracing::info!(account_sid = %state.context.account_sid, "Token validated");

    Ok(Json(result))
}

/// Return the validation result for the caller's token.
///
/// GET /v1/me
#[utoipa::path(
    get,
    path = "/v1/me",
    responses(
        (status = 200, description = "IAM validation result for the presented token"),
        (status = 403, description = "Token missing or rejected")
    ),
    security(("bearer_auth" = [])),
    tag = "tokens"
)]
pub async fn me(Extension(result): Extension<ValidationResult>) -> Json<ValidationResult> {
    Json(result)
}

/// Health check endpoint.
///
/// GET /v1/health
#[utoipa::path(
    get,
    path = "/v1/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<GuardState>) -> Json<HealthResponse> {
    let credentials = match resolve(&state.context.account_sid, &state.context.credentials()) {
        Ok(_) => "configured".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        credentials,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
