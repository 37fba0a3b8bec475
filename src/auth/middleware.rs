//! Token authentication middleware for axum.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::{TokenValidator, ValidationResult};
use crate::error::GuardResult;
use crate::guard::Context;

/// Header carrying the token when no bearer token is sent.
pub const TOKEN_HEADER: &str = "X-Twilio-Token";

/// Validator plus the account it validates for, shared across requests.
#[derive(Clone)]
pub struct GuardState {
    pub validator: TokenValidator,
    pub context: Arc<Context>,
}

impl GuardState {
    pub fn new(validator: TokenValidator, context: Context) -> Self {
        Self {
            validator,
            context: Arc::new(context),
        }
    }

    /// Validate a token with the configured account credentials.
    pub async fn validate(&self, token: &str) -> GuardResult<ValidationResult> {
        self.validator
            .validate(
                token,
                &self.context.account_sid,
                &self.context.credentials(),
                self.context.realm(),
            )
            .await
    }
}

/// Extract the token from `Authorization: Bearer` or `X-Twilio-Token`.
fn request_token<B>(request: &Request<B>) -> Option<String> {
    let bearer = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    bearer
        .or_else(|| {
            request
                .headers()
                .get(TOKEN_HEADER)
                .and_then(|v| v.to_str().ok())
        })
        .map(String::from)
}

/// Require a valid IAM token.
///
/// The validation result is added to the request extensions. Failures answer
/// with the 403 deny response.
pub async fn require_token(
    State(state): State<GuardState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, crate::error::ValidationError> {
    // A missing token falls through to the validator's own check
    let token = request_token(&request).unwrap_or_default();

    let result = state.validate(&token).await.map_err(|e| {
        tracing::debug!(error = %e, path = %request.uri().path(), "Token validation failed");
        e
    })?;

    request.extensions_mut().insert(result);

    Ok(next.run(request).await)
}

/// Extension trait to read the validation result from a request.
pub trait TokenExtensions {
    fn token_result(&self) -> Option<&ValidationResult>;
}

impl<B> TokenExtensions for Request<B> {
    fn token_result(&self) -> Option<&ValidationResult> {
        self.extensions().get()
    }
}
