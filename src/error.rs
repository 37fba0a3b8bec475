//! Error types for token validation.
//!
//! Every failure is terminal for the current invocation. Hosts turn any of
//! them into a 403 deny response whose body is the error's message.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::auth::CredentialError;
use crate::guard::{deny, deny_message, HttpResponse};

/// Reasons a token validation can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unauthorized: Token was not provided")]
    TokenMissing,

    #[error("Unauthorized: AccountSid was not provided")]
    AccountIdMissing,

    #[error("Unauthorized: AuthToken or Api Credentials were not provided")]
    CredentialMissing,

    #[error("Unauthorized: Api Key and Api Secret must both be provided")]
    IncompleteKeyPair,

    /// The endpoint answered with something that is not the expected JSON.
    #[error("{0}")]
    MalformedResponse(String),

    /// The endpoint reported the token as invalid.
    #[error("{0}")]
    RemoteRejected(String),

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
}

impl From<CredentialError> for ValidationError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::MissingAccountId => ValidationError::AccountIdMissing,
            CredentialError::MissingCredential => ValidationError::CredentialMissing,
            CredentialError::IncompleteKeyPair => ValidationError::IncompleteKeyPair,
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let mut response = HttpResponse::default();
        deny(&mut response, &deny_message(&self));
        response.into_response()
    }
}

/// Result type alias for validation operations.
pub type GuardResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_credential_error_mapping() {
        assert_eq!(
            ValidationError::from(CredentialError::MissingAccountId),
            ValidationError::AccountIdMissing
        );
        assert_eq!(
            ValidationError::from(CredentialError::MissingCredential),
            ValidationError::CredentialMissing
        );
        assert_eq!(
            ValidationError::from(CredentialError::IncompleteKeyPair),
            ValidationError::IncompleteKeyPair
        );
    }

    #[test]
    fn test_remote_messages_are_verbatim() {
        assert_eq!(
            ValidationError::RemoteRejected("not valid".to_string()).to_string(),
            "not valid"
        );
        assert_eq!(
            ValidationError::Transport("this failed".to_string()).to_string(),
            "this failed"
        );
    }

    #[test]
    fn test_into_response_is_forbidden() {
        let response = ValidationError::TokenMissing.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
