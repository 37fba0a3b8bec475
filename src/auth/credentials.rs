//! Credential resolution and Basic authorization header construction.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use thiserror::Error;

/// Raw credential fields as supplied by the hosting environment.
///
/// Every field is optional; an empty string counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    /// Account-wide auth token.
    #[serde(default)]
    pub auth_token: Option<String>,
    /// API key SID.
    #[serde(default)]
    pub api_key: Option<String>,
    /// API key secret.
    #[serde(default)]
    pub api_secret: Option<String>,
}

impl Credentials {
    /// Credentials consisting of the account auth token only.
    pub fn auth_token(token: impl Into<String>) -> Self {
        Self {
            auth_token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Credentials consisting of an API key and secret only.
    pub fn api_key(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            auth_token: None,
            api_key: Some(key.into()),
            api_secret: Some(secret.into()),
        }
    }
}

/// The credential material chosen for a single validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// The account auth token, paired with the account SID.
    PrimarySecret(String),
    /// A scoped API key and its secret.
    KeyPair { key: String, secret: String },
}

/// Errors produced while resolving credentials.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Unauthorized: AccountSid was not provided")]
    MissingAccountId,

    #[error("Unauthorized: AuthToken or Api Credentials were not provided")]
    MissingCredential,

    #[error("Unauthorized: Api Key and Api Secret must both be provided")]
    IncompleteKeyPair,
}

/// A computed `Authorization` header value.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthorizationHeader(String);

impl AuthorizationHeader {
    fn basic(identity: &str, secret: &str) -> Self {
        let encoded = STANDARD.encode(format!("{identity}:{secret}"));
        Self(format!("Basic {encoded}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keeps the encoded secret out of logs.
impl std::fmt::Debug for AuthorizationHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthorizationHeader(Basic ***)")
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Credential {
    /// Pick the credential to use from the raw fields.
    ///
    /// A complete key pair takes precedence over the auth token. A half-filled
    /// key pair is rejected even when an auth token is also present.
    pub fn select(credentials: &Credentials) -> Result<Self, CredentialError> {
        match (present(&credentials.api_key), present(&credentials.api_secret)) {
            (Some(key), Some(secret)) => Ok(Credential::KeyPair {
                key: key.to_string(),
                secret: secret.to_string(),
            }),
            (Some(_), None) | (None, Some(_)) => Err(CredentialError::IncompleteKeyPair),
            (None, None) => present(&credentials.auth_token)
                .map(|token| Credential::PrimarySecret(token.to_string()))
                .ok_or(CredentialError::MissingCredential),
        }
    }

    /// Build the Basic authorization header for this credential.
    pub fn authorization(&self, account_sid: &str) -> AuthorizationHeader {
        match self {
            Credential::PrimarySecret(secret) => AuthorizationHeader::basic(account_sid, secret),
            Credential::KeyPair { key, secret } => AuthorizationHeader::basic(key, secret),
        }
    }
}

/// Resolve the authorization header for an account and its credentials.
pub fn resolve(
    account_sid: &str,
    credentials: &Credentials,
) -> Result<AuthorizationHeader, CredentialError> {
    if account_sid.is_empty() {
        return Err(CredentialError::MissingAccountId);
    }

    let credential = Credential::select(credentials)?;
    Ok(credential.authorization(account_sid))
}
