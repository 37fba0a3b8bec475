//! Invocation context and event shapes supplied by the hosting runtime.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::auth::{Credentials, ValidationResult};

/// Account settings exposed by the host for each invocation.
///
/// Accepts both the runtime's upper-case names (`ACCOUNT_SID`) and the
/// snake-case names used in configuration files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Context {
    #[serde(default, alias = "ACCOUNT_SID")]
    pub account_sid: String,
    #[serde(default, alias = "AUTH_TOKEN")]
    pub auth_token: Option<String>,
    #[serde(default, alias = "API_KEY")]
    pub api_key: Option<String>,
    #[serde(default, alias = "API_SECRET")]
    pub api_secret: Option<String>,
    /// Region such as `us1` or `stage-us1`.
    #[serde(default, alias = "TWILIO_REGION")]
    pub region: Option<String>,
}

impl Context {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            auth_token: self.auth_token.clone(),
            api_key: self.api_key.clone(),
            api_secret: self.api_secret.clone(),
        }
    }

    /// Realm derived from the region: the part before the first `-`.
    pub fn realm(&self) -> Option<&str> {
        self.region
            .as_deref()
            .and_then(|region| region.split('-').next())
            .filter(|realm| !realm.is_empty())
    }
}

/// Incoming event carrying the token to validate.
///
/// Fields other than `Token` and `TokenResult` are kept untouched in `fields`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "Token", default)]
    pub token: String,
    /// Filled in by the guard once the token has been validated.
    #[serde(rename = "TokenResult", default, skip_serializing_if = "Option::is_none")]
    pub token_result: Option<ValidationResult>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Event {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }
}
