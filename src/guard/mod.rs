//! Handler guard for serverless-style `(context, event, callback)` handlers.
//!
//! The guard validates the event's token before the wrapped handler runs:
//! - valid: the result is stored on the event and the handler takes over
//! - invalid: a 403 deny response goes straight to the callback
//!
//! Exactly one of the two happens per invocation.

mod context;
mod response;

pub use context::*;
pub use response::*;

use std::future::Future;

use crate::auth::{resolve, TokenValidator, ValidationResult};
use crate::error::ValidationError;

/// Where misconfigured accounts are pointed for help.
pub const CONFIGURE_URL: &str = "https://twilio.com/console/runtime/functions/configure";

/// Error a handler may report through its callback.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Completion callback `(error, response)` handed to every handler.
pub type Callback<R> = Box<dyn FnOnce(Option<HandlerError>, Option<R>) + Send>;

/// Body of the deny response for a validation failure.
///
/// Account configuration problems get a pointer to the configuration page.
pub fn deny_message(err: &ValidationError) -> String {
    match err {
        ValidationError::AccountIdMissing
        | ValidationError::CredentialMissing
        | ValidationError::IncompleteKeyPair => {
            format!("{err}. For more information, please visit {CONFIGURE_URL}")
        }
        other => other.to_string(),
    }
}

/// A handler wrapped with token validation.
pub struct Guard<H, F> {
    handler: H,
    responses: F,
    validator: TokenValidator,
}

/// Wrap `handler` so it only runs for events carrying a valid token.
///
/// `responses` builds the host response objects used for deny responses.
pub fn guard<H, F>(handler: H, responses: F) -> Guard<H, F>
where
    F: ResponseFactory,
{
    Guard {
        handler,
        responses,
        validator: TokenValidator::default(),
    }
}

impl<H, F> Guard<H, F>
where
    F: ResponseFactory,
{
    /// Use a specific validator, e.g. one with a timeout or a custom origin.
    pub fn with_validator(mut self, validator: TokenValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Check the account settings, then validate the event's token.
    ///
    /// Account problems are reported ahead of a missing token, since no token
    /// can be checked until the account is configured.
    async fn check(
        &self,
        context: &Context,
        event: &Event,
    ) -> Result<ValidationResult, ValidationError> {
        let credentials = context.credentials();
        resolve(&context.account_sid, &credentials)?;

        self.validator
            .validate(&event.token, &context.account_sid, &credentials, context.realm())
            .await
    }

    /// Run one guarded invocation.
    pub async fn handle<Fut>(
        &self,
        context: Context,
        mut event: Event,
        callback: Callback<F::Response>,
    ) where
        H: Fn(Context, Event, Callback<F::Response>) -> Fut,
        Fut: Future<Output = ()>,
    {
        let outcome = self.check(&context, &event).await;

        match outcome {
            Ok(result) => {
                tracing::debug!(account_sid = %context.account_sid, "Token valid, invoking handler");
                event.token_result = Some(result);
                (self.handler)(context, event, callback).await;
            }
            Err(err) => {
                tracing::info!(account_sid = %context.account_sid, error = %err, "Denying invocation");
                let mut response = self.responses.create();
                deny(&mut response, &deny_message(&err));
                callback(None, Some(response));
            }
        }
    }
}
