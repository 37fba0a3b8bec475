//! IAM Token Guard
//!
//! Validates short-lived Twilio IAM access tokens in front of request
//! handlers. [`guard::guard`] wraps serverless-style handlers,
//! [`auth::require_token`] protects axum routes, and both sit on top of
//! [`auth::TokenValidator`].

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod guard;
pub mod logging;

pub use auth::{resolve, Credential, Credentials, TokenValidator, ValidationResult};
pub use error::{GuardResult, ValidationError};
pub use guard::{guard, Context, Event, Guard, GuardResponse, ResponseFactory};
