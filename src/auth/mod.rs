//! Token authentication against Twilio IAM.
//!
//! - Credentials: pick the account credential and build the Basic header
//! - Validator: call the IAM validate endpoint for a token
//! - Middleware: axum layer guarding routes with the validator

mod credentials;
mod middleware;
mod validator;

pub use credentials::*;
pub use middleware::*;
pub use validator::*;
