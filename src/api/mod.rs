//! HTTP API for the token guard.
//!
//! Exposes token validation over HTTP and a sample route protected by it.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
