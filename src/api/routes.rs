//! Route definitions for the API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::auth::{require_token, GuardState};

/// Security scheme modifier for OpenAPI.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::validate_token, handlers::me, handlers::health_check),
    components(schemas(
        crate::api::types::ValidateTokenRequest,
        crate::api::types::HealthResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "tokens", description = "IAM token validation"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "IAM Token Guard API",
        version = "0.1.0",
        description = "Validates Twilio IAM tokens in front of request handlers",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
pub fn build_router(state: GuardState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes requiring a valid IAM token
    let protected_routes = Router::new()
        .route("/v1/me", get(handlers::me))
        .layer(middleware::from_fn_with_state(state.clone(), require_token));

    let public_routes = Router::new()
        .route("/v1/health", get(handlers::health_check))
        .route("/v1/tokens/validate", post(handlers::validate_token))
        .with_state(state);

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
