//! HTTP adapter
//!
//! Exposes the resolver to the browser extension:
//!
//! - `POST /sidebyside` with `{"queryTokens": [...]}`
//! - `GET /sidebyside?q=side+by+side+...`
//! - `GET /health`
//!
//! Both resolve routes answer with the ordered entity mapping.

pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::resolve::EntityResolver;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub resolver: EntityResolver,
}

impl AppState {
    pub fn new(resolver: EntityResolver) -> Self {
        Self { resolver }
    }
}

/// Build the axum router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/sidebyside",
            post(handlers::resolve_tokens).get(handlers::resolve_query),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
