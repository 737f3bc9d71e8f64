//! Router assembly: entity CRUD, operational routes, OpenAPI document.

pub mod common;
pub mod docs;
pub mod entity;

pub use common::common_routes;
pub use docs::{api_doc, docs_routes};
pub use entity::{entity_routes, resource_routes};

use crate::state::AppState;
use axum::Router;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body.
pub const BODY_LIMIT: usize = 64 * 1024;

/// The complete application: every route plus CORS (any origin, method, header),
/// request tracing and the body-size limit.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(docs_routes())
        .merge(entity_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
                .max_age(Duration::from_secs(600)),
        )
}
