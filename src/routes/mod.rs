//! Router assembly.

pub mod bookmark;
pub mod common;
pub mod openapi;

pub use bookmark::bookmark_routes;
pub use common::common_routes;
pub use openapi::{openapi_routes, ApiDoc};

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;

/// The full application: common, OpenAPI and bookmark routes behind a body size limit.
/// `body_limit_bytes` also replaces axum's built-in 2 MiB cap on extracted bodies.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(openapi_routes())
        .merge(bookmark_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(body_limit_bytes))
                .layer(RequestBodyLimitLayer::new(body_limit_bytes)),
        )
}
