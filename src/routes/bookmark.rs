//! Bookmark CRUD routes. Collection and item paths answer with and without a trailing slash.

use crate::handlers::bookmark::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn bookmark_routes(state: AppState) -> Router {
    Router::new()
        .route("/bookmarks/", get(list).post(create))
        .route("/bookmarks", get(list).post(create))
        .route(
            "/bookmarks/:id",
            get(read).put(update).delete(delete_handler),
        )
        .route(
            "/bookmarks/:id/",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
