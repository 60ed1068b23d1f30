//! Bookmark tracker: a REST backend for one entity, persisted in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::ensure_tables;
pub use model::{Bookmark, BookmarkCreate, BookmarkUpdate, MediaType};
pub use routes::{app, bookmark_routes, common_routes, openapi_routes, ApiDoc};
pub use service::{BookmarkService, RequestValidator};
pub use state::AppState;
pub use store::{connect, connect_with_settings};
