//! OpenAPI document for the bookmark API, served at /openapi.json.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::bookmark;
use crate::model::{Bookmark, BookmarkCreate, BookmarkUpdate, MediaType};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Bookmarks API", description = "Track progress through podcasts, shows and books"),
    paths(
        bookmark::list,
        bookmark::create,
        bookmark::read,
        bookmark::update,
        bookmark::delete,
    ),
    components(schemas(
        MediaType,
        Bookmark,
        BookmarkCreate,
        BookmarkUpdate,
        ErrorBody,
        ErrorDetail
    )),
    tags((name = "bookmarks", description = "Bookmark CRUD"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn openapi_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_bookmark_paths_and_schemas() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/bookmarks/"));
        assert!(paths.contains_key("/bookmarks/{id}"));
        let item = &paths["/bookmarks/{id}"];
        assert!(item.get("get").is_some());
        assert!(item.get("put").is_some());
        assert!(item.get("delete").is_some());
        let schemas = doc["components"]["schemas"].as_object().unwrap();
        for name in ["MediaType", "BookmarkOut", "BookmarkCreate", "BookmarkUpdate", "ErrorBody"] {
            assert!(schemas.contains_key(name), "missing schema {}", name);
        }
    }
}
