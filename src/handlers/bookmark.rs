//! Bookmark handlers: create, read, list, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::extractors::ValidJson;
use crate::model::{Bookmark, BookmarkCreate, BookmarkUpdate};
use crate::service::{BookmarkService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("bookmark {}", id))
}

#[utoipa::path(
    get,
    path = "/bookmarks/",
    tag = "bookmarks",
    responses((status = 200, description = "All bookmarks, ascending by id", body = [Bookmark]))
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = BookmarkService::list(&state.pool).await?;
    Ok((StatusCode::OK, Json(rows)))
}

#[utoipa::path(
    post,
    path = "/bookmarks/",
    tag = "bookmarks",
    request_body = BookmarkCreate,
    responses(
        (status = 201, description = "Created", body = Bookmark),
        (status = 422, description = "Malformed body", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<BookmarkCreate>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate_create(&body)?;
    let row = BookmarkService::create(&state.pool, body).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    get,
    path = "/bookmarks/{id}",
    tag = "bookmarks",
    params(("id" = i64, Path, description = "Bookmark id")),
    responses(
        (status = 200, description = "Found", body = Bookmark),
        (status = 404, description = "No such bookmark", body = ErrorBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::parse_id(&id_str)?;
    let row = BookmarkService::read(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok((StatusCode::OK, Json(row)))
}

#[utoipa::path(
    put,
    path = "/bookmarks/{id}",
    tag = "bookmarks",
    params(("id" = i64, Path, description = "Bookmark id")),
    request_body = BookmarkUpdate,
    responses(
        (status = 200, description = "Updated", body = Bookmark),
        (status = 404, description = "No such bookmark", body = ErrorBody),
        (status = 422, description = "Malformed body", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    ValidJson(body): ValidJson<BookmarkUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::parse_id(&id_str)?;
    RequestValidator::validate_update(id, &body)?;
    let row = BookmarkService::update(&state.pool, id, body)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok((StatusCode::OK, Json(row)))
}

#[utoipa::path(
    delete,
    path = "/bookmarks/{id}",
    tag = "bookmarks",
    params(("id" = i64, Path, description = "Bookmark id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such bookmark", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::parse_id(&id_str)?;
    if !BookmarkService::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
