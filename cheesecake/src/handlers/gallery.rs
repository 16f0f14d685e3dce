use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use super::AppError;
use crate::{AppState, GalleryItem, NewGalleryItem};

pub async fn list_gallery(State(state): State<AppState>) -> Result<Json<Vec<GalleryItem>>, AppError> {
    Ok(Json(state.backend.list_gallery().await?))
}

pub async fn create_gallery_item(
    State(state): State<AppState>,
    payload: Result<Json<NewGalleryItem>, JsonRejection>,
) -> Result<(StatusCode, Json<GalleryItem>), AppError> {
    let Json(payload) = payload?;
    let item = state.backend.submit_gallery_item(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}
