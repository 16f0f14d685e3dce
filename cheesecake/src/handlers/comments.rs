use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

use super::AppError;
use crate::{AppState, Comment, NewComment};

#[derive(Debug, Deserialize)]
pub struct ListCommentsQuery {
    limit: Option<usize>,
}

pub async fn list_comments(
    Query(params): Query<ListCommentsQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let limit = params.limit.unwrap_or(state.config.comments_limit);
    let comments = state.backend.list_comments(limit).await?;
    Ok(Json(comments))
}

pub async fn create_comment(
    State(state): State<AppState>,
    payload: Result<Json<NewComment>, JsonRejection>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let Json(payload) = payload?;
    let comment = state.backend.submit_comment(payload).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}
