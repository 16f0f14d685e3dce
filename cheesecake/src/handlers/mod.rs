pub mod bookings;
pub mod comments;
pub mod gallery;
pub mod locations;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::error::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Store(err) => match err {
                StoreError::Validation(_) => StatusCode::BAD_REQUEST,
                StoreError::StaticMode(_) => StatusCode::SERVICE_UNAVAILABLE,
                StoreError::Unsupported(_) => StatusCode::NOT_IMPLEMENTED,
                StoreError::Upstream { .. } | StoreError::Http(_) => StatusCode::BAD_GATEWAY,
                StoreError::Database(_) | StoreError::Io(_) | StoreError::Json(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::from(StoreError::Validation(ValidationError::MissingField("description"))),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::from(StoreError::StaticMode("read only")), StatusCode::SERVICE_UNAVAILABLE),
            (AppError::from(StoreError::Unsupported("gallery")), StatusCode::NOT_IMPLEMENTED),
            (AppError::from(StoreError::Upstream { status: 500 }), StatusCode::BAD_GATEWAY),
            (AppError::from(StoreError::Database("boom".into())), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::NotFound("location 'x'".into()), StatusCode::NOT_FOUND),
            (AppError::BadRequest("rating: invalid type".into()), StatusCode::BAD_REQUEST),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status(), expected, "{err}");
        }
    }
}
