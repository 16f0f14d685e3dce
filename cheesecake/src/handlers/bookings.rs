use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use super::AppError;
use crate::{AppState, Booking, NewBooking};

pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<NewBooking>, JsonRejection>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let Json(payload) = payload?;
    let booking = state.backend.submit_booking(payload).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}
