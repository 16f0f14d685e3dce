use axum::{Json, extract::Path};
use serde::Serialize;

use super::AppError;
use crate::catalog::{self, Destination, DestinationSummary};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetail {
    #[serde(flatten)]
    pub destination: Destination,
    pub title: &'static str,
    pub best_season: &'static str,
    pub summary: Option<DestinationSummary>,
}

pub async fn list_locations() -> Json<&'static [Destination]> {
    Json(catalog::list())
}

pub async fn get_location(Path(id): Path<String>) -> Result<Json<LocationDetail>, AppError> {
    let destination = catalog::by_id(&id).ok_or_else(|| AppError::NotFound(format!("location '{id}'")))?;

    Ok(Json(LocationDetail {
        destination: *destination,
        title: destination.title(),
        best_season: destination.best_season(),
        summary: catalog::summary(&id).copied(),
    }))
}
