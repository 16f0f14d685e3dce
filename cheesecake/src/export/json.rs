use chrono::NaiveDate;
use serde::Serialize;

use super::{ExportArtifact, JSON_MIME};
use crate::cart::PackageCart;
use crate::content::{CarBookingRequest, CompanyCar};
use crate::error::ExportError;

pub fn json_filename(date: NaiveDate) -> String {
    format!("cheesecake_package_{}.json", date.format("%Y-%m-%d"))
}

/// The cart entries, verbatim and pretty-printed.
pub fn package_export(cart: &PackageCart, date: NaiveDate) -> Result<ExportArtifact, ExportError> {
    let bytes = serde_json::to_vec_pretty(cart.entries())?;
    Ok(ExportArtifact {
        filename: json_filename(date),
        mime: JSON_MIME,
        bytes,
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookingFile<'a> {
    vehicle: &'a str,
    number_plate: &'a str,
    #[serde(flatten)]
    request: &'a CarBookingRequest,
}

/// Booking record the visitor keeps (or attaches) before the message opens.
pub fn booking_export(
    car: &CompanyCar,
    request: &CarBookingRequest,
    date: NaiveDate,
) -> Result<ExportArtifact, ExportError> {
    let file = BookingFile {
        vehicle: &car.name,
        number_plate: &car.number_plate,
        request,
    };
    let plate: String = car
        .number_plate
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();

    Ok(ExportArtifact {
        filename: format!("cheesecake_booking_{}_{}.json", plate, date.format("%Y-%m-%d")),
        mime: JSON_MIME,
        bytes: serde_json::to_vec_pretty(&file)?,
    })
}
