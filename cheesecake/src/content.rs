//! Read-only site content served from the static `/data/*.json` files.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub group_size: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub reviews: Option<u32>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub destinations: Option<Vec<String>>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub detailed_info: Option<DetailedInfo>,
}

/// Free-form trip details, which the data files store as an array, an
/// object or a bare string. Resolved into one of three shapes on load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum DetailedInfo {
    List(Vec<String>),
    KeyedText(BTreeMap<String, String>),
    PlainText(String),
}

impl From<Value> for DetailedInfo {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => DetailedInfo::List(items.into_iter().map(stringify).collect()),
            Value::Object(map) => DetailedInfo::KeyedText(
                map.into_iter().map(|(k, v)| (k, stringify(v))).collect(),
            ),
            other => DetailedInfo::PlainText(stringify(other)),
        }
    }
}

fn stringify(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl Serialize for DetailedInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DetailedInfo::List(items) => items.serialize(serializer),
            DetailedInfo::KeyedText(map) => map.serialize(serializer),
            DetailedInfo::PlainText(text) => text.serialize(serializer),
        }
    }
}

impl DetailedInfo {
    /// Up to `n` short lines for a trip card.
    pub fn highlights(&self, n: usize) -> Vec<&str> {
        match self {
            DetailedInfo::List(items) => items.iter().take(n).map(String::as_str).collect(),
            DetailedInfo::KeyedText(map) => map.values().take(n).map(String::as_str).collect(),
            DetailedInfo::PlainText(text) if n > 0 && !text.is_empty() => vec![text.as_str()],
            DetailedInfo::PlainText(_) => Vec::new(),
        }
    }
}

impl Trip {
    /// Discount relative to the original price, in whole percent.
    pub fn discount_percent(&self) -> Option<u32> {
        match (self.price, self.original_price) {
            (Some(price), Some(original)) if original > price && original > 0.0 => {
                Some((((original - price) / original) * 100.0).round() as u32)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyCar {
    pub id: String,
    pub name: String,
    pub number_plate: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub number_of_passengers: Option<u32>,
}

/// Cars shown in the fleet view: everything not explicitly unavailable,
/// ordered by name.
pub fn available_cars(mut cars: Vec<CompanyCar>) -> Vec<CompanyCar> {
    cars.retain(|car| car.is_available != Some(false));
    cars.sort_by(|a, b| a.name.cmp(&b.name));
    cars
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteImage {
    pub id: String,
    pub name: String,
    pub image_url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub client_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub booking_date: Option<String>,
    #[serde(default)]
    pub number_of_people: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub trip_id: Option<String>,
}

pub const BOOKING_PENDING: &str = "pending";
pub const MAX_TRAVELLERS: u32 = 20;

/// Trip booking request from the "Book this safari" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    #[serde(default, alias = "trip_id")]
    pub trip_id: Option<String>,
    #[serde(default, alias = "client_name")]
    pub client_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "one", alias = "number_of_people")]
    pub number_of_people: u32,
    #[serde(default, alias = "booking_date")]
    pub booking_date: Option<NaiveDate>,
}

fn one() -> u32 {
    1
}

impl Default for NewBooking {
    fn default() -> Self {
        Self {
            trip_id: None,
            client_name: String::new(),
            email: String::new(),
            phone: None,
            message: None,
            number_of_people: 1,
            booking_date: None,
        }
    }
}

impl NewBooking {
    /// Name and email are required; blank optional fields are dropped.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let client_name = self.client_name.trim();
        if client_name.is_empty() {
            return Err(ValidationError::MissingField("clientName"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if !looks_like_email(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }
        if !(1..=MAX_TRAVELLERS).contains(&self.number_of_people) {
            return Err(ValidationError::InvalidPartySize {
                limit: MAX_TRAVELLERS,
                actual: self.number_of_people,
            });
        }

        Ok(Self {
            trip_id: non_blank(self.trip_id),
            client_name: client_name.to_string(),
            email: email.to_string(),
            phone: non_blank(self.phone),
            message: non_blank(self.message),
            number_of_people: self.number_of_people,
            booking_date: self.booking_date,
        })
    }

    /// The stored row for this request, still awaiting confirmation.
    pub fn into_pending(self, id: String) -> Booking {
        Booking {
            id,
            client_name: self.client_name,
            email: self.email,
            phone: self.phone,
            booking_date: self.booking_date.map(|d| d.format("%Y-%m-%d").to_string()),
            number_of_people: Some(self.number_of_people),
            message: self.message,
            status: Some(BOOKING_PENDING.to_string()),
            trip_id: self.trip_id,
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Vehicle hire request assembled in the fleet modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarBookingRequest {
    pub client_name: String,
    #[serde(default)]
    pub from_date: Option<NaiveDate>,
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
    pub passengers: u32,
    pub cars: u32,
}

impl Default for CarBookingRequest {
    fn default() -> Self {
        Self {
            client_name: String::new(),
            from_date: None,
            to_date: None,
            passengers: 1,
            cars: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn trip_with(detailed_info: Value) -> Trip {
        serde_json::from_value(json!({
            "id": "t1",
            "title": "Mara Explorer",
            "detailed_info": detailed_info,
        }))
        .unwrap()
    }

    #[test]
    fn test_detailed_info_shapes() {
        let list = trip_with(json!(["Game drives", 3, "Park fees"]));
        assert_eq!(
            list.detailed_info,
            Some(DetailedInfo::List(vec![
                "Game drives".into(),
                "3".into(),
                "Park fees".into()
            ]))
        );

        let keyed = trip_with(json!({"day1": "Arrive Nairobi", "day2": "Drive to Mara"}));
        assert_eq!(
            keyed.detailed_info.unwrap().highlights(1),
            vec!["Arrive Nairobi"]
        );

        let text = trip_with(json!("All inclusive"));
        assert_eq!(
            text.detailed_info,
            Some(DetailedInfo::PlainText("All inclusive".into()))
        );

        let none = trip_with(Value::Null);
        assert_eq!(none.detailed_info, None);
    }

    #[test]
    fn test_detailed_info_serializes_in_original_shape() {
        let info = DetailedInfo::List(vec!["a".into(), "b".into()]);
        assert_eq!(serde_json::to_value(&info).unwrap(), json!(["a", "b"]));

        let info = DetailedInfo::PlainText("x".into());
        assert_eq!(serde_json::to_value(&info).unwrap(), json!("x"));
    }

    #[test]
    fn test_trip_nullable_fields() {
        let trip: Trip = serde_json::from_value(json!({
            "id": "t2",
            "title": "Tsavo",
            "price": null,
            "features": null,
            "original_price": 1200.0
        }))
        .unwrap();
        assert_eq!(trip.price, None);
        assert_eq!(trip.features, None);
        assert_eq!(trip.discount_percent(), None);
    }

    #[test]
    fn test_discount_percent() {
        let mut trip = trip_with(Value::Null);
        trip.price = Some(900.0);
        trip.original_price = Some(1200.0);
        assert_eq!(trip.discount_percent(), Some(25));
    }

    fn booking() -> NewBooking {
        NewBooking {
            trip_id: Some("t1".into()),
            client_name: " Amina ".into(),
            email: "amina@example.com".into(),
            phone: Some("  ".into()),
            number_of_people: 4,
            booking_date: NaiveDate::from_ymd_opt(2026, 12, 20),
            ..NewBooking::default()
        }
    }

    #[test]
    fn test_booking_requires_name_and_email() {
        let no_name = NewBooking {
            client_name: "   ".into(),
            ..booking()
        };
        assert_eq!(no_name.validated(), Err(ValidationError::MissingField("clientName")));

        let no_email = NewBooking {
            email: String::new(),
            ..booking()
        };
        assert_eq!(no_email.validated(), Err(ValidationError::MissingField("email")));

        let bad_email = NewBooking {
            email: "amina.example.com".into(),
            ..booking()
        };
        assert!(matches!(bad_email.validated(), Err(ValidationError::InvalidEmail(_))));
    }

    #[test]
    fn test_booking_party_size() {
        for people in [0, 21] {
            let request = NewBooking {
                number_of_people: people,
                ..booking()
            };
            assert_eq!(
                request.validated(),
                Err(ValidationError::InvalidPartySize {
                    limit: 20,
                    actual: people
                })
            );
        }
    }

    #[test]
    fn test_booking_becomes_pending_row() {
        let row = booking().validated().unwrap().into_pending("b1".into());

        assert_eq!(row.client_name, "Amina");
        assert_eq!(row.phone, None);
        assert_eq!(row.booking_date.as_deref(), Some("2026-12-20"));
        assert_eq!(row.number_of_people, Some(4));
        assert_eq!(row.status.as_deref(), Some("pending"));
        assert_eq!(row.trip_id.as_deref(), Some("t1"));
    }

    #[test]
    fn test_booking_accepts_table_field_names() {
        let request: NewBooking = serde_json::from_value(json!({
            "trip_id": "t9",
            "client_name": "Baraka",
            "email": "baraka@example.com",
            "booking_date": "2027-01-05"
        }))
        .unwrap();

        assert_eq!(request.trip_id.as_deref(), Some("t9"));
        assert_eq!(request.number_of_people, 1);
        assert_eq!(request.booking_date, NaiveDate::from_ymd_opt(2027, 1, 5));
    }

    #[test]
    fn test_available_cars_filters_and_sorts() {
        let cars: Vec<CompanyCar> = serde_json::from_value(json!([
            {"id": "1", "name": "Toyota Land Cruiser", "number_plate": "KDA 001A"},
            {"id": "2", "name": "Nissan Safari", "number_plate": "KDB 002B", "is_available": false},
            {"id": "3", "name": "Land Rover Defender", "number_plate": "KDC 003C", "is_available": true}
        ]))
        .unwrap();

        let names: Vec<String> = available_cars(cars).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Land Rover Defender", "Toyota Land Cruiser"]);
    }
}
