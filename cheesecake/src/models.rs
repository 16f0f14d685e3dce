use chrono::{DateTime, NaiveDate, Utc};
use native_db::*;
use native_model::{Model, native_model};
use serde::{Deserialize, Serialize};

use crate::comments::{Comment, GalleryItem};
use crate::content::Booking;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct CommentRecord {
    #[primary_key]
    pub id: u64,
    pub client_name: String,
    pub description: String,
    pub rating: Option<u8>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 2, version = 1)]
#[native_db]
pub struct GalleryRecord {
    #[primary_key]
    pub id: u64,
    pub client_name: String,
    pub description: String,
    pub location: String,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 3, version = 1)]
#[native_db]
pub struct BookingRecord {
    #[primary_key]
    pub id: u64,
    pub trip_id: Option<String>,
    pub client_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub number_of_people: u32,
    pub booking_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<CommentRecord> for Comment {
    fn from(record: CommentRecord) -> Self {
        Self {
            id: record.id.to_string(),
            client_name: record.client_name,
            description: record.description,
            rating: record.rating,
            created_at: record.created_at,
        }
    }
}

impl From<GalleryRecord> for GalleryItem {
    fn from(record: GalleryRecord) -> Self {
        Self {
            id: record.id.to_string(),
            client_name: record.client_name,
            description: record.description,
            location: record.location,
            images: record.images,
            created_at: record.created_at,
        }
    }
}

impl From<BookingRecord> for Booking {
    fn from(record: BookingRecord) -> Self {
        Self {
            id: record.id.to_string(),
            client_name: record.client_name,
            email: record.email,
            phone: record.phone,
            booking_date: record.booking_date.map(|d| d.format("%Y-%m-%d").to_string()),
            number_of_people: Some(record.number_of_people),
            message: record.message,
            status: Some(record.status),
            trip_id: record.trip_id,
        }
    }
}
