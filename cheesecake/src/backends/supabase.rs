use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};

use super::Backend;
use crate::comments::{Comment, NewComment};
use crate::content::{BOOKING_PENDING, Booking, NewBooking};
use crate::error::StoreError;

const DEFAULT_RATING: u8 = 5;

/// Comments and bookings stored in the Supabase `comments` and `bookings`
/// tables, through its REST API.
pub struct SupabaseBackend {
    client: Client,
    base_url: String,
    anon_key: String,
}

#[derive(Debug, Serialize)]
struct CommentInsert {
    name: String,
    comment: String,
    rating: u8,
    email: Option<String>,
    phone: Option<String>,
}

#[derive(Debug, Serialize)]
struct BookingInsert<'a> {
    trip_id: Option<String>,
    client_name: String,
    email: String,
    phone: Option<String>,
    message: Option<String>,
    number_of_people: u32,
    booking_date: Option<NaiveDate>,
    status: &'a str,
}

#[derive(Debug, Deserialize)]
struct CommentRow {
    id: String,
    name: String,
    comment: String,
    rating: Option<u8>,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: row.id,
            client_name: row.name,
            description: row.comment,
            rating: row.rating,
            created_at: row.created_at,
        }
    }
}

impl SupabaseBackend {
    pub fn new(client: Client, base_url: String, anon_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
    }
}

async fn rows<T: for<'de> Deserialize<'de>>(request: RequestBuilder) -> Result<Vec<T>, StoreError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        tracing::error!("Supabase request failed with status {}", status);
        return Err(StoreError::Upstream {
            status: status.as_u16(),
        });
    }
    Ok(response.json::<Vec<T>>().await?)
}

#[async_trait]
impl Backend for SupabaseBackend {
    fn name(&self) -> &'static str {
        "supabase"
    }

    async fn submit_comment(&self, input: NewComment) -> Result<Comment, StoreError> {
        let input = input.validated()?;
        let insert = CommentInsert {
            name: input.client_name,
            comment: input.description,
            rating: input.rating.unwrap_or(DEFAULT_RATING),
            email: input.email,
            phone: input.phone,
        };

        let request = self
            .authorized(self.client.post(self.table_url("comments")))
            .header("Prefer", "return=representation")
            .json(&insert);

        let inserted: Vec<CommentRow> = rows(request).await?;
        inserted
            .into_iter()
            .next()
            .map(Comment::from)
            .ok_or(StoreError::Upstream { status: 200 })
    }

    async fn list_comments(&self, limit: usize) -> Result<Vec<Comment>, StoreError> {
        let url = format!(
            "{}?select=*&is_approved=eq.true&order=created_at.desc&limit={}",
            self.table_url("comments"),
            limit
        );
        let request = self.authorized(self.client.get(url));

        let comments: Vec<CommentRow> = rows(request).await?;
        Ok(comments.into_iter().map(Comment::from).collect())
    }

    async fn submit_booking(&self, input: NewBooking) -> Result<Booking, StoreError> {
        let input = input.validated()?;
        let insert = BookingInsert {
            trip_id: input.trip_id,
            client_name: input.client_name,
            email: input.email,
            phone: input.phone,
            message: input.message,
            number_of_people: input.number_of_people,
            booking_date: input.booking_date,
            status: BOOKING_PENDING,
        };

        let request = self
            .authorized(self.client.post(self.table_url("bookings")))
            .header("Prefer", "return=representation")
            .json(&insert);

        let inserted: Vec<Booking> = rows(request).await?;
        let booking = inserted
            .into_iter()
            .next()
            .ok_or(StoreError::Upstream { status: 200 })?;
        tracing::info!("Booking {} submitted for {}", booking.id, booking.client_name);
        Ok(booking)
    }
}
