use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use super::Backend;
use crate::comments::{Comment, GalleryItem, NewComment, NewGalleryItem};
use crate::content::{BOOKING_PENDING, Booking, NewBooking};
use crate::db::Database;
use crate::error::StoreError;
use crate::models::{BookingRecord, CommentRecord, GalleryRecord};

/// Comments, gallery items and bookings kept in the embedded native_db store.
pub struct DocumentBackend {
    db: Arc<Database>,
}

impl DocumentBackend {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Backend for DocumentBackend {
    fn name(&self) -> &'static str {
        "document"
    }

    async fn submit_comment(&self, input: NewComment) -> Result<Comment, StoreError> {
        let input = input.validated()?;
        let record = CommentRecord {
            id: 0, // Will be auto-generated
            client_name: input.client_name,
            description: input.description,
            rating: input.rating,
            email: input.email,
            phone: input.phone,
            created_at: Utc::now(),
        };

        let record = self.db.insert_comment(record)?;
        tracing::info!("Stored comment {} from {}", record.id, record.client_name);
        Ok(record.into())
    }

    async fn list_comments(&self, limit: usize) -> Result<Vec<Comment>, StoreError> {
        let comments = self.db.get_recent_comments(limit)?;
        Ok(comments.into_iter().map(Comment::from).collect())
    }

    async fn submit_gallery_item(&self, input: NewGalleryItem) -> Result<GalleryItem, StoreError> {
        let input = input.validated()?;
        let record = GalleryRecord {
            id: 0,
            client_name: input.client_name,
            description: input.description,
            location: input.location,
            images: input.images,
            created_at: Utc::now(),
        };

        let record = self.db.insert_gallery_item(record)?;
        tracing::info!("Stored gallery item {} at {}", record.id, record.location);
        Ok(record.into())
    }

    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, StoreError> {
        let mut items = self.db.get_all_gallery_items()?;
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items.into_iter().map(GalleryItem::from).collect())
    }

    async fn submit_booking(&self, input: NewBooking) -> Result<Booking, StoreError> {
        let input = input.validated()?;
        let record = BookingRecord {
            id: 0,
            trip_id: input.trip_id,
            client_name: input.client_name,
            email: input.email,
            phone: input.phone,
            message: input.message,
            number_of_people: input.number_of_people,
            booking_date: input.booking_date,
            status: BOOKING_PENDING.to_string(),
            created_at: Utc::now(),
        };

        let record = self.db.insert_booking(record)?;
        tracing::info!(
            "Stored booking {} for {} traveller(s) from {}",
            record.id,
            record.number_of_people,
            record.client_name
        );
        Ok(record.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn backend() -> DocumentBackend {
        DocumentBackend::new(Arc::new(Database::in_memory().unwrap()))
    }

    #[tokio::test]
    async fn test_submit_then_list() {
        let backend = backend();
        let stored = backend
            .submit_comment(NewComment {
                client_name: "Wanjiru".into(),
                description: "Best guide we ever had".into(),
                rating: Some(5),
                ..NewComment::default()
            })
            .await
            .unwrap();
        assert_eq!(stored.id, "1");

        let listed = backend.list_comments(10).await.unwrap();
        assert_eq!(listed, vec![stored]);
    }

    #[tokio::test]
    async fn test_rejects_long_description_without_storing() {
        let backend = backend();
        let err = backend
            .submit_comment(NewComment {
                description: vec!["word"; 51].join(" "),
                ..NewComment::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::TooManyWords { actual: 51, .. })
        ));
        assert!(backend.list_comments(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_gallery_round_trip() {
        let backend = backend();
        let item = backend
            .submit_gallery_item(NewGalleryItem {
                client_name: "Otieno".into(),
                description: "Leopard in a tree".into(),
                location: "Mara".into(),
                images: vec!["/uploads/leopard.jpg".into()],
            })
            .await
            .unwrap();

        assert_eq!(backend.list_gallery().await.unwrap(), vec![item]);
    }

    #[tokio::test]
    async fn test_booking_stored_as_pending() {
        let backend = backend();
        let booking = backend
            .submit_booking(NewBooking {
                trip_id: Some("mara-explorer".into()),
                client_name: "Baraka".into(),
                email: "baraka@example.com".into(),
                number_of_people: 3,
                ..NewBooking::default()
            })
            .await
            .unwrap();

        assert_eq!(booking.id, "1");
        assert_eq!(booking.status.as_deref(), Some("pending"));
        assert_eq!(booking.number_of_people, Some(3));

        let stored = backend.db.get_all_bookings().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].trip_id.as_deref(), Some("mara-explorer"));
    }

    #[tokio::test]
    async fn test_booking_without_email_is_not_stored() {
        let backend = backend();
        let err = backend
            .submit_booking(NewBooking {
                client_name: "Baraka".into(),
                ..NewBooking::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::MissingField("email"))
        ));
        assert!(backend.db.get_all_bookings().unwrap().is_empty());
    }
}
