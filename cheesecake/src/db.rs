use anyhow::Result;
use native_db::*;
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::id_generator::IdGenerator;
use crate::models::*;

static MODELS: Lazy<Models> = Lazy::new(|| {
    let mut models = Models::new();
    models
        .define::<CommentRecord>()
        .expect("CommentRecord model definition");
    models
        .define::<GalleryRecord>()
        .expect("GalleryRecord model definition");
    models
        .define::<BookingRecord>()
        .expect("BookingRecord model definition");
    models
});

pub struct Database {
    db: native_db::Database<'static>,
    comment_ids: Arc<IdGenerator>,
    gallery_ids: Arc<IdGenerator>,
    booking_ids: Arc<IdGenerator>,
}

impl Database {
    pub fn new(path: &str) -> Result<Self> {
        // Open or create database using static MODELS
        let db = Builder::new().create(&MODELS, path)?;
        Self::with_db(db)
    }

    pub fn in_memory() -> Result<Self> {
        let db = Builder::new().create_in_memory(&MODELS)?;
        Self::with_db(db)
    }

    fn with_db(db: native_db::Database<'static>) -> Result<Self> {
        let mut database = Self {
            db,
            comment_ids: Arc::new(IdGenerator::new(1)),
            gallery_ids: Arc::new(IdGenerator::new(1)),
            booking_ids: Arc::new(IdGenerator::new(1)),
        };

        // Seed ID generators past anything already persisted
        database.comment_ids = Arc::new(IdGenerator::after(
            database.get_all_comments()?.into_iter().map(|c| c.id),
        ));
        database.gallery_ids = Arc::new(IdGenerator::after(
            database.get_all_gallery_items()?.into_iter().map(|g| g.id),
        ));
        database.booking_ids = Arc::new(IdGenerator::after(
            database.get_all_bookings()?.into_iter().map(|b| b.id),
        ));

        Ok(database)
    }

    // Comment operations
    pub fn insert_comment(&self, mut comment: CommentRecord) -> Result<CommentRecord> {
        if comment.id == 0 {
            comment.id = self.comment_ids.next();
        }
        let rw = self.db.rw_transaction()?;
        rw.insert(comment.clone())?;
        rw.commit()?;
        Ok(comment)
    }

    pub fn get_comment(&self, id: u64) -> Result<Option<CommentRecord>> {
        let r = self.db.r_transaction()?;
        Ok(r.get().primary(id)?)
    }

    pub fn get_all_comments(&self) -> Result<Vec<CommentRecord>> {
        let r = self.db.r_transaction()?;
        let all: Vec<CommentRecord> = r.scan().primary()?.all()?.collect::<Result<Vec<_>, _>>()?;
        Ok(all)
    }

    /// Newest first, at most `limit`.
    pub fn get_recent_comments(&self, limit: usize) -> Result<Vec<CommentRecord>> {
        let mut comments = self.get_all_comments()?;
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        comments.truncate(limit);
        Ok(comments)
    }

    // Gallery operations
    pub fn insert_gallery_item(&self, mut item: GalleryRecord) -> Result<GalleryRecord> {
        if item.id == 0 {
            item.id = self.gallery_ids.next();
        }
        let rw = self.db.rw_transaction()?;
        rw.insert(item.clone())?;
        rw.commit()?;
        Ok(item)
    }

    pub fn get_all_gallery_items(&self) -> Result<Vec<GalleryRecord>> {
        let r = self.db.r_transaction()?;
        let all: Vec<GalleryRecord> = r.scan().primary()?.all()?.collect::<Result<Vec<_>, _>>()?;
        Ok(all)
    }

    // Booking operations
    pub fn insert_booking(&self, mut booking: BookingRecord) -> Result<BookingRecord> {
        if booking.id == 0 {
            booking.id = self.booking_ids.next();
        }
        let rw = self.db.rw_transaction()?;
        rw.insert(booking.clone())?;
        rw.commit()?;
        Ok(booking)
    }

    pub fn get_all_bookings(&self) -> Result<Vec<BookingRecord>> {
        let r = self.db.r_transaction()?;
        let all: Vec<BookingRecord> = r.scan().primary()?.all()?.collect::<Result<Vec<_>, _>>()?;
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn comment(description: &str, minutes_ago: i64) -> CommentRecord {
        CommentRecord {
            id: 0,
            client_name: "Anonymous".to_string(),
            description: description.to_string(),
            rating: Some(5),
            email: None,
            phone: None,
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn test_insert_assigns_ids() {
        let db = Database::in_memory().unwrap();
        let first = db.insert_comment(comment("first", 0)).unwrap();
        let second = db.insert_comment(comment("second", 0)).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(
            db.get_comment(2).unwrap().map(|c| c.description),
            Some("second".to_string())
        );
    }

    #[test]
    fn test_recent_comments_newest_first() {
        let db = Database::in_memory().unwrap();
        db.insert_comment(comment("old", 30)).unwrap();
        db.insert_comment(comment("newest", 1)).unwrap();
        db.insert_comment(comment("middle", 10)).unwrap();

        let recent: Vec<String> = db
            .get_recent_comments(2)
            .unwrap()
            .into_iter()
            .map(|c| c.description)
            .collect();
        assert_eq!(recent, vec!["newest", "middle"]);
    }

    #[test]
    fn test_reopen_continues_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cheesecake.db");
        let path = path.to_str().unwrap();

        {
            let db = Database::new(path).unwrap();
            db.insert_comment(comment("one", 0)).unwrap();
            db.insert_comment(comment("two", 0)).unwrap();
        }

        let db = Database::new(path).unwrap();
        let third = db.insert_comment(comment("three", 0)).unwrap();
        assert_eq!(third.id, 3);
        assert_eq!(db.get_all_comments().unwrap().len(), 3);
    }
}
