use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use super::Backend;
use crate::comments::{Comment, GalleryItem, NewComment, NewGalleryItem};
use crate::content::{Booking, NewBooking};
use crate::error::StoreError;

/// Read-only backend over the JSON files in the data directory.
///
/// Submissions are validated (so visitors still see word-limit errors) and
/// then refused: persisting means editing the data files in the repository.
pub struct StaticBackend {
    data_dir: PathBuf,
}

impl StaticBackend {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    async fn read_list<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        read_json_list(&self.data_dir.join(file)).await
    }
}

/// Reads a JSON array; a missing file is an empty list.
pub async fn read_json_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("{} not found, treating as empty", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

#[async_trait]
impl Backend for StaticBackend {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn submit_comment(&self, input: NewComment) -> Result<Comment, StoreError> {
        input.validated()?;
        Err(StoreError::StaticMode(
            "comments are not persisted; add them to data/comments.json",
        ))
    }

    async fn list_comments(&self, limit: usize) -> Result<Vec<Comment>, StoreError> {
        let mut comments: Vec<Comment> = self.read_list("comments.json").await?;
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        comments.truncate(limit);
        Ok(comments)
    }

    async fn submit_gallery_item(&self, input: NewGalleryItem) -> Result<GalleryItem, StoreError> {
        input.validated()?;
        Err(StoreError::StaticMode(
            "gallery uploads are disabled; add items to data/gallery.json",
        ))
    }

    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, StoreError> {
        self.read_list("gallery.json").await
    }

    async fn submit_booking(&self, input: NewBooking) -> Result<Booking, StoreError> {
        input.validated()?;
        Err(StoreError::StaticMode(
            "online booking is unavailable; contact us by email or WhatsApp",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[tokio::test]
    async fn test_missing_files_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = StaticBackend::new(dir.path());

        assert!(backend.list_comments(10).await.unwrap().is_empty());
        assert!(backend.list_gallery().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_lists_newest_first_with_limit() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("comments.json"),
            r#"[
                {"id": "1", "clientName": "A", "description": "old", "createdAt": "2026-01-01T00:00:00Z"},
                {"id": "2", "clientName": "B", "description": "new", "rating": 4, "createdAt": "2026-09-01T00:00:00Z"},
                {"id": "3", "clientName": "C", "description": "mid", "createdAt": "2026-05-01T00:00:00Z"}
            ]"#,
        )
        .unwrap();

        let backend = StaticBackend::new(dir.path());
        let descriptions: Vec<String> = backend
            .list_comments(2)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.description)
            .collect();
        assert_eq!(descriptions, vec!["new", "mid"]);
    }

    #[tokio::test]
    async fn test_writes_refused_after_validation() {
        let dir = tempfile::tempdir().unwrap();
        let backend = StaticBackend::new(dir.path());

        let ok = backend
            .submit_comment(NewComment {
                description: "Loved it".into(),
                ..NewComment::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(ok, StoreError::StaticMode(_)));

        let invalid = backend
            .submit_comment(NewComment::default())
            .await
            .unwrap_err();
        assert!(matches!(
            invalid,
            StoreError::Validation(ValidationError::MissingField("description"))
        ));
    }

    #[tokio::test]
    async fn test_bookings_refused_after_validation() {
        let dir = tempfile::tempdir().unwrap();
        let backend = StaticBackend::new(dir.path());

        let refused = backend
            .submit_booking(NewBooking {
                client_name: "Amina".into(),
                email: "amina@example.com".into(),
                ..NewBooking::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(refused, StoreError::StaticMode(_)));

        let invalid = backend
            .submit_booking(NewBooking::default())
            .await
            .unwrap_err();
        assert!(matches!(
            invalid,
            StoreError::Validation(ValidationError::MissingField("clientName"))
        ));
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("gallery.json"), "{not json").unwrap();

        let backend = StaticBackend::new(dir.path());
        assert!(matches!(
            backend.list_gallery().await.unwrap_err(),
            StoreError::Json(_)
        ));
    }
}
