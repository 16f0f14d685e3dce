pub mod document;
pub mod static_files;
pub mod supabase;

use async_trait::async_trait;
use std::sync::Arc;

use crate::comments::{Comment, GalleryItem, NewComment, NewGalleryItem};
use crate::config::{BackendKind, Config};
use crate::content::{Booking, NewBooking};
use crate::error::StoreError;

/// Storage behind the comment, gallery and booking endpoints.
///
/// Implementations receive input that has not been validated yet and must
/// reject it with [`StoreError::Validation`] before persisting anything.
#[async_trait]
pub trait Backend: Send + Sync {
    fn name(&self) -> &'static str;

    async fn submit_comment(&self, input: NewComment) -> Result<Comment, StoreError>;

    /// Newest first.
    async fn list_comments(&self, limit: usize) -> Result<Vec<Comment>, StoreError>;

    async fn submit_gallery_item(&self, _input: NewGalleryItem) -> Result<GalleryItem, StoreError> {
        Err(StoreError::Unsupported("gallery"))
    }

    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, StoreError> {
        Err(StoreError::Unsupported("gallery"))
    }

    /// Stores a trip booking with status `pending`.
    async fn submit_booking(&self, input: NewBooking) -> Result<Booking, StoreError>;
}

/// Builds the backend the deployment is configured for.
pub fn from_config(config: &Config) -> anyhow::Result<Arc<dyn Backend>> {
    let backend: Arc<dyn Backend> = match config.backend {
        BackendKind::Static => Arc::new(static_files::StaticBackend::new(&config.data_dir)),
        BackendKind::Document => {
            let db = crate::db::Database::new(&config.database_path)?;
            Arc::new(document::DocumentBackend::new(Arc::new(db)))
        }
        BackendKind::Supabase => {
            let (Some(url), Some(key)) = (&config.supabase_url, &config.supabase_anon_key) else {
                anyhow::bail!("SUPABASE_URL and SUPABASE_ANON_KEY must be set for the supabase backend");
            };
            let client = reqwest::Client::builder().user_agent("cheesecake").build()?;
            Arc::new(supabase::SupabaseBackend::new(client, url.clone(), key.clone()))
        }
    };

    tracing::info!("Using {} backend", backend.name());
    Ok(backend)
}
