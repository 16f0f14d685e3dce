use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Description must not exceed {limit} words (got {actual})")]
    TooManyWords { limit: usize, actual: usize },

    #[error("Maximum {limit} images allowed (got {actual})")]
    TooManyImages { limit: usize, actual: usize },

    #[error("Rating must be between 1 and 5 (got {0})")]
    InvalidRating(u8),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("Number of travellers must be between 1 and {limit} (got {actual})")]
    InvalidPartySize { limit: u32, actual: u32 },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Running in static mode: {0}")]
    StaticMode(&'static str),

    #[error("{0} is not supported by this backend")]
    Unsupported(&'static str),

    #[error("Backend responded with status {status}")]
    Upstream { status: u16 },

    #[error("Database error: {0}")]
    Database(String),

    #[cfg(feature = "api-server")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        StoreError::Database(format!("{err:#}"))
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize package: {0}")]
    Json(#[from] serde_json::Error),
}
