//! Visitor comments and gallery submissions, and the rules both share.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const MAX_DESCRIPTION_WORDS: usize = 50;
pub const MAX_GALLERY_IMAGES: usize = 3;
pub const ANONYMOUS: &str = "Anonymous";
pub const DEFAULT_COMMENTS_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub client_name: String,
    pub description: String,
    #[serde(default)]
    pub rating: Option<u8>,
    pub created_at: DateTime<Utc>,
}

/// Comment submission. Accepts both field spellings the site's backends used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    #[serde(default, alias = "name")]
    pub client_name: String,
    #[serde(default, alias = "comment")]
    pub description: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub client_name: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGalleryItem {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub images: Vec<String>,
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Checks a free-text description against the 50 word limit.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    let words = word_count(description);
    if words == 0 {
        return Err(ValidationError::MissingField("description"));
    }
    if words > MAX_DESCRIPTION_WORDS {
        return Err(ValidationError::TooManyWords {
            limit: MAX_DESCRIPTION_WORDS,
            actual: words,
        });
    }
    Ok(())
}

impl NewComment {
    /// Validates and normalises the submission: trims text, names blank
    /// submitters `Anonymous` and drops empty contact fields.
    pub fn validated(self) -> Result<Self, ValidationError> {
        validate_description(&self.description)?;
        if let Some(rating) = self.rating {
            if !(1..=5).contains(&rating) {
                return Err(ValidationError::InvalidRating(rating));
            }
        }

        let name = self.client_name.trim();
        Ok(Self {
            client_name: if name.is_empty() {
                ANONYMOUS.to_string()
            } else {
                name.to_string()
            },
            description: self.description.trim().to_string(),
            rating: self.rating,
            email: non_blank(self.email),
            phone: non_blank(self.phone),
        })
    }
}

impl NewGalleryItem {
    pub fn validated(self) -> Result<Self, ValidationError> {
        if self.client_name.trim().is_empty() {
            return Err(ValidationError::MissingField("clientName"));
        }
        if self.location.trim().is_empty() {
            return Err(ValidationError::MissingField("location"));
        }
        validate_description(&self.description)?;
        if self.images.len() > MAX_GALLERY_IMAGES {
            return Err(ValidationError::TooManyImages {
                limit: MAX_GALLERY_IMAGES,
                actual: self.images.len(),
            });
        }

        Ok(Self {
            client_name: self.client_name.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            images: self.images,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
