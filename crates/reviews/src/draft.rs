//! Review submission: form input, validation and conversion.
//!
//! Validation is pure and separate from the ledger mutation, so the input
//! layer can check a draft before submitting it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use storefront_core::{FieldError, StorefrontError, StorefrontResult};

use crate::review::{MediaRef, Review};
use crate::stars::{MAX_RATING, MIN_RATING};

/// A locally selected file: its MIME type and a page-lifetime reference to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaUpload {
    pub mime_type: String,
    pub reference: String,
}

impl MediaUpload {
    pub fn new(mime_type: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            reference: reference.into(),
        }
    }

    /// Images and videos become media; any other file is dropped.
    pub fn to_media(&self) -> Option<MediaRef> {
        let mime = self.mime_type.trim().to_ascii_lowercase();
        if mime.starts_with("image/") {
            Some(MediaRef::Image(self.reference.clone()))
        } else if mime.starts_with("video/") {
            Some(MediaRef::Video(self.reference.clone()))
        } else {
            None
        }
    }
}

/// Raw review form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub author: String,
    /// `None` when the rating select was left empty.
    pub rating: Option<u8>,
    pub content: String,
    #[serde(default)]
    pub media: Vec<MediaUpload>,
    /// Review date; the submission date when absent.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl ReviewDraft {
    pub fn new(author: impl Into<String>, rating: u8, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            rating: Some(rating),
            content: content.into(),
            media: Vec::new(),
            date: None,
        }
    }

    pub fn with_media(mut self, upload: MediaUpload) -> Self {
        self.media.push(upload);
        self
    }

    pub fn dated(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Check every required field, reporting all failures at once.
    pub fn validate(&self) -> StorefrontResult<()> {
        let mut errors = Vec::new();

        if self.author.trim().is_empty() {
            errors.push(FieldError::new("author", "must not be empty"));
        }
        match self.rating {
            None => errors.push(FieldError::new("rating", "is required")),
            Some(r) if !(MIN_RATING..=MAX_RATING).contains(&r) => errors.push(FieldError::new(
                "rating",
                format!("must be between {MIN_RATING} and {MAX_RATING}, got {r}"),
            )),
            Some(_) => {}
        }
        if self.content.trim().is_empty() {
            errors.push(FieldError::new("content", "must not be empty"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(StorefrontError::validation(errors))
        }
    }

    /// Validate and build the review, dated `today` unless the draft says otherwise.
    pub fn into_review(self, today: NaiveDate) -> StorefrontResult<Review> {
        self.validate()?;

        let media = self.media.iter().filter_map(MediaUpload::to_media).collect();
        Ok(Review {
            author: self.author.trim().to_string(),
            date: self.date.unwrap_or(today),
            // Checked by validate().
            rating: self.rating.unwrap_or(MIN_RATING),
            content: self.content.trim().to_string(),
            media,
        })
    }
}
