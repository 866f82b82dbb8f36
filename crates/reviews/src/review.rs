use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::stars::render_stars;

/// Photo or video attached to a review.
///
/// Deserializes from a bare path (`"images/img2.jpg"`, classified by
/// extension) or from the tagged form it serializes to
/// (`{"video": "blob:..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "MediaRepr")]
pub enum MediaRef {
    Image(String),
    Video(String),
}

impl MediaRef {
    /// Classify a stored path: `.mp4` files are videos, everything else images.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.to_ascii_lowercase().ends_with(".mp4") {
            Self::Video(path)
        } else {
            Self::Image(path)
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Self::Image(src) | Self::Video(src) => src,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video(_))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MediaRepr {
    Path(String),
    Tagged(TaggedMedia),
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum TaggedMedia {
    Image(String),
    Video(String),
}

impl From<MediaRepr> for MediaRef {
    fn from(repr: MediaRepr) -> Self {
        match repr {
            MediaRepr::Path(path) => MediaRef::from_path(path),
            MediaRepr::Tagged(TaggedMedia::Image(src)) => MediaRef::Image(src),
            MediaRepr::Tagged(TaggedMedia::Video(src)) => MediaRef::Video(src),
        }
    }
}

/// A customer review.
///
/// Serialized with the field names the page scripts use (`name`, `date`,
/// `rating`, `content`, `media`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "name")]
    pub author: String,
    pub date: NaiveDate,
    pub rating: u8,
    pub content: String,
    #[serde(default)]
    pub media: Vec<MediaRef>,
}

impl Review {
    pub fn stars(&self) -> String {
        render_stars(self.rating)
    }
}
