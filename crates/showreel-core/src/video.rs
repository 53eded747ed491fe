use crate::error::CoreError;
use crate::id::VideoId;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A persisted video record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// Store-assigned identifier, immutable for the record's lifetime.
    pub id: VideoId,
    /// Display title, never empty.
    pub title: String,
    /// Free-text description, may be empty.
    pub description: String,
    /// Location of the video content, never empty.
    pub video_url: String,
    /// Creation instant, set once by the store and never updated.
    pub created_at: Timestamp,
}

/// The writable fields of a video, validated before they reach the store.
///
/// Both the create and the update operation write exactly these three
/// fields; `id` and `created_at` are owned by the store. Construction
/// trims surrounding whitespace and rejects an empty `title` or
/// `video_url`, so a draft in hand is always safe to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoDraft {
    title: String,
    description: String,
    video_url: String,
}

impl VideoDraft {
    /// Creates a draft after trimming and validating the inputs.
    ///
    /// A missing description defaults to the empty string.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        video_url: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(CoreError::MissingField("title"));
        }

        let video_url = video_url.into().trim().to_owned();
        if video_url.is_empty() {
            return Err(CoreError::MissingField("videoUrl"));
        }

        let description = description
            .map(|d| d.trim().to_owned())
            .unwrap_or_default();

        Ok(Self {
            title,
            description,
            video_url,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    /// Promotes the draft to a full record using store-assigned metadata.
    pub fn into_video(self, id: VideoId, created_at: Timestamp) -> Video {
        Video {
            id,
            title: self.title,
            description: self.description,
            video_url: self.video_url,
            created_at,
        }
    }
}
