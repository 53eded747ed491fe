use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use showreel_core::error::CoreError;
use showreel_core::{Video, VideoDraft};

/// Message returned when a request body lacks a required field.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and videoUrl are required fields";

/// Inbound body for the create and update routes.
///
/// Every field is optional at the parsing stage so that a missing
/// `title`/`videoUrl` produces the envelope-shaped 400 below instead of a
/// deserialization rejection. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct VideoPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "videoUrl")]
    pub video_url: Option<String>,
}

impl VideoPayload {
    /// Validates the payload into a store-ready draft.
    pub fn into_draft(self) -> Result<VideoDraft, CoreError> {
        VideoDraft::new(
            self.title.unwrap_or_default(),
            self.description,
            self.video_url.unwrap_or_default(),
        )
    }
}

/// Wire shape of a video record, camelCase with a Mongo-style `_id`.
#[derive(Debug, Serialize)]
pub struct VideoData {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "videoUrl")]
    pub video_url: String,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
}

impl From<Video> for VideoData {
    fn from(video: Video) -> Self {
        Self {
            id: video.id.as_str().to_owned(),
            title: video.title,
            description: video.description,
            video_url: video.video_url,
            created_at: video.created_at,
        }
    }
}

/// The uniform response envelope.
///
/// Absent fields are omitted from the serialized JSON, so a success
/// response carries no `error` key and a failure carries no `data`.
#[derive(Debug, Serialize)]
pub struct Envelope<T = serde_json::Value> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// A success envelope carrying only data.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data: Some(data),
            error: None,
        }
    }

    /// A success envelope with a human-readable message and data.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::data(data)
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// A success envelope for listings, carrying the item count.
    pub fn list(items: Vec<T>) -> Self {
        Self {
            count: Some(items.len()),
            ..Self::data(items)
        }
    }
}

impl Envelope<serde_json::Value> {
    /// A failure envelope with a message only.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            count: None,
            data: None,
            error: None,
        }
    }

    /// A failure envelope carrying an error detail alongside the message.
    pub fn failure_with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::failure(message)
        }
    }
}
