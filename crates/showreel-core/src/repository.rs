use crate::error::StorageError;
use crate::id::VideoId;
use crate::video::{Video, VideoDraft};
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// The record store contract for video documents.
///
/// Every operation is a single round trip to the backing store. Lookup
/// operations return `None` both when no record has the given id and when
/// the id is malformed for the store's identifier scheme; only genuine
/// store failures surface as errors, and none are retried.
#[async_trait]
pub trait VideoRepository: Send + Sync + 'static {
    /// Persists a new video, assigning its `id` and `created_at`.
    async fn create(&self, draft: VideoDraft) -> Result<Video>;

    /// Returns every video, most recently created first.
    async fn list_all(&self) -> Result<Vec<Video>>;

    /// Retrieves a video by id. Returns `None` if absent.
    async fn get_by_id(&self, id: &VideoId) -> Result<Option<Video>>;

    /// Replaces the three mutable fields of a video, leaving `id` and
    /// `created_at` untouched. Returns the updated record, or `None` if
    /// no record has the given id.
    async fn update_by_id(&self, id: &VideoId, draft: VideoDraft) -> Result<Option<Video>>;

    /// Removes a video by id, returning the value that existed
    /// immediately before deletion. Returns `None` if absent.
    async fn delete_by_id(&self, id: &VideoId) -> Result<Option<Video>>;
}
