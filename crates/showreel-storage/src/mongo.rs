use async_trait::async_trait;
use futures::TryStreamExt;
use jiff::Timestamp;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, DateTime};
use mongodb::error::ErrorKind;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use showreel_core::repository::{Result, VideoRepository};
use showreel_core::{StorageError, Video, VideoDraft, VideoId};

const COLLECTION_NAME: &str = "videos";
const DEFAULT_DATABASE: &str = "showreel";

/// BSON document shape of a stored video.
///
/// Field names are camelCase on the wire, matching the public API.
#[derive(Debug, Serialize, Deserialize)]
struct VideoDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    description: String,
    #[serde(rename = "videoUrl")]
    video_url: String,
    #[serde(rename = "createdAt")]
    created_at: DateTime,
}

impl VideoDocument {
    fn from_draft(draft: VideoDraft) -> Self {
        Self {
            id: ObjectId::new(),
            title: draft.title().to_owned(),
            description: draft.description().to_owned(),
            video_url: draft.video_url().to_owned(),
            created_at: DateTime::now(),
        }
    }

    fn into_video(self) -> Result<Video> {
        let created_at =
            Timestamp::from_millisecond(self.created_at.timestamp_millis()).map_err(|e| {
                StorageError::InvalidData(format!(
                    "invalid createdAt timestamp '{}': {e}",
                    self.created_at
                ))
            })?;

        Ok(Video {
            id: VideoId::new(self.id.to_hex()),
            title: self.title,
            description: self.description,
            video_url: self.video_url,
            created_at,
        })
    }
}

/// MongoDB implementation of the repository contract.
///
/// One `videos` collection holds every record. Deletes are hard; reads
/// return whatever the collection holds with no filtering. The wrapped
/// client pools connections internally, so a single repository value is
/// shared by all requests for the process lifetime.
#[derive(Debug, Clone)]
pub struct MongoRepository {
    collection: Collection<VideoDocument>,
}

impl MongoRepository {
    /// Creates a repository by connecting a new MongoDB client and
    /// verifying the deployment is reachable.
    ///
    /// The database is taken from the connection string path, falling
    /// back to `showreel` when the URI names none. Fails with
    /// `Unavailable` when no server answers within the driver's server
    /// selection timeout.
    pub async fn connect(uri: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await.map_err(map_mongo_error)?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

        // with_uri_str only parses the URI; a ping forces the first
        // round trip so an unreachable server fails here, not on the
        // first request.
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(map_mongo_error)?;

        Ok(Self {
            collection: database.collection(COLLECTION_NAME),
        })
    }
}

/// Parses a [`VideoId`] into the store's native ObjectId form.
///
/// Malformed ids yield `None`, which callers surface as not-found.
fn parse_object_id(id: &VideoId) -> Option<ObjectId> {
    ObjectId::parse_str(id.as_str()).ok()
}

fn map_mongo_error(err: mongodb::error::Error) -> StorageError {
    let message = err.to_string();

    match &*err.kind {
        ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
            StorageError::Timeout(message)
        }
        ErrorKind::Io(_)
        | ErrorKind::ServerSelection { .. }
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::Authentication { .. } => StorageError::Unavailable(message),
        ErrorKind::BsonSerialization(_)
        | ErrorKind::BsonDeserialization(_)
        | ErrorKind::InvalidResponse { .. } => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl VideoRepository for MongoRepository {
    async fn create(&self, draft: VideoDraft) -> Result<Video> {
        let document = VideoDocument::from_draft(draft);

        self.collection
            .insert_one(&document)
            .await
            .map_err(map_mongo_error)?;

        document.into_video()
    }

    async fn list_all(&self) -> Result<Vec<Video>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(map_mongo_error)?;

        let documents: Vec<VideoDocument> =
            cursor.try_collect().await.map_err(map_mongo_error)?;

        documents
            .into_iter()
            .map(VideoDocument::into_video)
            .collect()
    }

    async fn get_by_id(&self, id: &VideoId) -> Result<Option<Video>> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };

        let document = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(map_mongo_error)?;

        document.map(VideoDocument::into_video).transpose()
    }

    async fn update_by_id(&self, id: &VideoId, draft: VideoDraft) -> Result<Option<Video>> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };

        let update = doc! {
            "$set": {
                "title": draft.title(),
                "description": draft.description(),
                "videoUrl": draft.video_url(),
            }
        };

        let document = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_mongo_error)?;

        document.map(VideoDocument::into_video).transpose()
    }

    async fn delete_by_id(&self, id: &VideoId) -> Result<Option<Video>> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };

        let document = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(map_mongo_error)?;

        document.map(VideoDocument::into_video).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_fails_when_server_unreachable() {
        // Port 9 (discard) refuses MongoDB connections; the short server
        // selection timeout keeps the test fast.
        let err = MongoRepository::connect(
            "mongodb://127.0.0.1:9/showreel?serverSelectionTimeoutMS=200&connectTimeoutMS=200",
        )
        .await
        .unwrap_err();

        assert!(matches!(err, StorageError::Unavailable(_)));
    }
}
