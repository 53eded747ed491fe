use async_trait::async_trait;
use dashmap::DashMap;
use jiff::Timestamp;
use mongodb::bson::oid::ObjectId;
use showreel_core::repository::{Result, VideoRepository};
use showreel_core::{Video, VideoDraft, VideoId};
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory storage entry for a video record.
///
/// `seq` is a monotonically increasing insertion number used to break
/// ties when two records share the same creation instant, keeping the
/// newest-first listing order stable.
#[derive(Debug, Clone)]
struct Entry {
    video: Video,
    seq: u64,
}

/// In-memory implementation of the repository contract using DashMap.
///
/// Identifiers follow the same hex ObjectId scheme as the MongoDB
/// backend, so the two stores are interchangeable behind the trait.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, Entry>,
    next_seq: AtomicU64,
}

impl InMemoryRepository {
    /// Creates a new, empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoRepository for InMemoryRepository {
    async fn create(&self, draft: VideoDraft) -> Result<Video> {
        let id = VideoId::new(ObjectId::new().to_hex());
        let video = draft.into_video(id.clone(), Timestamp::now());
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);

        self.storage.insert(
            id.as_str().to_owned(),
            Entry {
                video: video.clone(),
                seq,
            },
        );

        Ok(video)
    }

    async fn list_all(&self) -> Result<Vec<Video>> {
        let mut entries: Vec<Entry> = self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        entries.sort_by(|a, b| {
            b.video
                .created_at
                .cmp(&a.video.created_at)
                .then(b.seq.cmp(&a.seq))
        });

        Ok(entries.into_iter().map(|entry| entry.video).collect())
    }

    async fn get_by_id(&self, id: &VideoId) -> Result<Option<Video>> {
        Ok(self
            .storage
            .get(id.as_str())
            .map(|entry| entry.video.clone()))
    }

    async fn update_by_id(&self, id: &VideoId, draft: VideoDraft) -> Result<Option<Video>> {
        let Some(mut entry) = self.storage.get_mut(id.as_str()) else {
            return Ok(None);
        };

        let created_at = entry.video.created_at;
        entry.video = draft.into_video(entry.video.id.clone(), created_at);

        Ok(Some(entry.video.clone()))
    }

    async fn delete_by_id(&self, id: &VideoId) -> Result<Option<Video>> {
        Ok(self
            .storage
            .remove(id.as_str())
            .map(|(_, entry)| entry.video))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, url: &str) -> VideoDraft {
        VideoDraft::new(title, None, url).unwrap()
    }

    #[tokio::test]
    async fn create_and_get() {
        let repo = InMemoryRepository::new();

        let created = repo
            .create(draft("Demo", "http://x/video.mp4"))
            .await
            .unwrap();
        assert!(!created.id.as_str().is_empty());

        let fetched = repo.get_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_assigns_unique_ids() {
        let repo = InMemoryRepository::new();

        let a = repo.create(draft("A", "http://x/a.mp4")).await.unwrap();
        let b = repo.create(draft("B", "http://x/b.mp4")).await.unwrap();

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = InMemoryRepository::new();

        let result = repo.get_by_id(&VideoId::new("nope")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn list_all_newest_first() {
        let repo = InMemoryRepository::new();

        let a = repo.create(draft("A", "http://x/a.mp4")).await.unwrap();
        let b = repo.create(draft("B", "http://x/b.mp4")).await.unwrap();
        let c = repo.create(draft("C", "http://x/c.mp4")).await.unwrap();

        let listed = repo.list_all().await.unwrap();
        let ids: Vec<_> = listed.into_iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![c.id, b.id, a.id]);
    }

    #[tokio::test]
    async fn list_all_on_empty_store() {
        let repo = InMemoryRepository::new();

        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_created_at() {
        let repo = InMemoryRepository::new();

        let created = repo
            .create(draft("Old title", "http://x/old.mp4"))
            .await
            .unwrap();

        let updated = repo
            .update_by_id(
                &created.id,
                VideoDraft::new("New title", Some("now described".to_string()), "http://x/new.mp4")
                    .unwrap(),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "New title");
        assert_eq!(updated.description, "now described");
        assert_eq!(updated.video_url, "http://x/new.mp4");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_nonexistent() {
        let repo = InMemoryRepository::new();

        let result = repo
            .update_by_id(&VideoId::new("nope"), draft("X", "http://x/x.mp4"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_returns_prior_value() {
        let repo = InMemoryRepository::new();

        let created = repo
            .create(draft("Demo", "http://x/video.mp4"))
            .await
            .unwrap();

        let deleted = repo.delete_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(deleted, created);

        assert!(repo.get_by_id(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_twice_returns_none() {
        let repo = InMemoryRepository::new();

        let created = repo
            .create(draft("Demo", "http://x/video.mp4"))
            .await
            .unwrap();

        assert!(repo.delete_by_id(&created.id).await.unwrap().is_some());
        assert!(repo.delete_by_id(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn concurrent_creates() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create(draft(&format!("video-{i}"), "http://x/video.mp4"))
                    .await
                    .unwrap()
            }));
        }

        for handle in handles {
            let created = handle.await.unwrap();
            assert!(repo.get_by_id(&created.id).await.unwrap().is_some());
        }

        assert_eq!(repo.list_all().await.unwrap().len(), 10);
    }
}
