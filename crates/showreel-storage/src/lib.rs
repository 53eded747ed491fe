//! Storage backends for the showreel video catalog.
//!
//! Two implementations of the [`VideoRepository`] contract are provided:
//! the MongoDB-backed store used in production and an in-memory store for
//! tests and local development.

pub mod memory;
pub mod mongo;

pub use memory::InMemoryRepository;
pub use mongo::MongoRepository;
pub use showreel_core::repository::{Result, VideoRepository};
pub use showreel_core::StorageError;
