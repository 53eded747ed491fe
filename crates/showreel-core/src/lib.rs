//! Core types and traits for the showreel video catalog service.
//!
//! This crate provides the domain model and the repository contract
//! shared by the storage backends and the HTTP gateway.

pub mod error;
pub mod id;
pub mod repository;
pub mod video;

pub use error::{CoreError, StorageError};
pub use id::VideoId;
pub use repository::VideoRepository;
pub use video::{Video, VideoDraft};
