//! HTTP gateway for the showreel video catalog.
//!
//! Translates the JSON API into repository calls and maps every outcome,
//! success or failure, onto the uniform response envelope.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
