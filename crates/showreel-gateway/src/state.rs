use std::sync::Arc;

use showreel_core::VideoRepository;

/// Shared application state, cloned into every handler.
///
/// The repository handle is the only process-wide state; it is built once
/// at startup and lives until process exit.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn VideoRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn VideoRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &dyn VideoRepository {
        self.repository.as_ref()
    }
}
