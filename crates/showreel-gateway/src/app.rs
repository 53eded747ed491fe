use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_video_handler, delete_video_handler, get_video_handler, health_handler, index_handler,
    list_videos_handler, update_video_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .route("/health", get(health_handler))
            .nest(
                "/api/videos",
                Router::new()
                    .route("/", get(list_videos_handler).post(create_video_handler))
                    .route(
                        "/{id}",
                        get(get_video_handler)
                            .put(update_video_handler)
                            .delete(delete_video_handler),
                    ),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
