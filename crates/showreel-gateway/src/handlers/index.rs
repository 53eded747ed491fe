use axum::Json;
use serde_json::{json, Value};

/// Static listing of the available endpoints, served at the root.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Video Upload API",
        "endpoints": {
            "GET /api/videos": "Get all videos",
            "GET /api/videos/:id": "Get single video",
            "POST /api/videos": "Add new video",
            "PUT /api/videos/:id": "Update video",
            "DELETE /api/videos/:id": "Delete video",
        }
    }))
}
