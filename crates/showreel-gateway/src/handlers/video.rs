use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use showreel_core::VideoId;

use crate::error::{ApiError, Result};
use crate::model::{Envelope, VideoData, VideoPayload, REQUIRED_FIELDS_MESSAGE};
use crate::state::AppState;

/// `POST /api/videos` — validate the body and persist a new record.
///
/// Validation failures never reach the store.
pub async fn create_video_handler(
    State(state): State<AppState>,
    Json(payload): Json<VideoPayload>,
) -> Result<(StatusCode, Json<Envelope<VideoData>>)> {
    let draft = payload
        .into_draft()
        .map_err(|_| ApiError::Validation(REQUIRED_FIELDS_MESSAGE.to_owned()))?;

    let video = state
        .repository()
        .create(draft)
        .await
        .map_err(ApiError::store("Error adding video"))?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(
            "Video added successfully!",
            video.into(),
        )),
    ))
}

/// `GET /api/videos` — every record, most recent first, with a count.
pub async fn list_videos_handler(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<VideoData>>>> {
    let videos = state
        .repository()
        .list_all()
        .await
        .map_err(ApiError::store("Error fetching videos"))?;

    let data = videos.into_iter().map(VideoData::from).collect();
    Ok(Json(Envelope::list(data)))
}

/// `GET /api/videos/{id}`
pub async fn get_video_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Envelope<VideoData>>> {
    let video = state
        .repository()
        .get_by_id(&VideoId::new(id))
        .await
        .map_err(ApiError::store("Error fetching video"))?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(Envelope::data(video.into())))
}

/// `PUT /api/videos/{id}` — full replace of the three mutable fields.
///
/// `id` and `createdAt` are left untouched by the store.
pub async fn update_video_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<VideoPayload>,
) -> Result<Json<Envelope<VideoData>>> {
    let draft = payload
        .into_draft()
        .map_err(|_| ApiError::Validation(REQUIRED_FIELDS_MESSAGE.to_owned()))?;

    let video = state
        .repository()
        .update_by_id(&VideoId::new(id), draft)
        .await
        .map_err(ApiError::store("Error updating video"))?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(Envelope::with_message(
        "Video updated successfully!",
        video.into(),
    )))
}

/// `DELETE /api/videos/{id}` — responds with the record as it existed
/// immediately before deletion.
pub async fn delete_video_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Envelope<VideoData>>> {
    let video = state
        .repository()
        .delete_by_id(&VideoId::new(id))
        .await
        .map_err(ApiError::store("Error deleting video"))?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(Envelope::with_message(
        "Video deleted successfully!",
        video.into(),
    )))
}
