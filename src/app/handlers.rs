use crate::app::AppState;
use crate::domain::model::Title;
use crate::utils::error::TitlesError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub const QUEUE_PROBE_SEGMENT: &str = "fail-on-sqs-consume";
pub const BACKUP_PROBE_SEGMENT: &str = "fail-on-s3-backup-bucket-access";

/// Serves both POST and PUT; both are a full upsert.
pub async fn put_title_handler(
    State(state): State<AppState>,
    Json(title): Json<Title>,
) -> Result<StatusCode, TitlesError> {
    state.service.put_title(title).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_title_handler(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<StatusCode, TitlesError> {
    state.service.delete_title(&isbn).await?;
    Ok(StatusCode::OK)
}

/// `DELETE /api/titles/fail-on-sqs-consume` deletes the title with that isbn.
pub async fn delete_queue_probe_segment_handler(
    State(state): State<AppState>,
) -> Result<StatusCode, TitlesError> {
    state.service.delete_title(QUEUE_PROBE_SEGMENT).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_backup_probe_segment_handler(
    State(state): State<AppState>,
) -> Result<StatusCode, TitlesError> {
    state.service.delete_title(BACKUP_PROBE_SEGMENT).await?;
    Ok(StatusCode::OK)
}

pub async fn get_title_handler(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Response, TitlesError> {
    match state.service.get_title(&isbn).await? {
        Some(title) => Ok(Json(title).into_response()),
        None => {
            tracing::debug!(isbn = %isbn, "title not found");
            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}

pub async fn queue_probe_handler(
    State(state): State<AppState>,
) -> Result<StatusCode, TitlesError> {
    state.service.check_queue().await?;
    Ok(StatusCode::OK)
}

pub async fn backup_bucket_probe_handler(
    State(state): State<AppState>,
) -> Result<StatusCode, TitlesError> {
    state.service.check_backup_bucket().await?;
    Ok(StatusCode::OK)
}
