use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use snipstash_core::models::{NewSnippet, Snippet, UpsertOutcome};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub file: Snippet,
}

/// Create-or-update keyed by filename. 201 on create, 200 on update.
pub async fn upload(
    State(state): State<AppState>,
    Json(req): Json<UploadRequest>,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let input = NewSnippet::new(
        req.filename.unwrap_or_default(),
        req.content.unwrap_or_default(),
    )
    .map_err(|_| ApiError::BadRequest("Filename and content are required".to_string()))?;

    let outcome = state
        .store
        .upsert(&input, jiff::Timestamp::now())
        .await
        .map_err(|e| ApiError::from_storage("Error storing file", e))?;

    let (status, message, file) = match outcome {
        UpsertOutcome::Created(file) => (StatusCode::CREATED, "File stored successfully", file),
        UpsertOutcome::Updated(file) => (StatusCode::OK, "File updated successfully", file),
    };

    Ok((
        status,
        Json(UploadResponse {
            message: message.to_string(),
            file,
        }),
    ))
}

pub async fn list_files(State(state): State<AppState>) -> Result<Json<Vec<Snippet>>, ApiError> {
    let files = state
        .store
        .list()
        .await
        .map_err(|e| ApiError::from_storage("Error fetching files", e))?;

    Ok(Json(files))
}

pub async fn get_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Snippet>, ApiError> {
    let file = state
        .store
        .get(&id)
        .await
        .map_err(|e| ApiError::from_storage("Error fetching file", e))?;

    Ok(Json(file))
}
