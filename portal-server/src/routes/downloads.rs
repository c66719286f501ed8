//! Download file and category proxy endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde_json::Value;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/downloads/categories", get(categories))
        .route("/api/downloads/files", get(files))
        .route("/api/downloads/files/{id}/download", post(track_download))
}

/// GET /api/downloads/categories - list file categories
async fn categories(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let body = state.upstream.get("/downloads/categories", &[]).await?;
    Ok(Json(body))
}

/// GET /api/downloads/files - list downloadable files
async fn files(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let body = state.upstream.get("/downloads/files", &[]).await?;
    Ok(Json(body))
}

/// POST /api/downloads/files/:id/download - record a download.
/// The body is opaque; the portal only cares that the call succeeded.
async fn track_download(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let body = state
        .upstream
        .post(&format!("/downloads/files/{}/download", id))
        .await?;
    Ok(Json(body))
}
