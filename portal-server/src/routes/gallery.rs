//! Photo gallery proxy endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde_json::Value;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/gallery/albums", get(albums))
        .route("/api/gallery/albums/{id}/photos", get(album_photos))
}

/// GET /api/gallery/albums - list albums (photos are fetched lazily)
async fn albums(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let body = state.upstream.get("/gallery/albums", &[]).await?;
    Ok(Json(body))
}

/// GET /api/gallery/albums/:id/photos - photos for one album
async fn album_photos(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let body = state
        .upstream
        .get(&format!("/gallery/albums/{}/photos", id), &[])
        .await?;
    Ok(Json(body))
}
