//! Login endpoint, answered locally by the core authenticator.
//!
//! A successful login unlocks the dashboard for the current viewer only;
//! there is no token, expiry or session (a stated non-goal of the portal).

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::Serialize;

use portal_core::auth::{self, Credentials};

use crate::routes::ErrorResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/auth/login", post(login))
}

#[derive(Serialize)]
struct LoginResponse {
    authenticated: bool,
}

/// POST /api/auth/login - verify the submitted credentials
async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<ErrorResponse>)> {
    if state.auth.verify(&credentials) {
        Ok(Json(LoginResponse {
            authenticated: true,
        }))
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: auth::INVALID_CREDENTIALS.to_string(),
            }),
        ))
    }
}
