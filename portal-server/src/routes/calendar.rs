//! Calendar proxy endpoint

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use serde_json::Value;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/calendar/events", get(events))
}

/// Query components forwarded to the content API.
///
/// Both fields are required on purpose: a request without a valid year and
/// month is rejected with a 400 here rather than forwarded upstream as a
/// nonsense query.
#[derive(Deserialize)]
struct EventsQuery {
    year: i32,
    month: u32,
}

/// GET /api/calendar/events?year=&month= - events for one month
async fn events(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<Value>, AppError> {
    let body = state
        .upstream
        .get(
            "/calendar/events",
            &[
                ("year", query.year.to_string()),
                ("month", query.month.to_string()),
            ],
        )
        .await?;

    Ok(Json(body))
}
