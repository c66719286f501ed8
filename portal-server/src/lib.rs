//! HTTP server for the school parent portal.
//!
//! Every `/api` route here is a thin proxy: it forwards the request to the
//! school's content API with a bearer token and hands the JSON body back
//! unchanged. The one exception is `/api/auth/login`, which is answered
//! locally by the core authenticator.

pub mod config;
pub mod routes;
pub mod state;
pub mod upstream;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Build the portal router with all routes and middleware attached
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::gallery::router())
        .merge(routes::calendar::router())
        .merge(routes::downloads::router())
        .merge(routes::auth::router())
        .with_state(state)
        .layer(cors)
}
