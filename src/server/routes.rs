//! Route definitions for the web server.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;
use crate::api::SEARCH_PATH;

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(SEARCH_PATH, post(handlers::search))
        .route("/static/app.js", get(handlers::app_js))
        .route("/static/style.css", get(handlers::style_css))
        .fallback(get(handlers::index))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
