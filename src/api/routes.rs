//! Application route configuration.

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use super::handlers::user_routes;
use super::middleware::{handle_panic, not_found};
use super::AppState;
use crate::config::{API_PREFIX, MAX_JSON_BODY_BYTES};

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest(API_PREFIX, user_routes())
        // Catch-all for unknown paths
        .fallback(not_found)
        // Global middleware
        .layer(DefaultBodyLimit::max(MAX_JSON_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
