//! Router configuration for the demo application.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;
use crate::htmx::vary_on_hx_request;
use crate::layout::APP_JS_PATH;

pub const HOME: &str = "/";
pub const ALERTS: &str = "/alerts";
pub const FEATURES: &str = "/features";

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(HOME, get(handlers::index))
        .route(ALERTS, get(handlers::alerts))
        .route(FEATURES, get(handlers::features))
        .route(APP_JS_PATH, get(handlers::serve_js))
        .layer(middleware::map_response(vary_on_hx_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
