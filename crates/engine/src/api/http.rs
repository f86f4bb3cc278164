//! HTTP routes.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::{content_routes, feedback_routes, region_routes, slider_routes};
use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .merge(region_routes::routes())
        .merge(slider_routes::routes())
        .merge(content_routes::routes())
        .merge(feedback_routes::routes())
}

/// Routes bound to application state with request tracing.
pub fn router(app: Arc<App>) -> Router {
    routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "OK"
}
