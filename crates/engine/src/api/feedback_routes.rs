//! Feedback routes.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete as delete_route, get, post},
    Json, Router,
};
use geoward_domain::{Feedback, FeedbackId};
use serde_json::{json, Value};

use super::auth::{Admin, Auth};
use super::error::{ApiError, ApiJson};
use super::parse_id;
use crate::app::App;
use crate::use_cases::management::CreateFeedbackInput;

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/feedback", post(create))
        .route("/api/feedbacks", get(list))
        .route("/api/feedbacks/{id}", delete_route(delete))
}

async fn create(
    State(app): State<Arc<App>>,
    Auth(caller): Auth,
    ApiJson(input): ApiJson<CreateFeedbackInput>,
) -> Result<(StatusCode, Json<Feedback>), ApiError> {
    let entry = app
        .use_cases
        .management
        .feedback
        .create(input, Some(caller.user_id))
        .await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn list(
    State(app): State<Arc<App>>,
    _admin: Admin,
) -> Result<Json<Vec<Feedback>>, ApiError> {
    Ok(Json(app.use_cases.management.feedback.list().await?))
}

async fn delete(
    State(app): State<Arc<App>>,
    _admin: Admin,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id: FeedbackId = parse_id(&id)?;
    app.use_cases.management.feedback.delete(id).await?;
    Ok(Json(json!({ "message": "Feedback deleted" })))
}
