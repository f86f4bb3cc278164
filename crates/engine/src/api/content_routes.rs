//! Content card routes.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use geoward_domain::{Content, ContentId};
use serde_json::{json, Value};

use super::auth::Admin;
use super::error::{ApiError, ApiJson};
use super::parse_id;
use crate::app::App;
use crate::use_cases::management::{CreateContentInput, UpdateContentInput};

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/contents", get(list_active).post(create))
        .route("/api/contents/{id}", put(update).delete(delete))
        .route("/api/admin/contents", get(list_all))
}

async fn list_active(State(app): State<Arc<App>>) -> Result<Json<Vec<Content>>, ApiError> {
    Ok(Json(app.use_cases.management.content.list_active().await?))
}

async fn list_all(
    State(app): State<Arc<App>>,
    _admin: Admin,
) -> Result<Json<Vec<Content>>, ApiError> {
    Ok(Json(app.use_cases.management.content.list_all().await?))
}

async fn create(
    State(app): State<Arc<App>>,
    _admin: Admin,
    ApiJson(input): ApiJson<CreateContentInput>,
) -> Result<(StatusCode, Json<Content>), ApiError> {
    let content = app.use_cases.management.content.create(input).await?;
    Ok((StatusCode::CREATED, Json(content)))
}

async fn update(
    State(app): State<Arc<App>>,
    _admin: Admin,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<UpdateContentInput>,
) -> Result<Json<Content>, ApiError> {
    let id: ContentId = parse_id(&id)?;
    Ok(Json(app.use_cases.management.content.update(id, input).await?))
}

async fn delete(
    State(app): State<Arc<App>>,
    _admin: Admin,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id: ContentId = parse_id(&id)?;
    app.use_cases.management.content.delete(id).await?;
    Ok(Json(json!({ "message": "Content deleted" })))
}
