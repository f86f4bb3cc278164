//! Region routes.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use geoward_domain::{Region, RegionId};
use serde_json::{json, Value};

use super::auth::{Admin, Auth};
use super::error::{ApiError, ApiJson};
use super::parse_id;
use crate::app::App;
use crate::use_cases::region::{
    CheckPointInput, ContainmentResult, CreateRegionInput, UpdateRegionInput,
};

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/regions", get(list_active).post(create))
        .route("/api/regions/check", post(check_point))
        .route("/api/regions/{id}", put(update).delete(delete))
}

async fn list_active(
    State(app): State<Arc<App>>,
    _admin: Admin,
) -> Result<Json<Vec<Region>>, ApiError> {
    let regions = app.use_cases.regions.crud.list_active().await?;
    Ok(Json(regions))
}

async fn create(
    State(app): State<Arc<App>>,
    _admin: Admin,
    ApiJson(input): ApiJson<CreateRegionInput>,
) -> Result<(StatusCode, Json<Region>), ApiError> {
    let region = app.use_cases.regions.crud.create(input).await?;
    Ok((StatusCode::CREATED, Json(region)))
}

async fn update(
    State(app): State<Arc<App>>,
    _admin: Admin,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<UpdateRegionInput>,
) -> Result<Json<Region>, ApiError> {
    let id: RegionId = parse_id(&id)?;
    let region = app.use_cases.regions.crud.update(id, input).await?;
    Ok(Json(region))
}

async fn delete(
    State(app): State<Arc<App>>,
    _admin: Admin,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id: RegionId = parse_id(&id)?;
    app.use_cases.regions.crud.delete(id).await?;
    Ok(Json(json!({ "message": "Region deleted" })))
}

async fn check_point(
    State(app): State<Arc<App>>,
    _caller: Auth,
    ApiJson(input): ApiJson<CheckPointInput>,
) -> Result<Json<ContainmentResult>, ApiError> {
    let result = app.use_cases.regions.check_point.execute(input).await?;
    Ok(Json(result))
}
