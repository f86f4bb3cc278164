//! Slider routes.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use geoward_domain::{Slider, SliderId};
use serde_json::{json, Value};

use super::auth::Admin;
use super::error::{ApiError, ApiJson};
use super::parse_id;
use crate::app::App;
use crate::use_cases::management::{CreateSliderInput, UpdateSliderInput};

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/sliders", get(list_active).post(create))
        .route("/api/sliders/{id}", put(update).delete(delete))
        .route("/api/admin/sliders", get(list_all))
}

async fn list_active(State(app): State<Arc<App>>) -> Result<Json<Vec<Slider>>, ApiError> {
    Ok(Json(app.use_cases.management.slider.list_active().await?))
}

async fn list_all(
    State(app): State<Arc<App>>,
    _admin: Admin,
) -> Result<Json<Vec<Slider>>, ApiError> {
    Ok(Json(app.use_cases.management.slider.list_all().await?))
}

async fn create(
    State(app): State<Arc<App>>,
    _admin: Admin,
    ApiJson(input): ApiJson<CreateSliderInput>,
) -> Result<(StatusCode, Json<Slider>), ApiError> {
    let slider = app.use_cases.management.slider.create(input).await?;
    Ok((StatusCode::CREATED, Json(slider)))
}

async fn update(
    State(app): State<Arc<App>>,
    _admin: Admin,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<UpdateSliderInput>,
) -> Result<Json<Slider>, ApiError> {
    let id: SliderId = parse_id(&id)?;
    Ok(Json(app.use_cases.management.slider.update(id, input).await?))
}

async fn delete(
    State(app): State<Arc<App>>,
    _admin: Admin,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id: SliderId = parse_id(&id)?;
    app.use_cases.management.slider.delete(id).await?;
    Ok(Json(json!({ "message": "Slider deleted" })))
}
