//! HTTP error mapping.
//!
//! Every error response is JSON `{"message": "..."}`. Internal details are
//! logged and replaced by a generic message.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::use_cases::{management::ManagementError, region::RegionError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Authentication required")]
    Unauthorized,
    #[error("Admin access required")]
    Forbidden,
    #[error("{0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response();
            }
        };
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

impl From<RegionError> for ApiError {
    fn from(e: RegionError) -> Self {
        match e {
            RegionError::Validation(msg) => ApiError::BadRequest(msg),
            RegionError::NotFound(_) => ApiError::NotFound("Region not found".to_string()),
            RegionError::Repo(err) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<ManagementError> for ApiError {
    fn from(e: ManagementError) -> Self {
        match e {
            ManagementError::Validation(msg) => ApiError::BadRequest(msg),
            not_found @ ManagementError::NotFound { .. } => {
                ApiError::NotFound(not_found.to_string())
            }
            ManagementError::Repo(err) => ApiError::Internal(err.to_string()),
        }
    }
}

/// JSON body extractor whose rejection is a 400 `{"message"}` response.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(ApiJson(value))
    }
}
