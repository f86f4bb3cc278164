//! Caller identity extracted from gateway headers.
//!
//! An upstream gateway authenticates the request and forwards the result in
//! `X-User-Id` and `X-User-Role`. Handlers declare the access they need by
//! taking an [`Auth`] or [`Admin`] extractor.
//!
//! ```rust,ignore
//! async fn handler(Admin(caller): Admin) -> impl IntoResponse {
//!     format!("Hello, {}", caller.user_id)
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    fn from_header(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("admin") => Self::Admin,
            _ => Self::User,
        }
    }
}

/// Authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: String,
    pub role: Role,
}

impl Caller {
    fn from_parts(parts: &Parts) -> Option<Self> {
        let user_id = header(parts, USER_ID_HEADER)
            .map(str::trim)
            .filter(|s| !s.is_empty())?
            .to_string();
        Some(Self {
            user_id,
            role: Role::from_header(header(parts, USER_ROLE_HEADER)),
        })
    }
}

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|v| v.to_str().ok())
}

/// Any authenticated caller. Rejects with 401 when no user id is present.
#[derive(Debug, Clone)]
pub struct Auth(pub Caller);

impl<S> FromRequestParts<S> for Auth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Caller::from_parts(parts)
            .map(Auth)
            .ok_or(ApiError::Unauthorized)
    }
}

/// Admin caller. 401 without a user id, 403 for other roles.
#[derive(Debug, Clone)]
pub struct Admin(pub Caller);

impl<S> FromRequestParts<S> for Admin
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let caller = Caller::from_parts(parts).ok_or(ApiError::Unauthorized)?;
        if caller.role != Role::Admin {
            tracing::debug!(user_id = %caller.user_id, "Admin access denied");
            return Err(ApiError::Forbidden);
        }
        Ok(Admin(caller))
    }
}
