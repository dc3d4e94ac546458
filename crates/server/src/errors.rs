use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use service::auth::AuthError;
use service::errors::ServiceError;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub detail: Option<String>,
}

/// Error returned by handlers; renders as `{"error": ..., "detail": ...}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid input", Some(detail.into()))
    }

    fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", None)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.title.to_string(), detail: self.detail };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(m) => Self::bad_request(m),
            ServiceError::NotFound(m) => Self::new(StatusCode::NOT_FOUND, "Not found", Some(m)),
            ServiceError::Conflict(m) => Self::new(StatusCode::CONFLICT, "Conflict", Some(m)),
            ServiceError::Db(m) => {
                error!(error = %m, "storage failure");
                Self::internal()
            }
        }
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unauthorized => Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some(e.to_string())),
            AuthError::Forbidden => Self::new(StatusCode::FORBIDDEN, "Forbidden", Some(e.to_string())),
            AuthError::HashError(_) | AuthError::TokenError(_) => {
                error!(code = e.code(), error = %e, "auth failure");
                Self::internal()
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Malformed request", Some(r.body_text()))
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self {
        Self::bad_request(r.body_text())
    }
}

impl From<QueryRejection> for JsonApiError {
    fn from(r: QueryRejection) -> Self {
        Self::bad_request(r.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        assert_eq!(JsonApiError::from(ServiceError::validation("x")).status, StatusCode::BAD_REQUEST);
        assert_eq!(JsonApiError::from(ServiceError::not_found("wishlist")).status, StatusCode::NOT_FOUND);
        assert_eq!(JsonApiError::from(ServiceError::conflict("dup")).status, StatusCode::CONFLICT);
        let db = JsonApiError::from(ServiceError::Db("connection reset".into()));
        assert_eq!(db.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(db.detail.is_none());
    }

    #[test]
    fn auth_errors_map_to_statuses() {
        assert_eq!(JsonApiError::from(AuthError::Unauthorized).status, StatusCode::UNAUTHORIZED);
        assert_eq!(JsonApiError::from(AuthError::Forbidden).status, StatusCode::FORBIDDEN);
        assert_eq!(JsonApiError::from(AuthError::TokenError("x".into())).status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
