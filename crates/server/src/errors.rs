use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use service::errors::ServiceError;

/// Error body returned by every `/api/*` endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub api_path: String,
    pub error_code: String,
    pub error_message: String,
    pub error_time: String,
}

/// Request failure carrying the status and the path it happened on.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub path: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, path: &str) -> Self {
        Self { status, message: message.into(), path: path.to_string() }
    }

    pub fn bad_request(message: impl Into<String>, path: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, path)
    }

    /// The only place business errors become HTTP statuses.
    pub fn from_service(e: ServiceError, path: &str) -> Self {
        let status = match &e {
            ServiceError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::AccountNumberUnavailable(_) | ServiceError::Db(_) | ServiceError::Model(_) => {
                error!(err = %e, path, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, e.to_string(), path)
    }
}

/// `NOT_FOUND`, `BAD_REQUEST`, ...
pub fn status_code_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace([' ', '-'], "_")
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_client_error() {
            warn!(status = %self.status, path = %self.path, message = %self.message, "request rejected");
        }
        let body = ErrorResponse {
            api_path: format!("uri={}", self.path),
            error_code: status_code_name(self.status),
            error_message: self.message,
            error_time: Utc::now().to_rfc3339(),
        };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_names_match_enum_style() {
        assert_eq!(status_code_name(StatusCode::NOT_FOUND), "NOT_FOUND");
        assert_eq!(status_code_name(StatusCode::BAD_REQUEST), "BAD_REQUEST");
        assert_eq!(status_code_name(StatusCode::INTERNAL_SERVER_ERROR), "INTERNAL_SERVER_ERROR");
        assert_eq!(status_code_name(StatusCode::EXPECTATION_FAILED), "EXPECTATION_FAILED");
    }

    #[test]
    fn service_errors_map_to_statuses() {
        let e = ApiError::from_service(ServiceError::AlreadyExists("1234567890".into()), "/api/create");
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        let e = ApiError::from_service(ServiceError::not_found("Customer", "mobileNumber", "1"), "/api/fetch");
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        let e = ApiError::from_service(ServiceError::Db("down".into()), "/api/delete");
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
