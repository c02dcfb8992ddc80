//! Response types and error handling for API endpoints
//!
//! Provides unified error handling and JSON response formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rsvp_common::{AppError, ErrorResponse};
use rsvp_core::DomainError;
use rsvp_service::ServiceError;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    503
                }
            }
            Self::Validation(_) | Self::InvalidPath(_) | Self::InvalidBody(_) => 400,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidBody(_) => "INVALID_BODY",
        }
    }

    /// Create an invalid path parameter error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create an invalid body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// User-facing message and per-field details
    fn describe(self) -> (String, Option<Value>) {
        let app = match self {
            Self::Validation(errors) => {
                return ("Validation failed".to_string(), Some(field_details(&errors)));
            }
            Self::App(e) => e,
            Self::Service(e) => AppError::from(e),
            Self::Domain(e) => AppError::from(e),
            other => return (other.to_string(), None),
        };
        let response = ErrorResponse::from(&app);
        (response.message, response.details)
    }
}

/// `{"field": ["message", ...]}` for shape validation failures
fn field_details(errors: &ValidationErrors) -> Value {
    let fields: Map<String, Value> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages: Vec<Value> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map_or_else(|| e.code.to_string(), ToString::to_string)
                        .into()
                })
                .collect();
            (field.to_string(), Value::Array(messages))
        })
        .collect();
    Value::Object(fields)
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail for API responses
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().to_string();

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        let (message, details) = self.describe();

        let body = ErrorBody {
            error: ErrorDetail {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}

/// No content response (204)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}

#[cfg(test)]
mod tests {
    use rsvp_core::{GuestField, GuestId};
    use rsvp_service::dto::SubmitRsvpRequest;
    use validator::Validate;

    use super::*;

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::InvalidPath("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(DomainError::GuestNotFound(GuestId::generate())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(DomainError::CannotCheckInDeclined(GuestId::generate())).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(ServiceError::RosterUnavailable).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_api_error_codes() {
        assert_eq!(
            ApiError::InvalidPath("test".to_string()).error_code(),
            "INVALID_PATH_PARAMETER"
        );
        assert_eq!(ApiError::invalid_body("bad").error_code(), "INVALID_BODY");
        assert_eq!(
            ApiError::from(ServiceError::Persistence("try again")).error_code(),
            "PERSISTENCE_ERROR"
        );
    }

    #[test]
    fn test_field_error_details() {
        let err = ApiError::from(ServiceError::from(DomainError::invalid_field(
            GuestField::Name,
            "Name is required",
        )));
        let (message, details) = err.describe();

        assert_eq!(message, "Name is required");
        assert_eq!(details, Some(serde_json::json!({ "name": ["Name is required"] })));
    }

    #[test]
    fn test_shape_error_details() {
        let request = SubmitRsvpRequest {
            name: "a".repeat(101),
            ..Default::default()
        };
        let err = ApiError::from(request.validate().unwrap_err());
        let (message, details) = err.describe();

        assert_eq!(message, "Validation failed");
        assert_eq!(
            details,
            Some(serde_json::json!({ "name": ["Name must be at most 100 characters"] }))
        );
    }

    #[test]
    fn test_persistence_message_is_generic() {
        let err = ApiError::from(ServiceError::Persistence(
            "We couldn't send your RSVP. Please try again.",
        ));
        let (message, details) = err.describe();

        assert_eq!(message, "We couldn't send your RSVP. Please try again.");
        assert!(details.is_none());
    }
}
