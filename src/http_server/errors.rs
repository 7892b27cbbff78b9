//! # API Errors
//!
//! Error types for HTTP handlers and their JSON rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::schema::{ValidationDetails, ValidationErrors};
use crate::store::StoreError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body parsed but violates the record schema
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Body is not valid JSON or has the wrong content type
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Invalid query parameter
    #[error("Invalid query parameter: {0}")]
    InvalidQueryParam(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure during a write
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ValidationDetails>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        let code = err.status_code().as_u16();
        let error = err.to_string();
        let details = match err {
            ApiError::Validation(errors) => errors.into_details(),
            _ => Vec::new(),
        };
        Self {
            error,
            code,
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let validation = ValidationErrors::new(
            "Payment",
            vec![ValidationDetails::below_minimum("amount", 0.0, -1.0)],
        );
        assert_eq!(
            ApiError::from(validation).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::InvalidQueryParam("limit".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(StoreError::Unavailable("down".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response_lists_fields() {
        let validation = ValidationErrors::new(
            "Class",
            vec![
                ValidationDetails::missing_field("code"),
                ValidationDetails::missing_field("name"),
            ],
        );

        let json = serde_json::to_value(ErrorResponse::from(ApiError::from(validation))).unwrap();
        assert_eq!(json["code"], 422);
        assert_eq!(json["details"][0]["field"], "code");
        assert_eq!(json["details"][1]["field"], "name");
    }

    #[test]
    fn test_details_omitted_for_other_errors() {
        let json =
            serde_json::to_value(ErrorResponse::from(ApiError::InvalidBody("eof".into()))).unwrap();
        assert_eq!(json["code"], 400);
        assert!(json.get("details").is_none());
    }
}
