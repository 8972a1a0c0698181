//! HTTP API errors
//!
//! One taxonomy for the whole surface. Every error is terminal for its
//! request; there are no internal retries. Backend failures map to 500
//! without leaking internal detail to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::query::QueryError;
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body missing or of the wrong shape
    #[error("Invalid data type for value (must be string)")]
    InvalidBody,

    /// Request field present but unacceptable
    #[error("{0}")]
    InvalidInput(String),

    /// Required query parameter absent
    #[error("Missing {0} parameter")]
    MissingParam(String),

    /// Malformed structured filter value
    #[error("Invalid {0} value")]
    InvalidParameter(String),

    /// Natural-language query matched no trigger
    #[error("Unable to parse natural language query")]
    Unparseable,

    /// Value already stored
    #[error("String already exists in system")]
    Conflict,

    /// Value not stored
    #[error("String does not exist in the system")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Backing store failed; detail stays server-side
    #[error("Storage unavailable")]
    StorageUnavailable,

    /// Store call exceeded its deadline
    #[error("Operation timed out")]
    Timeout,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Unparseable => StatusCode::BAD_REQUEST,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::StorageUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Timeout => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => ApiError::Conflict,
            StoreError::NotFound => ApiError::NotFound,
            // Unavailable and Corruption both surface as opaque 500s
            StoreError::Unavailable(_) | StoreError::Corruption(_) => ApiError::StorageUnavailable,
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::InvalidParameter(name) => ApiError::InvalidParameter(name),
            QueryError::Unparseable => ApiError::Unparseable,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidBody.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::InvalidInput("blank".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::StorageUnavailable.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_mapping() {
        assert_eq!(
            ApiError::from(StoreError::Conflict).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(StoreError::unavailable("disk gone")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_error_leaks_no_detail() {
        let err = ApiError::from(StoreError::unavailable("/secret/path: permission denied"));
        assert!(!err.to_string().contains("secret"));
    }

    #[test]
    fn test_query_error_mapping() {
        let err = ApiError::from(QueryError::invalid_parameter("min_length"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("min_length"));
    }
}
