//! Error translation: every failure leaving a handler becomes
//! `{ timestamp, error, message }` with `error` set to the reason phrase.

use axum::Json;
use axum::extract::path::ErrorKind;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::error::{DomainError, ErrorClass};

pub type ApiResult<T> = Result<T, ApiError>;

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// HTTP reason phrase, e.g. `Not Found`.
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_body() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid request body")
    }

    #[must_use]
    pub fn invalid_param(param: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Type of {param} is invalid"),
        )
    }

    #[must_use]
    pub fn no_endpoint(method: &http::Method, path: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("No endpoint available for: {method} {path}"),
        )
    }

    #[must_use]
    pub fn method_not_supported(method: &http::Method) -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            format!("Request method '{method}' is not supported"),
        )
    }

    #[must_use]
    pub fn unexpected() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unexpected error happened",
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            timestamp: OffsetDateTime::now_utc(),
            error: self
                .status
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_owned(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e.class() {
            ErrorClass::NotFound => {
                warn!(error = %e, "Resource not found");
                Self::new(StatusCode::NOT_FOUND, e.to_string())
            }
            ErrorClass::BadRequest => {
                warn!(error = %e, "Request rejected");
                Self::new(StatusCode::BAD_REQUEST, e.to_string())
            }
            ErrorClass::Internal => {
                // Log the internal error details but don't expose them to the client
                error!(error = ?e, "Unexpected error occurred");
                Self::unexpected()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Unreadable request body");
        Self::invalid_body()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        warn!(error = %rejection.body_text(), "Invalid path parameter");
        match rejection {
            PathRejection::FailedToDeserializePathParams(inner) => match inner.kind() {
                ErrorKind::ParseErrorAtKey { key, .. } => Self::invalid_param(key),
                _ => Self::invalid_param("path parameter"),
            },
            _ => Self::unexpected(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::to_bytes;
    use person_registry_sdk::AddressType;
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn domain_classes_map_to_statuses() {
        let not_found = ApiError::from(DomainError::address_not_owned(3, 1));
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(
            not_found.message,
            "Address with id 3 does not belong to person 1"
        );

        let bad = ApiError::from(DomainError::address_type_exists(AddressType::Permanent, 1));
        assert_eq!(bad.status, StatusCode::BAD_REQUEST);
    }

    #[traced_test]
    #[test]
    fn database_details_are_logged_not_returned() {
        let err = ApiError::from(DomainError::database("disk I/O error"));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Unexpected error happened");
        assert!(logs_contain("disk I/O error"));
    }

    #[tokio::test]
    async fn body_carries_reason_phrase() {
        let response = ApiError::method_not_supported(&http::Method::PATCH).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Method Not Allowed");
        assert_eq!(body["message"], "Request method 'PATCH' is not supported");
        assert!(body["timestamp"].is_string());
    }
}
