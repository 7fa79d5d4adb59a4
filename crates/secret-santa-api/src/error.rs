//! Secret Santa — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use secret_santa_core::error::DomainError;
use secret_santa_share::DecodeError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Binding the listener or serving connections failed.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around domain and decoding errors that implements
/// `IntoResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// A draw or reveal could not be completed.
    Domain(DomainError),
    /// Submitted link state could not be decoded.
    Decode(DecodeError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<DecodeError> for ApiError {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            Self::Domain(err) => {
                let (status, code) = match &err {
                    DomainError::InsufficientParticipants { .. } => {
                        (StatusCode::BAD_REQUEST, "insufficient_participants")
                    }
                    DomainError::TooManyParticipants { .. } => {
                        (StatusCode::BAD_REQUEST, "too_many_participants")
                    }
                    DomainError::NoSolution => (StatusCode::UNPROCESSABLE_ENTITY, "no_solution"),
                    DomainError::AssignmentNotFound(_) => {
                        (StatusCode::NOT_FOUND, "assignment_not_found")
                    }
                    DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
                };
                (status, code, err.to_string())
            }
            Self::Decode(err) => (StatusCode::BAD_REQUEST, "decode_error", err.to_string()),
        };

        let body = ErrorBody {
            error: error_code,
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: impl Into<ApiError>) -> StatusCode {
        let response = err.into().into_response();
        response.status()
    }

    #[test]
    fn test_insufficient_participants_maps_to_400() {
        assert_eq!(
            status_of(DomainError::InsufficientParticipants { count: 1 }),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_no_solution_maps_to_422() {
        assert_eq!(
            status_of(DomainError::NoSolution),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_assignment_not_found_maps_to_404() {
        assert_eq!(
            status_of(DomainError::AssignmentNotFound("Ann".into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            status_of(DomainError::Validation("bad input".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_too_many_participants_maps_to_400() {
        assert_eq!(
            status_of(DomainError::TooManyParticipants { count: 1001 }),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_bind_failure_converts_to_server_error() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port 3000 taken");

        let err = AppError::from(io);

        assert!(matches!(err, AppError::Server(_)));
        assert_eq!(err.to_string(), "server error: port 3000 taken");
    }

    #[test]
    fn test_decode_error_maps_to_400() {
        assert_eq!(
            status_of(DecodeError::Seed("soon".into())),
            StatusCode::BAD_REQUEST
        );
    }
}
