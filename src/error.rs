//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::accounts::AccountError;
use crate::validation::FieldErrors;
use crate::voyages::{BookingError, ScheduleError};

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Validation(errors) => AppError::Validation(errors),
            AccountError::UsernameTaken(_) => AppError::Conflict(err.to_string()),
        }
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            AppError::Booking(BookingError::InvalidRoute(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_route")
            }
            AppError::Booking(BookingError::InvalidPassengerName(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_passenger_name")
            }
            AppError::Schedule(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();

        let (message, details) = match &self {
            AppError::Validation(errors) => (
                self.to_string(),
                Some(serde_json::json!({ "fields": errors })),
            ),
            AppError::Booking(BookingError::InvalidPassengerName(_)) => (
                self.to_string(),
                Some(serde_json::json!({
                    "fields": { "passenger_name": "Please enter a valid name (2-50 characters)" }
                })),
            ),
            AppError::Schedule(e) => {
                tracing::error!("Schedule error: {}", e);
                ("Schedule error".to_string(), None)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ("Internal error".to_string(), None)
            }
            _ => (self.to_string(), None),
        };

        let body = ErrorResponse {
            error_type,
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
