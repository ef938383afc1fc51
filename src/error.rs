use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::constants::API_NAME;
use crate::handlers::response::{ErrorResponse, ResponseStatus};
use crate::service::ServiceError;

const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong.";

/// Numeric code carried by every error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    MissingRequiredFields = 4000,
    InvalidHotelId = 4001,
    InvalidPageRequest = 4002,
    InvalidRequestBody = 4003,
    InternalServerError = 5000,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Required fields are missing: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    #[error("{0}")]
    InvalidHotelId(String),

    #[error("Invalid page request: {0}")]
    InvalidPageRequest(String),

    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::MissingRequiredFields(_) => ErrorCode::MissingRequiredFields,
            AppError::InvalidHotelId(_) => ErrorCode::InvalidHotelId,
            AppError::InvalidPageRequest(_) => ErrorCode::InvalidPageRequest,
            AppError::InvalidRequestBody(_) => ErrorCode::InvalidRequestBody,
            AppError::Internal(_) => ErrorCode::InternalServerError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(message) => AppError::InvalidHotelId(message),
            storage @ ServiceError::StorageFailure { .. } => AppError::Internal(storage.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code() as u16;

        let (response_status, message) = match &self {
            AppError::Internal(e) => {
                tracing::error!("{} Internal error: {:#}", API_NAME, e);
                (ResponseStatus::Fail, INTERNAL_ERROR_MESSAGE.to_string())
            }
            other => {
                tracing::warn!("{} Client error: {}", API_NAME, other);
                (ResponseStatus::Error, other.to_string())
            }
        };

        let body = Json(ErrorResponse {
            status: response_status,
            error_code,
            message,
        });

        (status, body).into_response()
    }
}
