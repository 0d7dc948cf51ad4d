//! Error handling for the Agri Advisory Platform
//!
//! Provides consistent JSON error responses across all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    // Static table invariant violations. Unreachable with the shipped
    // tables; if one fires it is a programmer error, not a client fault.
    #[error("Unknown crop: {0}")]
    UnknownCrop(String),

    #[error("Crop table is empty")]
    EmptyCropTable,

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<shared::ParameterOutOfRange> for AppError {
    fn from(err: shared::ParameterOutOfRange) -> Self {
        AppError::Validation {
            field: err.parameter.as_str().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<shared::UnknownCrop> for AppError {
    fn from(err: shared::UnknownCrop) -> Self {
        AppError::UnknownCrop(err.0)
    }
}

impl From<shared::EmptyTable> for AppError {
    fn from(_: shared::EmptyTable) -> Self {
        AppError::EmptyCropTable
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::UnknownCrop(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "UNKNOWN_CROP".to_string(),
                    message: "Crop reference data is inconsistent".to_string(),
                    field: None,
                },
            ),
            AppError::EmptyCropTable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "EMPTY_CROP_TABLE".to_string(),
                    message: "Crop reference data is unavailable".to_string(),
                    field: None,
                },
            ),
            AppError::Internal(_) | AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
