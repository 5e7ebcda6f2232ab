//! Error types for the Print Hub server

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::scheduler::AssignmentError;

/// Application error codes reported in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchPrinter = 2,
    NoSuchFilament = 3,
    NoSuchJob = 4,
    NoSuchData = 5,
    BadValue = 6,
    InvalidTransition = 7,
    IncompatiblePrinter = 8,
    AmsUnavailable = 9,
    BedTooSmall = 10,
    MalformedImport = 11,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Assignment rejected: {0}")]
    Assignment(#[from] AssignmentError),

    #[error("Import failed: {0}")]
    Import(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn printer_not_found(id: &str) -> Self {
        AppError::NotFound(format!("Printer {} not found", id))
    }

    pub fn filament_not_found(id: &str) -> Self {
        AppError::NotFound(format!("Filament {} not found", id))
    }

    pub fn job_not_found(id: &str) -> Self {
        AppError::NotFound(format!("Print job {} not found", id))
    }

    pub fn intervention_not_found(id: &str) -> Self {
        AppError::NotFound(format!("Intervention time {} not found", id))
    }

    fn not_found_code(msg: &str) -> ErrorCode {
        if msg.starts_with("Printer ") {
            ErrorCode::NoSuchPrinter
        } else if msg.starts_with("Filament ") {
            ErrorCode::NoSuchFilament
        } else if msg.starts_with("Print job ") {
            ErrorCode::NoSuchJob
        } else {
            ErrorCode::NoSuchData
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, AppError::not_found_code(msg), msg.clone())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::InvalidTransition(msg) => {
                (StatusCode::CONFLICT, ErrorCode::InvalidTransition, msg.clone())
            }
            AppError::Assignment(err) => {
                let code = match err {
                    AssignmentError::IncompatiblePrinter => ErrorCode::IncompatiblePrinter,
                    AssignmentError::AmsUnavailable => ErrorCode::AmsUnavailable,
                    AssignmentError::BedTooSmall { .. } => ErrorCode::BedTooSmall,
                };
                (StatusCode::UNPROCESSABLE_ENTITY, code, err.to_string())
            }
            AppError::Import(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::MalformedImport, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
