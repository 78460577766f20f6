use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::{ErrorResponse, ValidationIssue};

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Error taxonomy for the whole API.
///
/// Errors are normalized into a variant at the place they arise, so the
/// response mapping below never has to inspect an untyped error shape to
/// decide on a status code.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("invalid request data")]
    Validation { issues: Vec<ValidationIssue> },

    #[error("Invalid ID provided")]
    InvalidId,

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Status { code: StatusCode, message: String },

    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    pub fn validation(issues: Vec<ValidationIssue>) -> Self {
        ServiceError::Validation { issues }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ServiceError::NotFound(message.into())
    }

    /// An error carrying an explicit response status
    pub fn with_status(code: StatusCode, message: impl Into<String>) -> Self {
        ServiceError::Status {
            code,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ServiceError::Internal(message.into())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        // Every failure is reported exactly once before the response is built
        tracing::error!("Route error: {}", self);

        let (status, body) = match self {
            ServiceError::Validation { issues } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    success: false,
                    message: "invalid request data".to_string(),
                    errors: Some(issues),
                },
            ),
            ServiceError::InvalidId => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::from_message("Invalid ID provided"),
            ),
            ServiceError::NotFound(message) => {
                (StatusCode::NOT_FOUND, ErrorResponse::from_message(message))
            }
            ServiceError::Status { code, message } => (code, ErrorResponse::from_message(message)),
            ServiceError::Internal(message) => {
                let message = if message.is_empty() {
                    "Internal server error".to_string()
                } else {
                    message
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::from_message(message),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut issues = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for err in field_errors {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                issues.push(ValidationIssue {
                    field: Some(field.to_string()),
                    message,
                });
            }
        }
        ServiceError::Validation { issues }
    }
}

// Body extraction failures (malformed JSON, wrong content type) surface as a
// schema validation failure so clients always see the same error envelope.
impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::Validation {
            issues: vec![ValidationIssue {
                field: None,
                message: rejection.body_text(),
            }],
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Internal(format!("JSON serialization error: {}", err))
    }
}
