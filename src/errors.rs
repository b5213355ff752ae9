use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// First rule an alert violates. The message names the offending field path
/// and is meant to be shown to the producer verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertValidationError {
    /// A required object or list entry is absent, e.g. `webhook[2]`.
    #[error("{0} is nil")]
    Nil(String),

    #[error("{0}")]
    Invalid(String),
}

impl AlertValidationError {
    pub fn nil(path: impl Into<String>) -> Self {
        Self::Nil(path.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Body parsing error: {0}")]
    BodyParsingError(String),

    #[error("{0}")]
    ValidationError(#[from] AlertValidationError),
}

/// Helper for mapping any unknown error into internal error
pub fn internal_error<E: ToString>(err: E) -> AppError {
    AppError::InternalServerError(err.to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BodyParsingError(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}
