use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream error: {0}")]
    UpstreamError(String),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// JSON body returned with every failed HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamError(_) | AppError::RequestError(_) => StatusCode::BAD_GATEWAY,
            AppError::DatabaseError(_) | AppError::EnvError(_) | AppError::IoError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Server-side failures are reported with the generic `context` message,
    /// client errors with their own description.
    pub fn to_response(&self, context: &str) -> (StatusCode, Json<ErrorBody>) {
        let status = self.status();
        let message = if status.is_server_error() {
            context.to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody::new(message)))
    }
}
