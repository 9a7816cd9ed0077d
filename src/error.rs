//! Directory errors and their HTTP mapping
//!
//! Lookups that miss are the only failure the directory core produces on its own;
//! everything else comes from storage, bad input at the API edge, or startup.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// No `entity` is stored under `id`. An empty id never matches.
    #[error("{entity} {id:?} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("storage failure: {0}")]
    Storage(#[from] sea_orm::DbErr),

    #[error("cannot read seed file: {0}")]
    SeedRead(#[from] std::io::Error),

    #[error("malformed seed data: {0}")]
    SeedFormat(#[from] serde_json::Error),

    #[error("bad configuration: {0}")]
    Config(String),
}

impl AppError {
    pub fn employee_not_found(id: impl Into<String>) -> Self {
        AppError::NotFound {
            entity: "employee",
            id: id.into(),
        }
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        AppError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Short machine-readable tag for the response body
    fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "not_found",
            AppError::InvalidInput { .. } => "invalid_input",
            AppError::Storage(_) => "storage",
            AppError::SeedRead(_) | AppError::SeedFormat(_) => "seed",
            AppError::Config(_) => "config",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    code: u16,
    error: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Server-side failures are logged in full and answered without internals
        let message = if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
            "internal error".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorResponse {
            code: status.as_u16(),
            error: self.kind(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
