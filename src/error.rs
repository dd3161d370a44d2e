// src/error.rs
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    ValidationError(String),
    /// The inputs were well-formed but the resulting price is not allowed.
    DomainError(String),
    Internal(String),
    /// A failure reported under an operation summary, e.g. "Failed to create pricing profile".
    Context { summary: String, source: Box<AppError> },
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn domain(msg: impl Into<String>) -> Self {
        AppError::DomainError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn context(self, summary: impl Into<String>) -> Self {
        AppError::Context {
            summary: summary.into(),
            source: Box::new(self),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) | AppError::DomainError(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Context { source, .. } => source.status(),
        }
    }

    /// The innermost human-readable message.
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg)
            | AppError::ValidationError(msg)
            | AppError::DomainError(msg)
            | AppError::Internal(msg) => msg.as_str(),
            AppError::Context { source, .. } => source.message(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Context { summary, source } => write!(f, "{summary}: {source}"),
            other => f.write_str(other.message()),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Context { summary, source } => json!({
                "success": false,
                "error": summary,
                "details": source.message(),
            }),
            AppError::Internal(msg) => json!({
                "success": false,
                "error": "Internal server error",
                "details": msg,
            }),
            other => json!({
                "success": false,
                "error": other.message(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}
