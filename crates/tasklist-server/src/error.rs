//! API error handling.
//!
//! Maps `ServiceError` kinds to HTTP status codes and a JSON body of the form
//! `{"error": <message>, "code": <CODE>}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tasklist_core::{Color, ErrorKind, Priority, ServiceError};

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable message.
    pub error: String,
    /// Error code for programmatic handling.
    pub code: String,
}

/// Status code plus error body.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub error: ApiError,
}

impl ApiErrorResponse {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            error: ApiError {
                error: message.into(),
                code: code.into(),
            },
        }
    }

    /// 400 Bad Request.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_INPUT", message)
    }

    /// 404 Not Found.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }

    /// 500 Internal Server Error. Details stay in the logs.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_SERVER_ERROR",
            message,
        )
    }

    pub fn task_not_found() -> Self {
        Self::not_found("Task not found")
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ServiceError> for ApiErrorResponse {
    fn from(error: ServiceError) -> Self {
        match error.kind() {
            ErrorKind::EmptyTitle | ErrorKind::TitleTooLong => {
                Self::invalid_input(capitalize(&error.to_string()))
            }
            ErrorKind::InvalidPriority => Self::invalid_input(format!(
                "Invalid priority emoticon. Must be one of: {}",
                join(Priority::ALL.iter().map(Priority::as_str))
            )),
            ErrorKind::InvalidColor => Self::invalid_input(format!(
                "Invalid color code. Must be one of: {}",
                join(Color::ALL.iter().map(Color::as_str))
            )),
            ErrorKind::TaskNotFound => Self::task_not_found(),
        }
    }
}

fn join<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(", ")
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
