//! Request/response bodies that are not domain types.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/tasks`.
///
/// Missing fields decode as empty strings; the service treats an empty
/// priority or color as "use the default" and an empty title as invalid.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
