//! JSON API handlers under `/api/tasks`.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use tasklist_core::{Task, TaskId};

use crate::dto::{CreateTaskRequest, MessageResponse};
use crate::error::ApiErrorResponse;
use crate::state::AppState;

/// `GET /api/tasks`
pub async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.service.get_all())
}

/// `POST /api/tasks`
///
/// - **201 Created**: the created task
/// - **400 Bad Request**: undecodable body or a validation error
///
/// The body is decoded as JSON whatever the `Content-Type` header says.
pub async fn create_task(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Task>), ApiErrorResponse> {
    let request: CreateTaskRequest = serde_json::from_slice(&body).map_err(|error| {
        tracing::debug!(%error, "undecodable create request");
        ApiErrorResponse::invalid_input("Invalid request body")
    })?;

    let task = state
        .service
        .create(&request.title, &request.priority, &request.color)?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PATCH /api/tasks/{id}/toggle`
pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiErrorResponse> {
    let id = parse_id(&id)?;
    let task = state.service.toggle(id)?;
    Ok(Json(task))
}

/// `DELETE /api/tasks/{id}`
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiErrorResponse> {
    let id = parse_id(&id)?;
    state.service.delete(id)?;
    Ok(Json(MessageResponse::new("Task deleted successfully")))
}

/// Ids are opaque to clients; a string that is not an id names no task.
fn parse_id(raw: &str) -> Result<TaskId, ApiErrorResponse> {
    raw.parse().map_err(|_| ApiErrorResponse::task_not_found())
}
