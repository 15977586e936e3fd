//! Routing definitions.

use std::any::Any;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, patch};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiErrorResponse;
use crate::handlers;
use crate::state::AppState;

/// Creates the router with the page, health check and `/api` routes.
///
/// ```ignore
/// let router = create_router(AppState::in_memory());
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route("/tasks/{id}", delete(handlers::delete_task))
        .route("/tasks/{id}/toggle", patch(handlers::toggle_task));

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any panic in a handler becomes a 500 with the standard error body.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "handler panicked");
    ApiErrorResponse::internal_error("Internal server error").into_response()
}
