//! tasklist-server
//!
//! HTTP boundary and process bootstrap for the task list application.
//!
//! # Modules
//! - **config**: CLI flags with environment fallbacks
//! - **logging**: tracing subscriber setup
//! - **routes / handlers**: axum router and handlers
//! - **error**: `ServiceError` to HTTP status mapping

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod state;

pub use config::{Config, Environment};
pub use routes::create_router;
pub use state::AppState;
