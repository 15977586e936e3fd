//! HTTP handlers.

pub mod api;
pub mod health;
pub mod page;

pub use api::{create_task, delete_task, list_tasks, toggle_task};
pub use health::health_check;
pub use page::index;
