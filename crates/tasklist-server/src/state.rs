//! Shared application state.

use std::sync::Arc;

use tasklist_core::{InMemoryTaskStore, TaskService};

/// Dependencies handed to every handler. Built once at startup; cloning is
/// cheap because the service only holds an `Arc` to its store.
#[derive(Clone)]
pub struct AppState {
    pub service: TaskService,
}

impl AppState {
    pub fn new(service: TaskService) -> Self {
        Self { service }
    }

    /// Service backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(TaskService::new(Arc::new(InMemoryTaskStore::new())))
    }
}
