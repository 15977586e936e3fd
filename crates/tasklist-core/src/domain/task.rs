use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Color, Priority, TaskId};

/// Maximum title length, counted in Unicode scalar values after trimming.
pub const MAX_TITLE_LENGTH: usize = 255;

/// A single task.
///
/// `priority` and `color` are fixed at creation; `completed` is the only
/// field that changes afterwards, and only through a toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub priority: Priority,
    pub color: Color,
}

impl Task {
    /// Fresh, not yet completed task.
    pub fn new(
        id: TaskId,
        title: String,
        priority: Priority,
        color: Color,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            completed: false,
            created_at,
            priority,
            color,
        }
    }

    pub(crate) fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
