//! TaskStore port - task コレクションの正本（source of truth）
//!
//! TaskStore は検証を行いません。呼び出し側（`TaskService`）が
//! 検証済みの値だけを渡すことを前提にしています。

use crate::domain::{Color, Priority, StoreError, Task, TaskId};

/// TaskStore は task の保持・採番・読み書きを担う
///
/// # 設計原則
/// - 返す Task は常にコピー（内部コレクションへの参照は外に出さない）
/// - 挿入順を保持し、削除しても残りの相対順序は変わらない
/// - 失敗は `StoreError::TaskNotFound` のみ。`create` は失敗しない
///
/// # Thread Safety
/// - `Send + Sync` を要求（HTTP handler から並行に呼ばれる）
pub trait TaskStore: Send + Sync {
    /// Allocates the next id, stamps `created_at` and appends a task with
    /// `completed = false`.
    fn create(&self, title: String, priority: Priority, color: Color) -> Task;

    /// Snapshot of every task in insertion order.
    fn get_all(&self) -> Vec<Task>;

    fn get_by_id(&self, id: TaskId) -> Result<Task, StoreError>;

    /// Flips `completed` and returns the updated task.
    fn toggle(&self, id: TaskId) -> Result<Task, StoreError>;

    fn delete(&self, id: TaskId) -> Result<(), StoreError>;

    fn len(&self) -> usize {
        self.get_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
