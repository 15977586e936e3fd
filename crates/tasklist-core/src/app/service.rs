//! TaskService - 検証と業務ルールの唯一の窓口
//!
//! # 検証順序（fail-fast）
//! 1. title（trim → 空チェック → 長さチェック）
//! 2. priority（空文字ならデフォルト → ホワイトリスト）
//! 3. color（空文字ならデフォルト → ホワイトリスト）
//!
//! 最初に違反したルールだけを返し、以降は評価しません。
//! 作成後の title / priority / color を変更する操作は提供しません。

use std::sync::Arc;

use crate::domain::{Color, MAX_TITLE_LENGTH, Priority, ServiceError, StoreError, Task, TaskId};
use crate::ports::TaskStore;

/// TaskService は入力検証を行い、TaskStore に委譲する
///
/// # 使用例
/// ```ignore
/// let service = TaskService::new(Arc::new(InMemoryTaskStore::new()));
/// let task = service.create("Buy milk", "🔥", "#dc3545")?;
/// service.toggle(task.id)?;
/// ```
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// Validates and creates a task.
    ///
    /// An empty `priority` or `color` means "not supplied" and is replaced by
    /// its default independently of the other.
    pub fn create(&self, title: &str, priority: &str, color: &str) -> Result<Task, ServiceError> {
        let (title, priority, color) = validate(title, priority, color).inspect_err(|err| {
            tracing::debug!(error = %err, "task rejected by validation");
        })?;

        let task = self.store.create(title, priority, color);
        tracing::info!(task_id = %task.id, priority = %task.priority, color = %task.color, "task created");
        Ok(task)
    }

    pub fn get_all(&self) -> Vec<Task> {
        self.store.get_all()
    }

    pub fn get_by_id(&self, id: TaskId) -> Result<Task, ServiceError> {
        self.store.get_by_id(id).map_err(with_context("get"))
    }

    pub fn toggle(&self, id: TaskId) -> Result<Task, ServiceError> {
        let task = self.store.toggle(id).map_err(with_context("toggle"))?;
        tracing::info!(task_id = %task.id, completed = task.completed, "task toggled");
        Ok(task)
    }

    pub fn delete(&self, id: TaskId) -> Result<(), ServiceError> {
        self.store.delete(id).map_err(with_context("delete"))?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }
}

fn with_context(operation: &'static str) -> impl Fn(StoreError) -> ServiceError {
    move |source| ServiceError::Store { operation, source }
}

fn validate(
    title: &str,
    priority: &str,
    color: &str,
) -> Result<(String, Priority, Color), ServiceError> {
    let title = validate_title(title)?;
    let priority = parse_or_default::<Priority>(priority)
        .ok_or_else(|| ServiceError::InvalidPriority(priority.to_string()))?;
    let color = parse_or_default::<Color>(color)
        .ok_or_else(|| ServiceError::InvalidColor(color.to_string()))?;
    Ok((title, priority, color))
}

fn validate_title(title: &str) -> Result<String, ServiceError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ServiceError::EmptyTitle);
    }
    let length = title.chars().count();
    if length > MAX_TITLE_LENGTH {
        return Err(ServiceError::TitleTooLong { length });
    }
    Ok(title.to_string())
}

/// `""` → default, otherwise whitelist lookup. `None` means not whitelisted.
fn parse_or_default<T>(raw: &str) -> Option<T>
where
    T: std::str::FromStr + Default,
{
    if raw.is_empty() {
        Some(T::default())
    } else {
        raw.parse().ok()
    }
}
