//! InMemoryTaskStore - プロセス内メモリに task を保持する store
//!
//! - `RwLock` で「単一 writer または複数 reader」
//! - 採番は write lock の内側で行う（並行 create でも ID が衝突しない）
//! - 再起動で全て消える（永続化はしない）

use parking_lot::RwLock;

use crate::domain::{Color, Priority, StoreError, Task, TaskId};
use crate::ports::{Clock, SystemClock, TaskStore};

/// Lock-protected state.
struct InMemoryTaskStoreState {
    /// Tasks in insertion order.
    tasks: Vec<Task>,

    /// Next id to assign. Never rewinds, so ids are not reused after delete.
    next_id: TaskId,
}

impl InMemoryTaskStoreState {
    fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::FIRST,
        }
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    fn position(&self, id: TaskId) -> Result<usize, StoreError> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::TaskNotFound(id))
    }
}

/// InMemoryTaskStore は開発・小規模運用向けの TaskStore 実装
///
/// 数十ユーザー・千件程度を想定しているため、検索は線形走査です。
///
/// # 使用例
/// ```ignore
/// let store = InMemoryTaskStore::new();
/// let task = store.create("Buy milk".into(), Priority::Low, Color::Green);
/// let task = store.toggle(task.id)?;
/// ```
pub struct InMemoryTaskStore<C = SystemClock> {
    state: RwLock<InMemoryTaskStoreState>,
    clock: C,
}

impl InMemoryTaskStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for InMemoryTaskStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryTaskStore<C> {
    /// 任意の Clock で作成（テストでは FixedClock）
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: RwLock::new(InMemoryTaskStoreState::new()),
            clock,
        }
    }
}

impl<C: Clock> TaskStore for InMemoryTaskStore<C> {
    fn create(&self, title: String, priority: Priority, color: Color) -> Task {
        let mut state = self.state.write();
        // Stamped under the lock so createdAt never runs behind id order.
        let created_at = self.clock.now();
        let id = state.allocate_id();
        let task = Task::new(id, title, priority, color, created_at);
        state.tasks.push(task.clone());
        task
    }

    fn get_all(&self) -> Vec<Task> {
        self.state.read().tasks.clone()
    }

    fn get_by_id(&self, id: TaskId) -> Result<Task, StoreError> {
        let state = self.state.read();
        let index = state.position(id)?;
        Ok(state.tasks[index].clone())
    }

    fn toggle(&self, id: TaskId) -> Result<Task, StoreError> {
        let mut state = self.state.write();
        let index = state.position(id)?;
        let task = &mut state.tasks[index];
        task.toggle();
        Ok(task.clone())
    }

    fn delete(&self, id: TaskId) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let index = state.position(id)?;
        // Vec::remove shifts the tail, keeping the remaining order.
        state.tasks.remove(index);
        Ok(())
    }

    fn len(&self) -> usize {
        self.state.read().tasks.len()
    }
}
