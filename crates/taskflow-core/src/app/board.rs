//! TaskBoard - 現在のタスク一覧を持つ明示的な状態コンテナ
//!
//! # 役割
//! - 呼び出し側が所有する（グローバル変数は使わない）
//! - 変更系はコレクション操作の結果で一覧を置き換え、スナップショットを保存
//! - 参照系はコレクション操作にそのまま委譲
//!
//! # 使用例
//! ```ignore
//! let store = JsonFileTaskStore::new("tasks.json");
//! let mut board = TaskBoard::open(store, SystemClock, UlidGenerator::new(SystemClock))?;
//! let id = board.add("Write report", Some("high"))?;
//! board.complete(id)?;
//! ```

use tracing::{debug, info, warn};

use crate::app::view::ViewFilter;
use crate::collection;
use crate::domain::{Priority, Task, TaskId, TaskStats};
use crate::error::Result;
use crate::ports::{Clock, IdGenerator, StoreError, TaskStore};

pub struct TaskBoard<S, C, G> {
    tasks: Vec<Task>,
    store: S,
    clock: C,
    ids: G,
    default_priority: Priority,
}

impl<S, C, G> TaskBoard<S, C, G>
where
    S: TaskStore,
    C: Clock,
    G: IdGenerator,
{
    /// Load the last snapshot from `store`.
    pub fn open(store: S, clock: C, ids: G) -> std::result::Result<Self, StoreError> {
        let tasks = store.load()?;
        debug!(count = tasks.len(), "board opened");
        Ok(Self {
            tasks,
            store,
            clock,
            ids,
            default_priority: Priority::default(),
        })
    }

    /// Priority used by [`TaskBoard::add`] when none is given.
    pub fn with_default_priority(mut self, priority: Priority) -> Self {
        self.default_priority = priority;
        self
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        collection::find_task(&self.tasks, id)
    }

    // ---- mutations ----

    /// Add a task from raw input. `priority` is parsed (`high`, `alta`, ...);
    /// `None` uses the board's default priority.
    /// The description is checked before the priority, so blank input with
    /// a bad priority reports `EmptyDescription`.
    pub fn add(&mut self, description: &str, priority: Option<&str>) -> Result<TaskId> {
        collection::validate_description(description)?;
        let priority = match priority {
            Some(p) => p.parse::<Priority>()?,
            None => self.default_priority,
        };
        self.add_with_priority(description, priority)
    }

    pub fn add_with_priority(&mut self, description: &str, priority: Priority) -> Result<TaskId> {
        let (next, id) =
            collection::append_task(&self.tasks, description, priority, &self.clock, &self.ids)?;
        self.commit(next)?;
        info!(task_id = %id, %priority, "task added");
        Ok(id)
    }

    /// Mark as completed. Returns `false` if no task has `id`.
    pub fn complete(&mut self, id: TaskId) -> Result<bool> {
        self.set_completed(id, true)
    }

    /// Mark as pending again. Returns `false` if no task has `id`.
    pub fn reopen(&mut self, id: TaskId) -> Result<bool> {
        self.set_completed(id, false)
    }

    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> Result<bool> {
        if !self.contains(id) {
            warn!(task_id = %id, "set_completed: no such task");
            return Ok(false);
        }
        let next = collection::toggle_task_completion(&self.tasks, id, completed);
        self.commit(next)?;
        info!(task_id = %id, completed, "task updated");
        Ok(true)
    }

    /// Invert the completion flag. Returns the new flag, or `None` if no task has `id`.
    pub fn toggle(&mut self, id: TaskId) -> Result<Option<bool>> {
        if !self.contains(id) {
            warn!(task_id = %id, "toggle: no such task");
            return Ok(None);
        }
        let next = collection::flip_task_completion(&self.tasks, id);
        let completed = collection::find_task(&next, id).map(Task::is_completed);
        self.commit(next)?;
        info!(task_id = %id, ?completed, "task toggled");
        Ok(completed)
    }

    /// Returns `false` if no task has `id`.
    pub fn remove(&mut self, id: TaskId) -> Result<bool> {
        if !self.contains(id) {
            warn!(task_id = %id, "remove: no such task");
            return Ok(false);
        }
        let next = collection::remove_task(&self.tasks, id);
        self.commit(next)?;
        info!(task_id = %id, "task removed");
        Ok(true)
    }

    // ---- queries ----

    /// Filtered tasks in display order.
    pub fn view(&self, filter: ViewFilter) -> Vec<Task> {
        let filtered = filter.apply(&self.tasks);
        debug!(%filter, count = filtered.len(), "view");
        collection::sort_for_display(&filtered)
    }

    pub fn search(&self, term: Option<&str>) -> Vec<Task> {
        collection::search_tasks(&self.tasks, term)
    }

    pub fn stats(&self) -> TaskStats {
        collection::task_stats(&self.tasks)
    }

    pub fn by_priority(&self, completed: Option<bool>) -> Vec<Task> {
        collection::tasks_by_priority(&self.tasks, completed)
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.is_completed()).count()
    }

    fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Persist `next` and make it the current collection.
    fn commit(&mut self, next: Vec<Task>) -> Result<()> {
        self.store.save(&next)?;
        self.tasks = next;
        Ok(())
    }
}
