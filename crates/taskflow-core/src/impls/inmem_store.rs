//! InMemoryTaskStore - テスト・demo 用のスナップショット保存先
//!
//! プロセスが終わると内容は消えます。

use std::sync::{Mutex, PoisonError};

use crate::domain::Task;
use crate::ports::{StoreError, TaskStore};

/// InMemoryTaskStore は最後に保存されたスナップショットを保持する
///
/// # 実装詳細
/// - `TaskStore` が `&self` を取るので Mutex で包む
/// - `save_count` でテストから保存回数を確認できる
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    inner: Mutex<Snapshot>,
}

#[derive(Debug, Default)]
struct Snapshot {
    tasks: Vec<Task>,
    saves: usize,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `tasks`, as if they had been saved earlier.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            inner: Mutex::new(Snapshot { tasks, saves: 0 }),
        }
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).saves
    }
}

impl TaskStore for InMemoryTaskStore {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.tasks.clone())
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.tasks = tasks.to_vec();
        inner.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::add_task;
    use crate::domain::Priority;
    use crate::ports::{SystemClock, UlidGenerator};

    #[test]
    fn empty_store_loads_nothing() {
        let store = InMemoryTaskStore::new();
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn save_replaces_whole_snapshot() {
        let ids = UlidGenerator::new(SystemClock);
        let one = add_task(&[], "one", Priority::Low, &SystemClock, &ids).unwrap();
        let two = add_task(&one, "two", Priority::High, &SystemClock, &ids).unwrap();
        let store = InMemoryTaskStore::new();

        store.save(&two).unwrap();
        store.save(&one).unwrap();

        assert_eq!(store.load().unwrap(), one);
        assert_eq!(store.save_count(), 2);
    }
}
