//! JsonFileTaskStore - JSON ファイルへのスナップショット保存
//!
//! ファイルの中身は Task の JSON 配列そのもの（フィールド名は
//! `id` / `description` / `priority` / `completed` / `createdAt`）。

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::domain::Task;
use crate::ports::{StoreError, TaskStore};

/// JsonFileTaskStore は 1 ファイルに一覧全体を書き込む
///
/// - ファイルがなければ空の一覧として扱う
/// - 保存時は親ディレクトリを作成してから上書き
#[derive(Debug, Clone)]
pub struct JsonFileTaskStore {
    path: PathBuf,
}

impl JsonFileTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TaskStore for JsonFileTaskStore {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&contents)?;
        debug!(path = %self.path.display(), count = tasks.len(), "loaded snapshot");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), count = tasks.len(), "saved snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{add_task, mark_completed};
    use crate::domain::Priority;
    use crate::ports::{SystemClock, UlidGenerator};

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileTaskStore::new(dir.path().join("tasks.json"));

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn saved_snapshot_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileTaskStore::new(dir.path().join("nested").join("tasks.json"));
        let ids = UlidGenerator::new(SystemClock);
        let tasks = add_task(&[], "Study Rust", Priority::High, &SystemClock, &ids).unwrap();
        let tasks = add_task(&tasks, "Buy bread", Priority::Low, &SystemClock, &ids).unwrap();
        let tasks = mark_completed(&tasks, tasks[1].id());

        store.save(&tasks).unwrap();

        assert_eq!(store.load().unwrap(), tasks);
    }

    #[test]
    fn reads_snapshot_written_by_hand() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(
            &path,
            r#"[
              {
                "id": "01HN0000000000000000000001",
                "description": "Implementar API",
                "priority": "alta",
                "completed": false,
                "createdAt": "2024-01-01T10:00:00.000Z"
              }
            ]"#,
        )
        .unwrap();

        let tasks = JsonFileTaskStore::new(&path).load().unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].priority(), Priority::High);
    }

    #[test]
    fn loads_snapshot_with_numeric_ids_and_saves_it_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(
            &path,
            r#"[
              {"id":1704103200123,"description":"Estudar JavaScript","priority":"alta","completed":true,"createdAt":"2024-01-01T10:00:00.123Z"},
              {"id":1704103200456,"description":"Revisar código","priority":"média","completed":false,"createdAt":"2024-01-01T10:00:00.456Z"}
            ]"#,
        )
        .unwrap();
        let store = JsonFileTaskStore::new(&path);

        let tasks = store.load().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id(), crate::domain::TaskId::from_legacy(1704103200123));
        assert!(tasks[0].is_completed());
        assert_eq!(tasks[1].priority(), Priority::Medium);

        store.save(&tasks).unwrap();
        assert_eq!(store.load().unwrap(), tasks);
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileTaskStore::new(&path).load().unwrap_err();

        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn empty_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "").unwrap();

        assert!(JsonFileTaskStore::new(&path).load().unwrap().is_empty());
    }
}
