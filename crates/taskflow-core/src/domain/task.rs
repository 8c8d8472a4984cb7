use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Priority, TaskId};

/// A single to-do record.
///
/// Fields are private so that only `completed` can change after creation,
/// and only through [`Task::with_completed`].
///
/// Older snapshots used numeric ids and, in the browser page, Portuguese
/// field names (`descricao`, `prioridade`, `concluida`, `dataCriacao`);
/// both are accepted when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    #[serde(alias = "descricao")]
    description: String,
    #[serde(alias = "prioridade")]
    priority: Priority,
    #[serde(alias = "concluida")]
    completed: bool,
    #[serde(alias = "dataCriacao")]
    created_at: DateTime<Utc>,
}

impl Task {
    /// Builds a pending task. Callers are expected to pass an already
    /// trimmed, non-empty description (see `collection::add_task`).
    pub(crate) fn new(
        id: TaskId,
        description: String,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description,
            priority,
            completed: false,
            created_at,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Copy of this task with the completion flag set to `completed`.
    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }
}
