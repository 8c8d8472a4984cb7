//! View helpers for the presentation layer: list filters, task lines and
//! the pending counter.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::collection;
use crate::domain::{Priority, Task};

/// Which slice of the collection a list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewFilter {
    #[default]
    All,
    Pending,
    Completed,
    Priority(Priority),
}

impl ViewFilter {
    pub fn apply(self, tasks: &[Task]) -> Vec<Task> {
        match self {
            ViewFilter::All => tasks.to_vec(),
            ViewFilter::Pending => collection::pending_tasks(tasks),
            ViewFilter::Completed => collection::completed_tasks(tasks),
            ViewFilter::Priority(p) => collection::filter_by_priority(tasks, p),
        }
    }
}

impl fmt::Display for ViewFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewFilter::All => f.write_str("all"),
            ViewFilter::Pending => f.write_str("pending"),
            ViewFilter::Completed => f.write_str("completed"),
            ViewFilter::Priority(p) => fmt::Display::fmt(p, f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter '{0}', use all, pending, completed, high, medium or low")]
pub struct ParseViewFilterError(String);

impl FromStr for ViewFilter {
    type Err = ParseViewFilterError;

    /// `all`, `pending`, `completed` / `done`, or a priority label,
    /// optionally written `p-<label>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "all" => Ok(ViewFilter::All),
            "pending" => Ok(ViewFilter::Pending),
            "completed" | "done" => Ok(ViewFilter::Completed),
            other => {
                let label = other.strip_prefix("p-").unwrap_or(other);
                label
                    .parse::<Priority>()
                    .map(ViewFilter::Priority)
                    .map_err(|_| ParseViewFilterError(s.to_string()))
            }
        }
    }
}

/// One line per task, e.g. `[x] HIGH    Write report  (01 Jun 09:00)  task-01HN...`.
pub fn render_task(task: &Task) -> String {
    let mark = if task.is_completed() { 'x' } else { ' ' };
    format!(
        "[{mark}] {:<7} {}  ({})  {}",
        task.priority().as_str().to_uppercase(),
        task.description(),
        task.created_at().format("%d %b %H:%M"),
        task.id(),
    )
}

/// `"1 pending task"`, `"3 pending tasks"`.
pub fn pending_summary(tasks: &[Task]) -> String {
    let pending = tasks.iter().filter(|t| !t.is_completed()).count();
    let plural = if pending == 1 { "" } else { "s" };
    format!("{pending} pending task{plural}")
}
