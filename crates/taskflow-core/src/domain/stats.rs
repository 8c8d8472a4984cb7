//! Aggregate counts over a task collection.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Priority;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,

    /// Percentage of completed tasks, rounded to one decimal. `0.0` when empty.
    pub completion_rate: f64,

    /// Count per priority. Priorities with no tasks are omitted.
    pub by_priority: BTreeMap<Priority, usize>,
}

impl TaskStats {
    pub fn count_for(&self, priority: Priority) -> usize {
        self.by_priority.get(&priority).copied().unwrap_or(0)
    }
}

/// Percentage rounded to one decimal place.
pub(crate) fn completion_rate(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = completed as f64 / total as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

impl fmt::Display for TaskStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total:           {}", self.total)?;
        writeln!(f, "Completed:       {}", self.completed)?;
        writeln!(f, "Pending:         {}", self.pending)?;
        write!(f, "Completion rate: {:.1}%", self.completion_rate)?;
        if !self.by_priority.is_empty() {
            write!(f, "\nBy priority:")?;
            for (priority, count) in &self.by_priority {
                write!(f, "\n  {priority}: {count}")?;
            }
        }
        Ok(())
    }
}
