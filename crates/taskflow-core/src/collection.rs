//! Task collection operations.
//!
//! Every function here takes the current collection by shared reference and
//! returns a new `Vec<Task>` (or a derived value). Inputs are never modified.
//! The only fallible operation is [`add_task`]; unknown ids and empty search
//! terms fall back to a no-op / pass-through instead of erroring.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::domain::stats::completion_rate;
use crate::domain::{Priority, Task, TaskId, TaskStats, ValidationError};
use crate::ports::{Clock, IdGenerator};

/// Append a new pending task.
///
/// The description is stored trimmed. The id is regenerated until it does
/// not collide with any task already in `tasks`.
pub fn add_task<C, G>(
    tasks: &[Task],
    description: &str,
    priority: Priority,
    clock: &C,
    ids: &G,
) -> Result<Vec<Task>, ValidationError>
where
    C: Clock + ?Sized,
    G: IdGenerator + ?Sized,
{
    append_task(tasks, description, priority, clock, ids).map(|(next, _)| next)
}

/// Same as [`add_task`], also returning the id given to the new task.
pub fn append_task<C, G>(
    tasks: &[Task],
    description: &str,
    priority: Priority,
    clock: &C,
    ids: &G,
) -> Result<(Vec<Task>, TaskId), ValidationError>
where
    C: Clock + ?Sized,
    G: IdGenerator + ?Sized,
{
    let description = validate_description(description)?;

    let id = loop {
        let candidate = ids.generate_task_id();
        if find_task(tasks, candidate).is_none() {
            break candidate;
        }
    };

    let mut next = Vec::with_capacity(tasks.len() + 1);
    next.extend_from_slice(tasks);
    next.push(Task::new(id, description.to_string(), priority, clock.now()));
    Ok((next, id))
}

/// Trimmed description, or `EmptyDescription` if nothing is left.
pub fn validate_description(description: &str) -> Result<&str, ValidationError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(description)
}

/// Set the completion flag of the task matching `id`.
pub fn toggle_task_completion(tasks: &[Task], id: TaskId, completed: bool) -> Vec<Task> {
    tasks
        .iter()
        .map(|t| {
            if t.id() == id {
                t.with_completed(completed)
            } else {
                t.clone()
            }
        })
        .collect()
}

/// Shorthand for `toggle_task_completion(tasks, id, true)`.
pub fn mark_completed(tasks: &[Task], id: TaskId) -> Vec<Task> {
    toggle_task_completion(tasks, id, true)
}

/// Invert the completion flag of the task matching `id`.
pub fn flip_task_completion(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks
        .iter()
        .map(|t| {
            if t.id() == id {
                t.with_completed(!t.is_completed())
            } else {
                t.clone()
            }
        })
        .collect()
}

pub fn filter_by_status(tasks: &[Task], completed: bool) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.is_completed() == completed)
        .cloned()
        .collect()
}

pub fn filter_by_priority(tasks: &[Task], priority: Priority) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.priority() == priority)
        .cloned()
        .collect()
}

pub fn pending_tasks(tasks: &[Task]) -> Vec<Task> {
    filter_by_status(tasks, false)
}

pub fn completed_tasks(tasks: &[Task]) -> Vec<Task> {
    filter_by_status(tasks, true)
}

/// Highest priority first. Ties keep their input order.
pub fn sort_by_priority(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(|t| Reverse(t.priority().weight()));
    sorted
}

/// Newest first. Ties keep their input order.
pub fn sort_by_date(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(|t| Reverse(t.created_at()));
    sorted
}

/// Order used when listing tasks to a person: pending before completed,
/// then by priority, then newest first.
pub fn sort_for_display(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(|t| {
        (
            t.is_completed(),
            Reverse(t.priority().weight()),
            Reverse(t.created_at()),
        )
    });
    sorted
}

pub fn remove_task(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks.iter().filter(|t| t.id() != id).cloned().collect()
}

pub fn find_task(tasks: &[Task], id: TaskId) -> Option<&Task> {
    tasks.iter().find(|t| t.id() == id)
}

pub fn task_stats(tasks: &[Task]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.is_completed()).count();

    let by_priority = tasks.iter().fold(BTreeMap::new(), |mut acc, t| {
        *acc.entry(t.priority()).or_insert(0) += 1;
        acc
    });

    TaskStats {
        total,
        completed,
        pending: total - completed,
        completion_rate: completion_rate(completed, total),
        by_priority,
    }
}

/// Case-insensitive substring search over descriptions.
///
/// A missing or blank term returns the whole collection unchanged.
pub fn search_tasks(tasks: &[Task], term: Option<&str>) -> Vec<Task> {
    let term = match term.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_lowercase(),
        _ => return tasks.to_vec(),
    };

    tasks
        .iter()
        .filter(|t| t.description().to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// Optionally filter by status, then sort by priority.
pub fn tasks_by_priority(tasks: &[Task], completed: Option<bool>) -> Vec<Task> {
    match completed {
        Some(c) => sort_by_priority(&filter_by_status(tasks, c)),
        None => sort_by_priority(tasks),
    }
}
