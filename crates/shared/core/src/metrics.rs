//! Derived metrics over an in-memory task snapshot.
//!
//! Recomputed from scratch on every call; collections are small.

use std::collections::BTreeMap;

use crate::constants::{KNOWN_STATUSES, STATUS_COMPLETED, STATUS_IN_PROGRESS, STATUS_PENDING};
use crate::model::Task;

/// Task counts keyed by presentation status.
///
/// The known statuses are always present (possibly zero); any other status
/// seen in the input gets its own entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCounts(BTreeMap<String, usize>);

impl StatusCounts {
    pub fn get(&self, status: &str) -> usize {
        self.0.get(status).copied().unwrap_or(0)
    }

    pub fn pending(&self) -> usize {
        self.get(STATUS_PENDING)
    }

    pub fn in_progress(&self) -> usize {
        self.get(STATUS_IN_PROGRESS)
    }

    pub fn completed(&self) -> usize {
        self.get(STATUS_COMPLETED)
    }

    /// Sum over every status, known or not.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(status, count)| (status.as_str(), *count))
    }
}

/// Per-employee progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeStats {
    pub completed: usize,
    pub total: usize,
    /// Completion percentage in `0..=100`
    pub rate: u8,
}

/// Dashboard totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub completion_rate: u8,
}

pub fn count_by_status(tasks: &[Task]) -> StatusCounts {
    let mut counts: BTreeMap<String, usize> = KNOWN_STATUSES
        .iter()
        .map(|status| (status.to_string(), 0))
        .collect();

    for task in tasks {
        *counts.entry(task.status.clone()).or_insert(0) += 1;
    }

    StatusCounts(counts)
}

/// `round(100 * completed / total)`, or 0 for an empty collection.
pub fn completion_rate(tasks: &[Task]) -> u8 {
    let completed = tasks.iter().filter(|t| t.is_completed()).count();
    percent(completed, tasks.len())
}

/// Stats over the tasks whose `assigned_to` equals `employee_id`.
pub fn employee_stats(tasks: &[Task], employee_id: &str) -> EmployeeStats {
    let (completed, total) = tasks
        .iter()
        .filter(|t| t.assigned_to == employee_id)
        .fold((0, 0), |(completed, total), t| {
            (completed + usize::from(t.is_completed()), total + 1)
        });

    EmployeeStats {
        completed,
        total,
        rate: percent(completed, total),
    }
}

pub fn summarize(tasks: &[Task]) -> TaskSummary {
    let counts = count_by_status(tasks);
    TaskSummary {
        total: tasks.len(),
        pending: counts.pending(),
        in_progress: counts.in_progress(),
        completed: counts.completed(),
        completion_rate: completion_rate(tasks),
    }
}

/// Rounds half up, matching `Math.round` for non-negative values.
fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let rounded = (200 * part + whole) / (2 * whole);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}
