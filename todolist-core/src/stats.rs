//! Aggregate statistics over a task list.

use chrono::NaiveDate;

use crate::task::Task;

/// Counts and completion-time figures for a list of tasks.
///
/// `average_days_to_complete` and `first_completion_date` are `None` when no
/// task has been completed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Number of tasks in the list.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// Number of pending tasks (`total - completed`).
    pub incomplete: usize,
    /// Mean creation-to-completion time, in days, over completed tasks.
    pub average_days_to_complete: Option<f64>,
    /// Earliest completion date among completed tasks.
    pub first_completion_date: Option<NaiveDate>,
}

impl Statistics {
    /// Computes statistics in a single pass over `tasks`.
    ///
    /// When several tasks share the earliest completion date only the date
    /// is reported, so which one is found first does not matter.
    #[must_use]
    pub fn collect<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut total = 0;
        let mut completed = 0;
        let mut total_days: i64 = 0;
        let mut first_completion_date: Option<NaiveDate> = None;

        for task in tasks {
            total += 1;
            let Some(done) = task.completed_date() else {
                continue;
            };
            completed += 1;
            if let Some(days) = task.days_to_complete().filter(|d| *d >= 0) {
                total_days += days;
            }
            first_completion_date = Some(first_completion_date.map_or(done, |d| d.min(done)));
        }

        #[allow(clippy::cast_precision_loss)]
        let average_days_to_complete =
            (completed > 0).then(|| total_days as f64 / completed as f64);

        Self {
            total,
            completed,
            incomplete: total - completed,
            average_days_to_complete,
            first_completion_date,
        }
    }
}
