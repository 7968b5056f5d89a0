//! The task entity and its completion lifecycle.
//!
//! A [`Task`] starts [`TaskStatus::Pending`] and moves to
//! [`TaskStatus::Completed`] at most once. The completion date is recorded on
//! that first transition and never changes afterwards.

use chrono::NaiveDate;

/// Completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    /// Task has not been completed yet.
    Pending,
    /// Task has been completed. Terminal.
    Completed,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Not Completed"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// A single to-do item.
///
/// The completion date is present exactly when the task is completed; both
/// are set together by [`Task::mark_completed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    created_date: NaiveDate,
    completed_date: Option<NaiveDate>,
}

impl Task {
    /// Creates a pending task created on `today`.
    #[must_use]
    pub fn new(description: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            description: description.into(),
            created_date: today,
            completed_date: None,
        }
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_date.is_some()
    }

    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        if self.is_completed() {
            TaskStatus::Completed
        } else {
            TaskStatus::Pending
        }
    }

    /// Returns the calendar date the task was created on.
    #[must_use]
    pub const fn created_date(&self) -> NaiveDate {
        self.created_date
    }

    /// Returns the calendar date the task was completed on, if it has been.
    #[must_use]
    pub const fn completed_date(&self) -> Option<NaiveDate> {
        self.completed_date
    }

    /// Marks the task completed on `today`.
    ///
    /// Returns `true` if this call performed the transition. Calling it on
    /// an already-completed task is a no-op and keeps the original date.
    pub fn mark_completed(&mut self, today: NaiveDate) -> bool {
        if self.completed_date.is_some() {
            return false;
        }
        self.completed_date = Some(today);
        true
    }

    /// Number of calendar days between creation and completion.
    ///
    /// Returns `None` while the task is still pending.
    #[must_use]
    pub fn days_to_complete(&self) -> Option<i64> {
        self.completed_date
            .map(|done| (done - self.created_date).num_days())
    }
}
