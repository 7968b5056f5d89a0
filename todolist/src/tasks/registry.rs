//! Task registry for ordered, position-addressed task CRUD and statistics.
//!
//! `TaskRegistry` is the single owner of every [`Task`] in a session. It is
//! constructed explicitly and handed to whatever drives it (the menu session,
//! a test harness), so there is no process-wide task list.

use todolist_core::{Clock, LocalClock, Statistics, Task, TaskStatus};

use super::TaskError;

/// One row of a task listing, numbered the way callers address tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskListing<'a> {
    /// 1-based position of the task.
    pub number: usize,
    /// Task description.
    pub description: &'a str,
    /// Completion state.
    pub status: TaskStatus,
}

/// Ordered task list with insertion order preserved.
///
/// Numbers passed in and handed out are 1-based positions, not stable
/// identifiers. Descriptions need not be unique.
#[derive(Debug)]
pub struct TaskRegistry<C: Clock = LocalClock> {
    tasks: Vec<Task>,
    clock: C,
}

impl TaskRegistry<LocalClock> {
    /// Creates an empty registry dated by the local system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(LocalClock)
    }
}

impl Default for TaskRegistry<LocalClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TaskRegistry<C> {
    /// Creates an empty registry that reads "today" from `clock`.
    #[must_use]
    pub const fn with_clock(clock: C) -> Self {
        Self {
            tasks: Vec::new(),
            clock,
        }
    }

    /// Appends a new pending task and returns its 1-based number.
    ///
    /// The description is stored as given, whatever its length.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::DescriptionEmpty`] if the description is empty
    /// or only whitespace.
    pub fn add_task(&mut self, description: &str) -> Result<usize, TaskError> {
        if description.trim().is_empty() {
            return Err(TaskError::DescriptionEmpty);
        }

        self.tasks.push(Task::new(description, self.clock.today()));
        let number = self.tasks.len();
        tracing::debug!(number, "task added");
        Ok(number)
    }

    /// Returns every task in insertion order with its current number.
    ///
    /// An empty vec means the registry has no tasks.
    #[must_use]
    pub fn list_tasks(&self) -> Vec<TaskListing<'_>> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, task)| TaskListing {
                number: i + 1,
                description: task.description(),
                status: task.status(),
            })
            .collect()
    }

    /// Marks the task at `number` completed as of today.
    ///
    /// Completing an already-completed task succeeds and keeps its original
    /// completion date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::InvalidIndex`] if `number` is not in `1..=len`.
    pub fn complete_task(&mut self, number: usize) -> Result<&Task, TaskError> {
        let index = self.index_of(number)?;
        let today = self.clock.today();
        let task = &mut self.tasks[index];
        if task.mark_completed(today) {
            tracing::debug!(number, %today, "task completed");
        } else {
            tracing::debug!(number, "task already completed");
        }
        Ok(&*task)
    }

    /// Removes the task at `number` and returns it.
    ///
    /// Every later task moves down one position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::InvalidIndex`] if `number` is not in `1..=len`.
    pub fn remove_task(&mut self, number: usize) -> Result<Task, TaskError> {
        let index = self.index_of(number)?;
        let task = self.tasks.remove(index);
        tracing::debug!(number, remaining = self.tasks.len(), "task removed");
        Ok(task)
    }

    /// Computes counts, average completion time and first completion date.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics::collect(&self.tasks)
    }

    /// Returns the task at 1-based `number`, if any.
    #[must_use]
    pub fn get(&self, number: usize) -> Option<&Task> {
        number.checked_sub(1).and_then(|i| self.tasks.get(i))
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Converts a 1-based number into a vec index, or an error if out of range.
    fn index_of(&self, number: usize) -> Result<usize, TaskError> {
        if number == 0 || number > self.tasks.len() {
            return Err(TaskError::InvalidIndex {
                number,
                len: self.tasks.len(),
            });
        }
        Ok(number - 1)
    }
}
