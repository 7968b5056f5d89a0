//! Menu commands and their dispatch onto a [`TaskRegistry`].
//!
//! Input handling is split in two: the session turns raw lines into a
//! [`Command`], and [`dispatch`] applies that command to the registry and
//! hands back a display-ready [`Outcome`]. Anything that can build a
//! `Command` (the interactive loop, tests) can drive the registry this way.

pub mod render;

use todolist_core::{Clock, Statistics, Task};

use crate::tasks::{TaskError, TaskListing, TaskRegistry};

/// Errors reported back to the user. None of them end the session.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    /// Menu selection was not one of the listed choices.
    #[error("invalid menu choice: {0:?}")]
    InvalidChoice(String),

    /// A task number prompt received something that is not a positive integer.
    #[error("malformed task number: {0:?}")]
    MalformedNumber(String),

    /// The registry rejected the operation.
    #[error(transparent)]
    Task(#[from] TaskError),
}

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTask,
    ViewTasks,
    CompleteTask,
    RemoveTask,
    ShowStatistics,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order.
    pub const ALL: [Self; 6] = [
        Self::AddTask,
        Self::ViewTasks,
        Self::CompleteTask,
        Self::RemoveTask,
        Self::ShowStatistics,
        Self::Exit,
    ];

    /// Parses a menu selection such as `"3"`. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidChoice`] for anything that is not a
    /// listed menu number.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let trimmed = input.trim();
        match trimmed.parse::<u8>() {
            Ok(n @ 1..=6) => Ok(Self::ALL[usize::from(n - 1)]),
            _ => Err(CommandError::InvalidChoice(trimmed.to_string())),
        }
    }

    /// The number the user types to select this choice.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::AddTask => 1,
            Self::ViewTasks => 2,
            Self::CompleteTask => 3,
            Self::RemoveTask => 4,
            Self::ShowStatistics => 5,
            Self::Exit => 6,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AddTask => "Add Task",
            Self::ViewTasks => "View Tasks",
            Self::CompleteTask => "Mark Task as Completed",
            Self::RemoveTask => "Remove Task",
            Self::ShowStatistics => "Show Statistics",
            Self::Exit => "Exit",
        }
    }
}

/// A fully parsed request against the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a task with the given description.
    Add(String),
    /// List all tasks.
    List,
    /// Complete the task with the given 1-based number.
    Complete(usize),
    /// Remove the task with the given 1-based number.
    Remove(usize),
    /// Report statistics.
    Statistics,
    /// End the session.
    Exit,
}

/// Result of a successfully dispatched [`Command`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'a> {
    Added {
        number: usize,
    },
    Listing(Vec<TaskListing<'a>>),
    Completed {
        number: usize,
    },
    Removed(Task),
    Statistics(Statistics),
    Exit,
}

/// Parses the answer to a task number prompt.
///
/// # Errors
///
/// Returns [`CommandError::MalformedNumber`] if `input` is not a
/// non-negative integer. Range checking is left to the registry.
pub fn parse_task_number(input: &str) -> Result<usize, CommandError> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| CommandError::MalformedNumber(trimmed.to_string()))
}

/// Applies `command` to `registry`.
///
/// # Errors
///
/// Returns [`CommandError::Task`] when the registry rejects the command.
/// The registry is unchanged in that case.
pub fn dispatch<C: Clock>(
    registry: &mut TaskRegistry<C>,
    command: Command,
) -> Result<Outcome<'_>, CommandError> {
    let outcome = match command {
        Command::Add(description) => Outcome::Added {
            number: registry.add_task(&description)?,
        },
        Command::List => Outcome::Listing(registry.list_tasks()),
        Command::Complete(number) => {
            registry.complete_task(number)?;
            Outcome::Completed { number }
        }
        Command::Remove(number) => Outcome::Removed(registry.remove_task(number)?),
        Command::Statistics => Outcome::Statistics(registry.statistics()),
        Command::Exit => Outcome::Exit,
    };
    Ok(outcome)
}
