//! Text rendering for the menu, outcomes and errors.

use std::io::{self, Write};

use todolist_core::Statistics;

use super::{CommandError, MenuChoice, Outcome};
use crate::tasks::{TaskError, TaskListing};

pub const WELCOME: &str = "Welcome to the Todo List Application!";
pub const FAREWELL: &str = "Thank you for using the Todo List Application. Goodbye!";
const SEPARATOR: &str = "------------------------------";

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const DESCRIPTION_PROMPT: &str = "Enter task description: ";
pub const COMPLETE_PROMPT: &str = "Enter the task number to mark as completed: ";
pub const REMOVE_PROMPT: &str = "Enter the task number to remove: ";

/// Writes the main menu followed by the choice prompt (no trailing newline).
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.number(), choice.label())?;
    }
    write!(out, "{CHOICE_PROMPT}")
}

/// Writes the user-facing report for a dispatched command.
///
/// `date_format` is a chrono format string used for calendar dates and is
/// expected to have been checked with [`crate::config::validate_date_format`].
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn outcome(out: &mut impl Write, outcome: &Outcome<'_>, date_format: &str) -> io::Result<()> {
    match outcome {
        Outcome::Added { .. } => writeln!(out, "Task added successfully."),
        Outcome::Listing(rows) => listing(out, rows),
        Outcome::Completed { .. } => writeln!(out, "Task marked as completed."),
        Outcome::Removed(_) => writeln!(out, "Task removed successfully."),
        Outcome::Statistics(stats) => statistics(out, stats, date_format),
        Outcome::Exit => writeln!(out, "{FAREWELL}"),
    }
}

/// Writes the message for a rejected command.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn error(out: &mut impl Write, err: &CommandError) -> io::Result<()> {
    match err {
        CommandError::InvalidChoice(_) => writeln!(out, "Invalid choice. Please try again."),
        CommandError::MalformedNumber(_) | CommandError::Task(TaskError::InvalidIndex { .. }) => {
            writeln!(out, "Invalid task number. Please try again.")
        }
        CommandError::Task(TaskError::DescriptionEmpty) => {
            writeln!(out, "Task description cannot be empty. Please try again.")
        }
    }
}

fn listing(out: &mut impl Write, rows: &[TaskListing<'_>]) -> io::Result<()> {
    writeln!(out, "Todo List:")?;
    if rows.is_empty() {
        return writeln!(out, "No tasks found.");
    }
    for row in rows {
        writeln!(out, "{}. {} - {}", row.number, row.description, row.status)?;
    }
    Ok(())
}

fn statistics(out: &mut impl Write, stats: &Statistics, date_format: &str) -> io::Result<()> {
    writeln!(out, "Todo List Statistics:")?;
    writeln!(out, "Total tasks: {}", stats.total)?;
    writeln!(out, "Completed tasks: {}", stats.completed)?;
    writeln!(out, "Incomplete tasks: {}", stats.incomplete)?;
    if let Some(average) = stats.average_days_to_complete {
        writeln!(
            out,
            "Average task completion time: {} days",
            format_days(average)
        )?;
    }
    if let Some(date) = stats.first_completion_date {
        writeln!(out, "First completion date: {}", date.format(date_format))?;
    }
    Ok(())
}

/// Formats a day count so whole numbers keep their decimal point (`2.0`).
fn format_days(days: f64) -> String {
    format!("{days:?}")
}
