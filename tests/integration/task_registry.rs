//! Integration tests for the task registry and command dispatch.
//!
//! Drives `TaskRegistry` through the public API with a pinned clock so that
//! completion times spanning several days can be checked exactly.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::NaiveDate;
use todolist::menu::{Command, CommandError, Outcome, dispatch};
use todolist::tasks::{TaskError, TaskRegistry};
use todolist_core::{FixedClock, TaskStatus};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn descriptions<C: todolist_core::Clock>(registry: &TaskRegistry<C>) -> Vec<&str> {
    registry.tasks().iter().map(|t| t.description()).collect()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn same_day_completion_scenario() {
    let clock = FixedClock::new(today());
    let mut registry = TaskRegistry::with_clock(&clock);
    registry.add_task("Buy milk").unwrap();
    registry.add_task("Write report").unwrap();

    let task = registry.complete_task(1).unwrap();
    assert_eq!(task.days_to_complete(), Some(0));

    let stats = registry.statistics();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.incomplete, 1);
    assert_eq!(stats.average_days_to_complete, Some(0.0));
    assert_eq!(stats.first_completion_date, Some(today()));
}

#[test]
fn invalid_index_on_two_task_list() {
    let clock = FixedClock::new(today());
    let mut registry = TaskRegistry::with_clock(&clock);
    registry.add_task("Buy milk").unwrap();
    registry.add_task("Write report").unwrap();

    assert_eq!(
        registry.complete_task(5).unwrap_err(),
        TaskError::InvalidIndex { number: 5, len: 2 }
    );
    assert_eq!(registry.len(), 2);
    assert!(registry.tasks().iter().all(|t| !t.is_completed()));
}

#[test]
fn removal_renumbers_later_tasks() {
    let clock = FixedClock::new(today());
    let mut registry = TaskRegistry::with_clock(&clock);
    for d in ["A", "B", "C"] {
        registry.add_task(d).unwrap();
    }

    registry.remove_task(1).unwrap();
    assert_eq!(descriptions(&registry), vec!["B", "C"]);

    // "B" is now task 1.
    registry.complete_task(1).unwrap();
    assert_eq!(registry.get(1).unwrap().description(), "B");
    assert_eq!(registry.get(1).unwrap().status(), TaskStatus::Completed);
    assert_eq!(registry.get(2).unwrap().status(), TaskStatus::Pending);
}

#[test]
fn multi_day_average_and_first_completion() {
    let clock = FixedClock::new(today());
    let mut registry = TaskRegistry::with_clock(&clock);
    registry.add_task("Plan trip").unwrap();
    clock.advance_days(1);
    registry.add_task("Book hotel").unwrap();
    registry.add_task("Pack bags").unwrap();

    clock.advance_days(2);
    registry.complete_task(2).unwrap(); // 2 days
    clock.advance_days(3);
    registry.complete_task(1).unwrap(); // 6 days

    let stats = registry.statistics();
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.incomplete, 1);
    assert_eq!(stats.average_days_to_complete, Some(4.0));
    assert_eq!(
        stats.first_completion_date,
        NaiveDate::from_ymd_opt(2024, 6, 13)
    );
}

#[test]
fn completing_twice_keeps_first_completion_date() {
    let clock = FixedClock::new(today());
    let mut registry = TaskRegistry::with_clock(&clock);
    registry.add_task("Water plants").unwrap();
    registry.complete_task(1).unwrap();
    clock.advance_days(7);
    registry.complete_task(1).unwrap();

    assert_eq!(registry.get(1).unwrap().completed_date(), Some(today()));
    assert_eq!(registry.statistics().average_days_to_complete, Some(0.0));
}

#[test]
fn removing_completed_task_updates_statistics() {
    let clock = FixedClock::new(today());
    let mut registry = TaskRegistry::with_clock(&clock);
    registry.add_task("A").unwrap();
    registry.add_task("B").unwrap();
    registry.complete_task(1).unwrap();
    registry.remove_task(1).unwrap();

    let stats = registry.statistics();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.completed, 0);
    assert_eq!(stats.average_days_to_complete, None);
    assert_eq!(stats.first_completion_date, None);
}

#[test]
fn dispatch_round_of_commands() {
    let clock = FixedClock::new(today());
    let mut registry = TaskRegistry::with_clock(&clock);

    assert_eq!(
        dispatch(&mut registry, Command::Add("Buy milk".into())).unwrap(),
        Outcome::Added { number: 1 }
    );
    assert_eq!(
        dispatch(&mut registry, Command::Complete(1)).unwrap(),
        Outcome::Completed { number: 1 }
    );
    assert_eq!(
        dispatch(&mut registry, Command::Remove(0)).unwrap_err(),
        CommandError::Task(TaskError::InvalidIndex { number: 0, len: 1 })
    );
    assert_eq!(
        dispatch(&mut registry, Command::Add(String::new())).unwrap_err(),
        CommandError::Task(TaskError::DescriptionEmpty)
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn long_descriptions_are_accepted() {
    let mut registry = TaskRegistry::new();
    let description = "x".repeat(257);

    assert_eq!(registry.add_task(&description).unwrap(), 1);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(1).unwrap().description(), description);
    assert_eq!(registry.get(1).unwrap().status(), TaskStatus::Pending);
}
