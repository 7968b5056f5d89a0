//! Property-based tests for the `Task` completion lifecycle.
//!
//! Uses proptest to verify:
//! 1. `days_to_complete` equals the calendar distance between the two dates.
//! 2. Completion is one-way and the first completion date sticks.
//! 3. Statistics over completed tasks match a direct computation.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use todolist_core::{Statistics, Task, TaskStatus};

/// Strategy for dates within a few decades of 2000-01-01.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..20_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

proptest! {
    #[test]
    fn days_to_complete_matches_gap(created in arb_date(), gap in 0u64..5_000) {
        let done = created.checked_add_days(Days::new(gap)).unwrap();
        let mut task = Task::new("t", created);
        prop_assert_eq!(task.days_to_complete(), None);
        task.mark_completed(done);
        prop_assert_eq!(task.days_to_complete(), Some(i64::try_from(gap).unwrap()));
    }

    #[test]
    fn first_completion_sticks(created in arb_date(), later in prop::collection::vec(arb_date(), 1..10)) {
        let mut task = Task::new("t", created);
        let first = later[0];
        for date in &later {
            task.mark_completed(*date);
        }
        prop_assert_eq!(task.status(), TaskStatus::Completed);
        prop_assert_eq!(task.completed_date(), Some(first));
    }

    #[test]
    fn statistics_match_direct_computation(
        spans in prop::collection::vec((arb_date(), 0u64..365), 1..30),
    ) {
        let tasks: Vec<Task> = spans
            .iter()
            .map(|(created, gap)| {
                let mut task = Task::new("t", *created);
                task.mark_completed(created.checked_add_days(Days::new(*gap)).unwrap());
                task
            })
            .collect();

        let stats = Statistics::collect(&tasks);
        #[allow(clippy::cast_precision_loss)]
        let expected_avg =
            spans.iter().map(|(_, gap)| *gap as f64).sum::<f64>() / spans.len() as f64;
        let expected_first = tasks.iter().filter_map(Task::completed_date).min();

        prop_assert_eq!(stats.completed, spans.len());
        prop_assert_eq!(stats.incomplete, 0);
        prop_assert!((stats.average_days_to_complete.unwrap() - expected_avg).abs() < 1e-9);
        prop_assert_eq!(stats.first_completion_date, expected_first);
    }
}
