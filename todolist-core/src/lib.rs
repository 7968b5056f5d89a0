//! Domain types for `todolist`.
//!
//! Holds the task entity with its one-way completion lifecycle, the
//! [`Clock`](clock::Clock) seam that decides what "today" is, and the
//! aggregate [`Statistics`](stats::Statistics) value reported over a list.

pub mod clock;
pub mod stats;
pub mod task;

pub use clock::{Clock, FixedClock, LocalClock};
pub use stats::Statistics;
pub use task::{Task, TaskStatus};
