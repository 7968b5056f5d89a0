//! In-memory task list management.
//!
//! Provides the ordered [`TaskRegistry`] that owns every task for the
//! session. Tasks are addressed by their 1-based position, so removing a
//! task renumbers every task after it.

pub mod registry;

pub use registry::{TaskListing, TaskRegistry};

use thiserror::Error;

/// Errors that can occur during task operations.
///
/// All of them are recoverable: the registry is left unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// Task description is empty or only whitespace.
    #[error("task description cannot be empty")]
    DescriptionEmpty,
    /// Task number is outside `1..=len`.
    #[error("invalid task number {number} (list has {len} tasks)")]
    InvalidIndex {
        /// The 1-based number that was requested.
        number: usize,
        /// Number of tasks at the time of the request.
        len: usize,
    },
}
