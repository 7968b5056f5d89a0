//! Menu-driven in-memory todo list library.

pub mod config;
pub mod logging;
pub mod menu;
pub mod session;
pub mod tasks;
