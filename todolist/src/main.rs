//! Menu-driven in-memory todo list.
//!
//! Reads menu choices from stdin and prints results to stdout. Tasks live
//! only for the lifetime of the process. Configuration via CLI flags,
//! environment variables, or config file (`~/.config/todolist/config.toml`).
//!
//! ```bash
//! cargo run --bin todolist
//!
//! # European date style, debug logging
//! cargo run --bin todolist -- --date-format '%d.%m.%Y' --log-level debug
//! ```

use std::io;

use clap::Parser;

use todolist::config::{AppConfig, CliArgs};
use todolist::logging;
use todolist::session::Session;
use todolist::tasks::TaskRegistry;

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > env > config file > defaults).
    let config = match AppConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load configuration: {e}");
            AppConfig::default()
        }
    };

    // Logs go to a file; stdout belongs to the menu.
    let _log_guard = logging::init(&cli.log_level, cli.log_file.as_deref());

    tracing::info!(date_format = %config.date_format, "todolist starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), TaskRegistry::new())
        .with_date_format(config.date_format);
    let result = session.run();

    tracing::info!("todolist exiting");
    result
}
