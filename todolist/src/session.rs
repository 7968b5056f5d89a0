//! Interactive menu session over a line-oriented reader and a writer.
//!
//! The session owns the [`TaskRegistry`] for its whole lifetime. It prints
//! the menu, reads one answer per line, builds a [`Command`] and reports the
//! [`Outcome`] or error. Input mistakes are reported and the loop continues;
//! only I/O failures end [`Session::run`] with an error.

use std::io::{self, BufRead, Write};

use todolist_core::{Clock, LocalClock};

use crate::menu::{self, Command, CommandError, MenuChoice, Outcome, render};
use crate::tasks::TaskRegistry;

/// Default chrono format used for calendar dates.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A menu-driven session bound to one input and one output stream.
pub struct Session<R, W, C: Clock = LocalClock> {
    input: R,
    output: W,
    registry: TaskRegistry<C>,
    date_format: String,
}

impl<R: BufRead, W: Write, C: Clock> Session<R, W, C> {
    /// Creates a session that drives `registry` from `input`.
    pub fn new(input: R, output: W, registry: TaskRegistry<C>) -> Self {
        Self {
            input,
            output,
            registry,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Sets the chrono format used when printing dates.
    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    pub const fn registry(&self) -> &TaskRegistry<C> {
        &self.registry
    }

    /// Consumes the session and returns its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", render::WELCOME)?;

        loop {
            render::menu(&mut self.output)?;
            self.output.flush()?;

            let Some(next) = self.next_command()? else {
                tracing::info!("input closed, ending session");
                writeln!(self.output)?;
                writeln!(self.output, "{}", render::FAREWELL)?;
                return Ok(());
            };

            match next.and_then(|command| menu::dispatch(&mut self.registry, command)) {
                Ok(Outcome::Exit) => {
                    tracing::info!("session ended by user");
                    render::outcome(&mut self.output, &Outcome::Exit, &self.date_format)?;
                    return Ok(());
                }
                Ok(outcome) => render::outcome(&mut self.output, &outcome, &self.date_format)?,
                Err(e) => {
                    tracing::warn!(error = %e, "command rejected");
                    render::error(&mut self.output, &e)?;
                }
            }
        }
    }

    /// Reads a menu choice plus any follow-up answer and builds a command.
    ///
    /// Blank lines at the menu prompt are skipped. Returns `Ok(None)` when
    /// input ends before the command is complete.
    fn next_command(&mut self) -> io::Result<Option<Result<Command, CommandError>>> {
        let line = loop {
            match self.read_line()? {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => {}
                Some(line) => break line,
            }
        };
        let choice = match MenuChoice::parse(&line) {
            Ok(choice) => choice,
            Err(e) => return Ok(Some(Err(e))),
        };

        let command = match choice {
            MenuChoice::AddTask => {
                let Some(description) = self.prompt(render::DESCRIPTION_PROMPT)? else {
                    return Ok(None);
                };
                Ok(Command::Add(description))
            }
            MenuChoice::ViewTasks => Ok(Command::List),
            MenuChoice::CompleteTask => {
                let Some(answer) = self.prompt(render::COMPLETE_PROMPT)? else {
                    return Ok(None);
                };
                menu::parse_task_number(&answer).map(Command::Complete)
            }
            MenuChoice::RemoveTask => {
                let Some(answer) = self.prompt(render::REMOVE_PROMPT)? else {
                    return Ok(None);
                };
                menu::parse_task_number(&answer).map(Command::Remove)
            }
            MenuChoice::ShowStatistics => Ok(Command::Statistics),
            MenuChoice::Exit => Ok(Command::Exit),
        };
        Ok(Some(command))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line without its line terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
