//! # API Facade
//!
//! [`ContactsApi`] is the single entry point the UI talks to. It owns the
//! session's [`Directory`] and the [`DataStore`] it came from, dispatches
//! parsed [`Command`]s to `commands/*.rs`, and saves after every command that
//! changes the directory, so an interrupted session keeps its edits.
//!
//! Command functions return `Result<CmdResult>` and never handle their own
//! errors. [`ContactsApi::handle_line`] is the one place where an error turns
//! into a user-facing message (through [`describe_error`]) so the session can
//! carry on.
//!
//! Like the rest of the library this layer does no terminal I/O: it returns
//! data, and the binary decides how to print it.

use crate::commands;
use crate::directory::Directory;
use crate::error::{CbookError, Result};
use crate::field::today;
use crate::input::Command;
use crate::store::DataStore;
use tracing::{debug, warn};

pub struct ContactsApi<S: DataStore> {
    store: S,
    directory: Directory,
    page_size: usize,
}

impl<S: DataStore> ContactsApi<S> {
    /// Hydrates the directory from `store`. Unreadable data starts an empty book.
    pub fn new(mut store: S, page_size: usize) -> Self {
        let directory = Directory::load(&mut store);
        Self {
            store,
            directory,
            page_size,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.directory, name, phone)
    }

    pub fn change_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::change::run(&mut self.directory, name, phone)
    }

    pub fn search(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.directory, term)
    }

    pub fn show_all(&self) -> Result<CmdResult> {
        commands::list::run(&self.directory, self.page_size)
    }

    pub fn set_birthday(&mut self, name: &str, date: &str) -> Result<CmdResult> {
        commands::birthday::run(&mut self.directory, name, date)
    }

    pub fn days_to_birthday(&self, name: &str) -> Result<CmdResult> {
        commands::days::run(&self.directory, name, today())
    }

    pub fn remove_contact(&mut self, name: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.directory, name)
    }

    pub fn dispatch(&mut self, command: Command) -> Result<CmdResult> {
        debug!(?command, "dispatching");
        match command {
            Command::Hello => {
                Ok(CmdResult::default().with_message(CmdMessage::info("How can I help you?")))
            }
            Command::Add { name, phone } => self.add_contact(&name, &phone),
            Command::Change { name, phone } => self.change_phone(&name, &phone),
            Command::ShowAll => self.show_all(),
            Command::Search(term) => self.search(&term),
            Command::Remove(name) => self.remove_contact(&name),
            Command::Birthday { name, date } => self.set_birthday(&name, &date),
            Command::DaysToBirthday(name) => self.days_to_birthday(&name),
            Command::Exit => Ok(CmdResult::default()
                .with_message(CmdMessage::info("Good bye!"))
                .exiting()),
            Command::Unknown => {
                Ok(CmdResult::default().with_message(CmdMessage::warning("Unknown command name")))
            }
        }
    }

    /// Parses and runs one input line. Failures come back as an error message.
    ///
    /// A successful editing command is saved straight away. If that save
    /// fails the edit stays in memory and a warning is added to the result.
    pub fn handle_line(&mut self, line: &str) -> CmdResult {
        let outcome = line.parse::<Command>().and_then(|command| {
            let mutating = command.is_mutating();
            self.dispatch(command).map(|result| (result, mutating))
        });

        match outcome {
            Ok((mut result, mutating)) => {
                if mutating {
                    if let Err(e) = self.save() {
                        warn!(error = %e, "could not save contacts");
                        result.add_message(CmdMessage::warning(format!(
                            "Could not save contacts: {}",
                            e
                        )));
                    }
                }
                result
            }
            Err(e) => {
                debug!(error = %e, "command failed");
                CmdResult::default().with_message(CmdMessage::error(describe_error(&e)))
            }
        }
    }

    pub fn save(&mut self) -> Result<()> {
        self.directory.save(&mut self.store)
    }
}

/// The message shown to the user for a failed command.
pub fn describe_error(err: &CbookError) -> String {
    match err {
        CbookError::UnknownContact(_) => "Wrong name".to_string(),
        other => other.to_string(),
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
