//! # Storage Layer
//!
//! The [`DataStore`] trait is how a [`Directory`] gets in and out of
//! persistent storage. The directory is always read whole at startup and
//! written whole after every change and at the end of a session; there are
//! no partial updates.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file holding every contact
//!   (`name`, `phones`, optional `birthday`) as an array, in directory order.
//! - [`memory::InMemoryStore`]: keeps the last saved contacts in memory, for tests.
//!
//! Stored values go through the same field validation as user input, so a
//! hand-edited file with a bad phone number fails to load instead of
//! smuggling the value in. Such a file is renamed to `<file>.bak` and the
//! session starts empty.

use crate::directory::Directory;
use crate::error::Result;
use crate::model::Contact;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read every stored contact. `None` means nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<Contact>>>;

    /// Replace the stored contacts with the directory's contents.
    fn save(&mut self, directory: &Directory) -> Result<()>;

    /// Move data that failed to load out of the way, so that saving never
    /// overwrites it. Returns where it was moved to, if anywhere.
    fn set_aside(&mut self) -> Result<Option<PathBuf>>;
}
