//! # Directory
//!
//! The keyed collection of [`Contact`]s. A contact's name is its key: adding a
//! contact whose name is already present replaces the stored one in place, so
//! there is never more than one entry per name.
//!
//! Contacts keep their insertion order. That order drives [`Directory::iter`],
//! [`Directory::search`] results and [`Directory::paginate`] pages.
//!
//! The directory does not know where it is stored. [`Directory::load`] and
//! [`Directory::save`] hand it to a [`DataStore`].

use crate::error::{CbookError, Result};
use crate::model::Contact;
use crate::store::DataStore;
use std::slice::{Chunks, Iter};
use tracing::{info, warn};

pub const DEFAULT_PAGE_SIZE: usize = 2;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    contacts: Vec<Contact>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the directory from `store`.
    ///
    /// Missing data gives an empty directory. So does data that cannot be
    /// read, after logging a warning; that data is set aside first so no later
    /// save can overwrite it.
    pub fn load<S: DataStore>(store: &mut S) -> Self {
        match store.load() {
            Ok(Some(contacts)) => {
                let directory: Directory = contacts.into_iter().collect();
                info!(contacts = directory.len(), "loaded contacts");
                directory
            }
            Ok(None) => {
                info!("no saved contacts, starting empty");
                Self::new()
            }
            Err(e) => {
                warn!(error = %e, "could not read saved contacts, starting empty");
                match store.set_aside() {
                    Ok(Some(backup)) => {
                        warn!(backup = %backup.display(), "moved unreadable contacts aside")
                    }
                    Ok(None) => {}
                    Err(e) => warn!(error = %e, "could not move unreadable contacts aside"),
                }
                Self::new()
            }
        }
    }

    pub fn save<S: DataStore>(&self, store: &mut S) -> Result<()> {
        store.save(self)?;
        info!(contacts = self.len(), "saved contacts");
        Ok(())
    }

    /// Inserts `contact` under its name, replacing any contact with that name.
    pub fn add(&mut self, contact: Contact) {
        match self.position(contact.name()) {
            Some(pos) => self.contacts[pos] = contact,
            None => self.contacts.push(contact),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name() == name)
    }

    /// Mutable access for editing phones and birthday. The name stays fixed
    /// because [`Contact`] has no way to change it.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.name() == name)
    }

    pub fn remove(&mut self, name: &str) -> Result<Contact> {
        let pos = self
            .position(name)
            .ok_or_else(|| CbookError::UnknownContact(name.to_string()))?;
        Ok(self.contacts.remove(pos))
    }

    /// Finds contacts by exact name or exact phone number.
    ///
    /// The name match comes first. Phone matches follow in directory order,
    /// one entry per matching phone, without de-duplication: a contact whose
    /// own phone equals its name shows up twice.
    pub fn search(&self, term: &str) -> Result<Vec<&Contact>> {
        let mut found: Vec<&Contact> = self.get(term).into_iter().collect();
        for contact in &self.contacts {
            for phone in contact.phones() {
                if phone.as_str() == term {
                    found.push(contact);
                }
            }
        }

        if found.is_empty() {
            return Err(CbookError::NotFound(term.to_string()));
        }
        Ok(found)
    }

    /// Splits the directory into pages of at most `page_size` contacts.
    ///
    /// Pages are produced lazily from the current contents; each call starts
    /// over. Only the last page may be short.
    pub fn paginate(&self, page_size: usize) -> Result<Pages<'_>> {
        if page_size == 0 {
            return Err(CbookError::Precondition(
                "Page size must be a positive number".to_string(),
            ));
        }
        Ok(Pages {
            chunks: self.contacts.chunks(page_size),
        })
    }

    pub fn iter(&self) -> Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.name() == name)
    }
}

impl FromIterator<Contact> for Directory {
    fn from_iter<T: IntoIterator<Item = Contact>>(iter: T) -> Self {
        let mut directory = Directory::new();
        for contact in iter {
            directory.add(contact);
        }
        directory
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Contact;
    type IntoIter = Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over directory pages, see [`Directory::paginate`].
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    chunks: Chunks<'a, Contact>,
}

impl<'a> Iterator for Pages<'a> {
    type Item = &'a [Contact];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}
