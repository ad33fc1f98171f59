use super::DataStore;
use crate::directory::Directory;
use crate::error::Result;
use crate::model::Contact;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: Option<Vec<Contact>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Some(contacts),
        }
    }

    pub fn saved(&self) -> Option<&[Contact]> {
        self.contacts.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<Vec<Contact>>> {
        Ok(self.contacts.clone())
    }

    fn save(&mut self, directory: &Directory) -> Result<()> {
        self.contacts = Some(directory.iter().cloned().collect());
        Ok(())
    }

    // Held contacts are always readable
    fn set_aside(&mut self) -> Result<Option<PathBuf>> {
        Ok(None)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn push(mut self, contact: Contact) -> Self {
            self.store
                .contacts
                .get_or_insert_with(Vec::new)
                .push(contact);
            self
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let mut contact = Contact::new(&format!("Contact{}", i + 1)).unwrap();
                contact.add_phone(&format!("{}00{}", i + 1, i + 1)).unwrap();
                self = self.push(contact);
            }
            self
        }

        pub fn with_contact(self, name: &str, phones: &[&str]) -> Self {
            let mut contact = Contact::new(name).unwrap();
            for phone in phones {
                contact.add_phone(phone).unwrap();
            }
            self.push(contact)
        }

        pub fn with_birthday_contact(self, name: &str, phone: &str, birthday: &str) -> Self {
            let mut contact = Contact::new(name).unwrap();
            contact.add_phone(phone).unwrap();
            contact.set_birthday(birthday).unwrap();
            self.push(contact)
        }
    }
}
