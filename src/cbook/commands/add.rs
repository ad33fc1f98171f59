use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{CbookError, Result};
use crate::model::Contact;

/// Creates a contact with one phone. Names must be new.
pub fn run(directory: &mut Directory, name: &str, phone: &str) -> Result<CmdResult> {
    if directory.has(name) {
        return Err(CbookError::DuplicateContact(name.to_string()));
    }

    let mut contact = Contact::new(name)?;
    contact.add_phone(phone)?;
    directory.add(contact);

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "New contact: {} {} was added",
        name, phone
    ))))
}
