use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{CbookError, Result};

pub fn run(directory: &mut Directory, name: &str, date: &str) -> Result<CmdResult> {
    let contact = directory
        .get_mut(name)
        .ok_or_else(|| CbookError::UnknownContact(name.to_string()))?;
    contact.set_birthday(date)?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "{}'s birthday {} was added",
        name, date
    ))))
}
