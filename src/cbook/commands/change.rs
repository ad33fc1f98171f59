use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;

/// Toggles `phone` on the named contact: removed if present, added otherwise.
pub fn run(directory: &mut Directory, name: &str, phone: &str) -> Result<CmdResult> {
    let Some(contact) = directory.get_mut(name) else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Contact {} was not found",
            name
        ))));
    };

    contact.replace_phones(&[phone])?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "You changed number to {} for {}",
        phone, name
    ))))
}
