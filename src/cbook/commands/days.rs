use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{CbookError, Result};
use chrono::NaiveDate;

pub fn run(directory: &Directory, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let contact = directory
        .get(name)
        .ok_or_else(|| CbookError::UnknownContact(name.to_string()))?;
    let days = contact.days_to_next_birthday_on(today)?;

    Ok(CmdResult::default().with_message(CmdMessage::info(format!(
        "Days to next {}'s birthday is {}",
        name, days
    ))))
}
