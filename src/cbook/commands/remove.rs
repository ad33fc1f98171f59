use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;

pub fn run(directory: &mut Directory, name: &str) -> Result<CmdResult> {
    directory.remove(name)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Contact {} was removed", name))))
}
