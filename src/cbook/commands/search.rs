use crate::commands::CmdResult;
use crate::directory::Directory;
use crate::error::Result;

pub fn run(directory: &Directory, term: &str) -> Result<CmdResult> {
    let found = directory.search(term)?.into_iter().cloned().collect();
    Ok(CmdResult::default().with_listed_contacts(found))
}
