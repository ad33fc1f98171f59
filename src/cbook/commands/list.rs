use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;

pub fn run(directory: &Directory, page_size: usize) -> Result<CmdResult> {
    let pages: Vec<Vec<_>> = directory
        .paginate(page_size)?
        .map(|page| page.to_vec())
        .collect();

    let mut result = CmdResult::default();
    if pages.is_empty() {
        result.add_message(CmdMessage::info("Address book is empty"));
    }
    Ok(result.with_pages(pages))
}
