use super::print::print_result;
use cbook::api::ContactsApi;
use cbook::store::DataStore;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const PROMPT: &str = "Enter command: ";

/// Reads commands until an exit command or end of input.
///
/// Saving is left to the caller so it happens however the loop ends.
pub fn run<S, R, W>(api: &mut ContactsApi<S>, input: R, mut out: W) -> io::Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            debug!("end of input");
            return Ok(());
        };
        let result = api.handle_line(&line?);
        print_result(&mut out, &result)?;
        if result.exit {
            return Ok(());
        }
    }
}
