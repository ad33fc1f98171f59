//! Terminal side of cbook: the prompt loop and how results are printed.

pub mod print;
pub mod repl;
