use cbook::config::parse_page_size;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cbook", version)]
#[command(about = "Command-line contact book with birthdays", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding contacts and config (defaults to the user data dir)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Contacts per page in `show all`, for this session only
    #[arg(long, value_parser = parse_page_size)]
    pub page_size: Option<usize>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get or set configuration
    Config {
        /// Configuration key (data-file, page-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
