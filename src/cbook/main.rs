use cbook::api::{ConfigAction, ContactsApi};
use cbook::commands;
use cbook::config::CbookConfig;
use cbook::error::Result;
use cbook::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(cli.dir);
    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&data_dir, key, value),
        None => handle_session(&data_dir, cli.page_size),
    }
}

// Logs go to stderr; stdout belongs to the conversation.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn resolve_data_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.or_else(|| {
        ProjectDirs::from("com", "cbook", "cbook").map(|dirs| dirs.data_dir().to_path_buf())
    })
    .unwrap_or_else(|| PathBuf::from("."))
}

fn handle_session(data_dir: &Path, page_size: Option<usize>) -> Result<()> {
    let config = CbookConfig::load(data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "could not read config, using defaults");
        CbookConfig::default()
    });
    let page_size = page_size.unwrap_or(config.page_size);
    let store = FileStore::new(data_dir.join(&config.data_file));
    info!(path = %store.path().display(), page_size, "starting session");

    let mut api = ContactsApi::new(store, page_size);
    let stdin = io::stdin();
    let session = cli::repl::run(&mut api, stdin.lock(), io::stdout());

    // Save however the loop ended, then report the first failure.
    let saved = api.save();
    session?;
    saved
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(data_dir, action)?;
    cli::print::print_result(&mut io::stdout(), &result)?;
    Ok(())
}
