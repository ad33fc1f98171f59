//! # cbook Architecture
//!
//! cbook is a contact book you talk to one line at a time: add people with
//! phone numbers, record birthdays, search, page through everything, and
//! have it all still be there next time. The binary is a thin loop around
//! this library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Reads lines, prints results, saves when the session ends │
//! │  - The ONLY place that knows about stdin/stdout             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) + input parsing (input.rs)                    │
//! │  - Line -> Command -> command function                      │
//! │  - Maps every error to a user message in one place          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One file per user command, returns Result<CmdResult>     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: Directory -> Contact -> Field                        │
//! │  - Validation, search, pagination, birthday arithmetic      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - DataStore trait: FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api` inward takes plain arguments and returns plain
//! types. Nothing below the CLI prints or exits the process; logging goes
//! through `tracing` and the binary decides where it ends up.
//!
//! ## Module Overview
//!
//! - [`field`]: validated values (`Name`, `PhoneNumber`, `BirthdayDate`)
//! - [`model`]: `Contact`
//! - [`directory`]: the keyed contact collection, search and paging
//! - [`input`]: parsing a typed line into a `Command`
//! - [`commands`]: business logic for each command
//! - [`api`]: the facade the CLI talks to
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod field;
pub mod input;
pub mod model;
pub mod store;
