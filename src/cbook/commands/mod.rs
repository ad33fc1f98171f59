use crate::config::CbookConfig;
use crate::model::Contact;

pub mod add;
pub mod birthday;
pub mod change;
pub mod config;
pub mod days;
pub mod list;
pub mod remove;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_contacts: Vec<Contact>,
    pub pages: Vec<Vec<Contact>>,
    pub config: Option<CbookConfig>,
    pub messages: Vec<CmdMessage>,
    /// Set by the exit commands; the session should end after rendering.
    pub exit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_pages(mut self, pages: Vec<Vec<Contact>>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_config(mut self, config: CbookConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn exiting(mut self) -> Self {
        self.exit = true;
        self
    }
}
