use thiserror::Error;

#[derive(Error, Debug)]
pub enum CbookError {
    /// A value failed its field validation rule (name, phone or date).
    #[error("{0}")]
    Format(String),

    #[error("Contact with this value '{0}' does not exist")]
    NotFound(String),

    /// Lookup or removal of a name that is not in the directory.
    #[error("Contact not found: {0}")]
    UnknownContact(String),

    #[error("Contact {0} exist. name should be unique")]
    DuplicateContact(String),

    #[error("{0}")]
    Precondition(String),

    #[error("Enter: {0}")]
    MissingArguments(&'static str),

    #[error("Wrong command")]
    WrongCommand,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CbookError>;
