//! Error types for the phonebook.

use thiserror::Error;

/// Rejected user input. Always recoverable: the shell re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid phone number: {0:?} (expected exactly 11 digits)")]
    Phone(String),

    #[error("Invalid birthdate: {0:?} (expected dd-mm-yyyy)")]
    Birthdate(String),

    #[error("Invalid field: {0}")]
    Field(String),
}

/// Backing store failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
}

/// Errors surfaced by directory operations and the command layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("A contact named {name} {surname} already exists")]
    DuplicateContact { name: String, surname: String },

    #[error("Phone number {0} is already in use")]
    DuplicatePhone(String),

    #[error("Contact not found: {name} {surname}")]
    ContactNotFound { name: String, surname: String },

    #[error("Birthdate of {name} {surname} is not specified")]
    BirthdateUnknown { name: String, surname: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input error: {0}")]
    InputError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl ApiError {
    /// Whether the interactive shell can report this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ApiError::DuplicateContact { .. }
                | ApiError::DuplicatePhone(_)
                | ApiError::ContactNotFound { .. }
                | ApiError::BirthdateUnknown { .. }
                | ApiError::Validation(_)
        )
    }
}
