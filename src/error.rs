//! Error types for the phone book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every variant is recoverable: the CLI reports it and keeps the session going.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by phone book operations and the actions driving them.
#[derive(Error, Debug)]
pub enum PhoneBookError {
    /// A contact with the same id is already registered
    #[error("Contact {0} already exists")]
    DuplicateContact(String),

    /// The contact is not owned by this phone book
    #[error("Contact {0} is not registered")]
    ContactNotRegistered(String),

    /// No contact carries the requested id
    #[error("No contacts matched id: {0}")]
    NoContactsMatched(String),

    /// Unrecognized sort field name
    #[error("Invalid sort field: {0}")]
    InvalidFilterField(String),

    /// User input that could not be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A contact field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Reading from or writing to the terminal failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable or flag has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while seeding the phone book from a CSV file.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file could not be opened
    #[error("Failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row parsed but does not describe a valid contact
    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    /// The imported contacts could not be registered
    #[error(transparent)]
    PhoneBook(#[from] PhoneBookError),
}

/// Convenience type alias for Results with PhoneBookError
pub type PhoneBookResult<T> = Result<T, PhoneBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ImportError
pub type ImportResult<T> = Result<T, ImportError>;
