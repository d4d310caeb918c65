//! Phone Book - an interactive, in-memory contact manager.
//!
//! Contacts are kept in insertion order inside a [`PhoneBook`], which also
//! holds the active [`ContactFilter`] and the filtered, sorted view it
//! produces. The view is recomputed after every mutation.
//!
//! # Architecture
//!
//! - **domain**: Validated value types (ids, phone numbers, emails)
//! - **models**: The contact record
//! - **filter**: Matching and ordering rules
//! - **phone_book**: Contact ownership, views, CRUD and grouping
//! - **import**: CSV seeding
//! - **cli**: Prompt, printer, menu actions and the controller loop
//! - **config**: Configuration from environment variables
//! - **observability**: Session metrics
//! - **error**: Error types

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod import;
pub mod models;
pub mod observability;
pub mod phone_book;

pub use cli::{Action, ContactPrinter, PhoneBookController, Prompt};
pub use config::Config;
pub use domain::{ContactId, EmailAddress, PhoneNumber, ValidationError};
pub use error::{ConfigError, ImportError, PhoneBookError, PhoneBookResult};
pub use filter::{ContactFilter, ContactSort, SortKey};
pub use models::Contact;
pub use observability::MetricsTracker;
pub use phone_book::{GroupKey, PhoneBook};
