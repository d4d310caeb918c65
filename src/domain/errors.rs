//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The provided ID is not a well-formed contact identity.
    InvalidId(String),

    /// A required name field is empty.
    EmptyName(&'static str),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// A restored record claims to have been updated before it was created.
    UpdatedBeforeCreated,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::InvalidId(id) => write!(f, "Invalid contact id: {}", id),
            Self::EmptyName(field) => write!(f, "{} cannot be empty", field),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::UpdatedBeforeCreated => {
                write!(f, "Updated timestamp cannot precede created timestamp")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
