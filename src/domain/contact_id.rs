//! ContactId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The identity of a contact.
///
/// Generated once when a contact is constructed and never changed afterwards.
/// Two contacts with identical field values are still different contacts if
/// their ids differ.
///
/// # Example
///
/// ```
/// use phone_book::domain::ContactId;
///
/// let id = ContactId::parse("7f1c0a52-94b4-4d8e-8f0e-5a1f2c3d4e5f").unwrap();
/// assert_eq!(id.as_str(), "7f1c0a52-94b4-4d8e-8f0e-5a1f2c3d4e5f");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactId(String);

impl ContactId {
    /// Generate a fresh random identity.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parse an existing identity, e.g. one read back from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` for an empty string and
    /// `ValidationError::InvalidId` if the value is not a UUID.
    pub fn parse(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        let uuid = Uuid::parse_str(trimmed).map_err(|_| ValidationError::InvalidId(id.clone()))?;
        Ok(Self(uuid.hyphenated().to_string()))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContactId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ContactId> for String {
    fn from(value: ContactId) -> Self {
        value.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
