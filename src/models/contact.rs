//! Contact model representing a person in the phone book.

use crate::domain::{ContactId, EmailAddress, PhoneNumber, ValidationError};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single person's record in the phone book.
///
/// The id is assigned at construction and never changes. Every field setter
/// refreshes `updated_at`, which therefore never falls behind `created_at`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Contact {
    id: ContactId,
    first_name: String,
    last_name: String,
    phone_number: PhoneNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Contact {
    /// Create a new contact with the required fields and a fresh identity.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for a blank first or last name and
    /// `ValidationError::InvalidPhone` if the phone number does not match the
    /// phone pattern.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let now = Utc::now();
        Ok(Self {
            id: ContactId::generate(),
            first_name: validate_name(first_name.into(), "First name")?,
            last_name: validate_name(last_name.into(), "Last name")?,
            phone_number: PhoneNumber::new(phone_number)?,
            email: None,
            address: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Attach an email address during construction.
    pub fn with_email(mut self, email: impl Into<String>) -> Result<Self, ValidationError> {
        self.email = Some(EmailAddress::new(email)?);
        Ok(self)
    }

    /// Attach an address during construction.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Replace the generated identity with a previously issued one.
    ///
    /// Used when contacts are loaded from an export that carries ids.
    pub fn with_id(mut self, id: ContactId) -> Self {
        self.id = id;
        self
    }

    /// Replace both timestamps, e.g. when restoring an exported contact.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UpdatedBeforeCreated` if `updated_at` is
    /// earlier than `created_at`.
    pub fn with_timestamps(
        mut self,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if updated_at < created_at {
            return Err(ValidationError::UpdatedBeforeCreated);
        }
        self.created_at = created_at;
        self.updated_at = updated_at;
        Ok(self)
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// First and last name separated by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// The free-text fields a search query is matched against, in order:
    /// first name, last name, phone number, email, address.
    pub fn searchable_fields(&self) -> [Option<&str>; 5] {
        [
            Some(self.first_name.as_str()),
            Some(self.last_name.as_str()),
            Some(self.phone_number.as_str()),
            self.email.as_ref().map(EmailAddress::as_str),
            self.address.as_deref(),
        ]
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.first_name = validate_name(value.into(), "First name")?;
        self.touch();
        Ok(())
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.last_name = validate_name(value.into(), "Last name")?;
        self.touch();
        Ok(())
    }

    pub fn set_phone_number(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.phone_number = PhoneNumber::new(value)?;
        self.touch();
        Ok(())
    }

    /// Set or clear the email address.
    pub fn set_email(&mut self, value: Option<String>) -> Result<(), ValidationError> {
        self.email = value.map(EmailAddress::new).transpose()?;
        self.touch();
        Ok(())
    }

    /// Set or clear the address. Addresses are not validated.
    pub fn set_address(&mut self, value: Option<String>) {
        self.address = value;
        self.touch();
    }

    fn touch(&mut self) {
        // Clock skew must never move updated_at backwards.
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

fn validate_name(value: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn john() -> Contact {
        Contact::new("John", "Doe", "123-456-7890")
            .unwrap()
            .with_email("john@example.com")
            .unwrap()
            .with_address("123 Main St")
    }

    #[test]
    fn test_contact_new() {
        let contact = john();
        assert_eq!(contact.first_name(), "John");
        assert_eq!(contact.last_name(), "Doe");
        assert_eq!(contact.phone_number().as_str(), "123-456-7890");
        assert_eq!(contact.email().map(|e| e.as_str()), Some("john@example.com"));
        assert_eq!(contact.address(), Some("123 Main St"));
        assert_eq!(contact.created_at(), contact.updated_at());
    }

    #[test]
    fn test_contact_full_name() {
        assert_eq!(john().full_name(), "John Doe");
    }

    #[test]
    fn test_contact_rejects_invalid_fields() {
        assert_eq!(
            Contact::new("", "Doe", "123-456-7890"),
            Err(ValidationError::EmptyName("First name"))
        );
        assert_eq!(
            Contact::new("John", "  ", "123-456-7890"),
            Err(ValidationError::EmptyName("Last name"))
        );
        assert!(matches!(
            Contact::new("John", "Doe", "12345"),
            Err(ValidationError::InvalidPhone(_))
        ));
        assert!(Contact::new("John", "Doe", "123-456-7890")
            .unwrap()
            .with_email("not-an-email")
            .is_err());
    }

    #[test]
    fn test_setters_refresh_updated_at() {
        let created = Utc::now() - Duration::days(1);
        let mut contact = john().with_timestamps(created, created).unwrap();

        contact.set_first_name("Jane").unwrap();
        assert_eq!(contact.first_name(), "Jane");
        assert!(contact.updated_at() > contact.created_at());

        let before = contact.updated_at();
        contact.set_last_name("Smith").unwrap();
        contact.set_phone_number("987-654-3210").unwrap();
        contact.set_email(Some("jane@example.com".to_string())).unwrap();
        contact.set_address(Some("456 Elm St".to_string()));
        assert!(contact.updated_at() >= before);
        assert_eq!(contact.full_name(), "Jane Smith");
        assert_eq!(contact.address(), Some("456 Elm St"));
    }

    #[test]
    fn test_failed_setter_leaves_contact_untouched() {
        let created = Utc::now() - Duration::days(1);
        let mut contact = john().with_timestamps(created, created).unwrap();

        assert!(contact.set_phone_number("bad").is_err());
        assert_eq!(contact.phone_number().as_str(), "123-456-7890");
        assert_eq!(contact.updated_at(), created);
    }

    #[test]
    fn test_updated_at_never_precedes_created_at() {
        let future = Utc::now() + Duration::days(1);
        let mut contact = john().with_timestamps(future, future).unwrap();
        contact.set_address(None);
        assert!(contact.updated_at() >= contact.created_at());

        let now = Utc::now();
        assert_eq!(
            john().with_timestamps(now, now - Duration::seconds(1)),
            Err(ValidationError::UpdatedBeforeCreated)
        );
    }

    #[test]
    fn test_id_survives_edits() {
        let mut contact = john();
        let id = contact.id().clone();
        contact.set_first_name("Johnny").unwrap();
        assert_eq!(contact.id(), &id);
    }

    #[test]
    fn test_searchable_fields() {
        let contact = Contact::new("Joe", "Smith", "(987) 654-3210").unwrap();
        assert_eq!(
            contact.searchable_fields(),
            [Some("Joe"), Some("Smith"), Some("(987) 654-3210"), None, None]
        );
    }

    #[test]
    fn test_contact_serialization() {
        let contact = Contact::new("Joe", "Smith", "(987) 654-3210").unwrap();
        let json = serde_json::to_string(&contact).unwrap();
        assert!(json.contains("\"first_name\":\"Joe\""));
        assert!(!json.contains("email"));
    }
}
