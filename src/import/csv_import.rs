//! One-shot CSV import of seed contacts.
//!
//! Expected header columns: `first_name`, `last_name`, `phone_number`, and
//! optionally `email`, `address`, `id`, `created_at`, `updated_at`.
//! Timestamps are RFC 3339. Empty cells count as absent.

use crate::domain::ContactId;
use crate::error::{ImportError, ImportResult};
use crate::models::Contact;
use crate::phone_book::PhoneBook;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// One CSV row, before validation.
#[derive(Debug, Deserialize)]
struct ContactRecord {
    first_name: String,
    last_name: String,
    phone_number: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl ContactRecord {
    fn into_contact(self) -> Result<Contact, String> {
        let mut contact = Contact::new(self.first_name, self.last_name, self.phone_number)
            .map_err(|e| e.to_string())?;

        if let Some(email) = non_empty(self.email) {
            contact = contact.with_email(email).map_err(|e| e.to_string())?;
        }
        if let Some(address) = non_empty(self.address) {
            contact = contact.with_address(address);
        }
        if let Some(id) = non_empty(self.id) {
            contact = contact.with_id(ContactId::parse(id).map_err(|e| e.to_string())?);
        }

        let created_at = non_empty(self.created_at)
            .map(|value| parse_timestamp("created_at", &value))
            .transpose()?;
        let updated_at = non_empty(self.updated_at)
            .map(|value| parse_timestamp("updated_at", &value))
            .transpose()?;

        let restored = match (created_at, updated_at) {
            (None, None) => Ok(contact),
            (Some(created), None) => contact.with_timestamps(created, created),
            (None, Some(updated)) => contact.with_timestamps(updated, updated),
            (Some(created), Some(updated)) => contact.with_timestamps(created, updated),
        };
        restored.map_err(|e| e.to_string())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_timestamp(column: &str, value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("{} '{}' is not an RFC 3339 timestamp: {}", column, value, e))
}

/// Parse contacts from CSV data, in file order.
///
/// # Errors
///
/// Returns `ImportError::Csv` for malformed CSV and
/// `ImportError::InvalidRecord` (with the 1-based line number) for a row
/// that does not describe a valid contact or repeats an earlier row's id.
pub fn read_contacts<R: Read>(reader: R) -> ImportResult<Vec<Contact>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut contacts = Vec::new();
    let mut seen_ids = HashSet::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let record: ContactRecord = row.deserialize(Some(&headers))?;
        let contact = record
            .into_contact()
            .and_then(|contact| {
                if seen_ids.insert(contact.id().clone()) {
                    Ok(contact)
                } else {
                    Err(format!("Contact {} already exists", contact.id()))
                }
            })
            .map_err(|reason| {
                warn!(line = line, reason = %reason, "Rejected CSV row");
                ImportError::InvalidRecord { line, reason }
            })?;
        contacts.push(contact);
    }

    Ok(contacts)
}

/// Load contacts from the CSV file at `path`.
pub fn load_contacts_from_csv(path: impl AsRef<Path>) -> ImportResult<Vec<Contact>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ImportError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let contacts = read_contacts(file)?;
    info!(path = %path.display(), count = contacts.len(), "Contacts loaded from CSV");
    Ok(contacts)
}

impl PhoneBook {
    /// Create a phone book seeded from a CSV file.
    ///
    /// # Errors
    ///
    /// Any error from [`load_contacts_from_csv`]; a repeated id is reported
    /// there as `ImportError::InvalidRecord`.
    pub fn from_csv(path: impl AsRef<Path>) -> ImportResult<Self> {
        let contacts = load_contacts_from_csv(path)?;
        Ok(PhoneBook::with_contacts(contacts)?)
    }
}
