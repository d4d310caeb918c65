//! Sort fields and the comparable keys they resolve to.

use crate::error::PhoneBookError;
use crate::models::Contact;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// The contact field a result view is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContactSort {
    Id,
    FirstName,
    LastName,
    PhoneNumber,
    CreatedDate,
    #[default]
    UpdatedDate,
}

/// A contact's value for one sort field.
///
/// All keys produced for a single [`ContactSort`] share a variant, so the
/// derived ordering is lexicographic for text and chronological for
/// timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey<'a> {
    Text(&'a str),
    Timestamp(DateTime<Utc>),
}

impl ContactSort {
    /// Every sort field, in menu order.
    pub const ALL: [ContactSort; 6] = [
        ContactSort::Id,
        ContactSort::FirstName,
        ContactSort::LastName,
        ContactSort::PhoneNumber,
        ContactSort::CreatedDate,
        ContactSort::UpdatedDate,
    ];

    /// The upper-case name users type to select this field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::FirstName => "FIRST_NAME",
            Self::LastName => "LAST_NAME",
            Self::PhoneNumber => "PHONE_NUMBER",
            Self::CreatedDate => "CREATED_DATE",
            Self::UpdatedDate => "UPDATED_DATE",
        }
    }

    /// Resolve the contact's comparable value for this field.
    pub fn key<'a>(&self, contact: &'a Contact) -> SortKey<'a> {
        match self {
            Self::Id => SortKey::Text(contact.id().as_str()),
            Self::FirstName => SortKey::Text(contact.first_name()),
            Self::LastName => SortKey::Text(contact.last_name()),
            Self::PhoneNumber => SortKey::Text(contact.phone_number().as_str()),
            Self::CreatedDate => SortKey::Timestamp(contact.created_at()),
            Self::UpdatedDate => SortKey::Timestamp(contact.updated_at()),
        }
    }

    /// Comma separated list of accepted names, for prompts.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(ContactSort::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for ContactSort {
    type Err = PhoneBookError;

    /// Parse a sort field name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PhoneBookError::InvalidFilterField(s.to_string()))
    }
}

impl fmt::Display for ContactSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
