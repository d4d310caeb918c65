//! Ready-made grouping keys for the CLI.

use crate::models::Contact;
use std::fmt;

/// How contacts are grouped for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    FirstNameInitial,
    LastNameInitial,
    EmailDomain,
}

/// Group label for contacts without an email address.
pub const NO_EMAIL: &str = "(no email)";

impl GroupKey {
    pub const ALL: [GroupKey; 3] = [
        GroupKey::FirstNameInitial,
        GroupKey::LastNameInitial,
        GroupKey::EmailDomain,
    ];

    /// The label of the group `contact` belongs to.
    pub fn key(&self, contact: &Contact) -> String {
        match self {
            Self::FirstNameInitial => initial(contact.first_name()),
            Self::LastNameInitial => initial(contact.last_name()),
            Self::EmailDomain => contact
                .email()
                .map(|email| email.domain().to_lowercase())
                .unwrap_or_else(|| NO_EMAIL.to_string()),
        }
    }
}

fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FirstNameInitial => "First name initial",
            Self::LastNameInitial => "Last name initial",
            Self::EmailDomain => "Email domain",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_keys() {
        let contact = Contact::new("joe", "smith", "(987) 654-3210")
            .unwrap()
            .with_email("joe@UOttawa.ca")
            .unwrap();
        assert_eq!(GroupKey::FirstNameInitial.key(&contact), "J");
        assert_eq!(GroupKey::LastNameInitial.key(&contact), "S");
        assert_eq!(GroupKey::EmailDomain.key(&contact), "uottawa.ca");
    }

    #[test]
    fn test_missing_email_has_its_own_group() {
        let contact = Contact::new("John", "Doe", "(123) 456-7890").unwrap();
        assert_eq!(GroupKey::EmailDomain.key(&contact), NO_EMAIL);
    }
}
