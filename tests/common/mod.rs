//! Shared fixtures for the integration tests.
//!
//! The three sample contacts are created a day apart:
//! John Doe (t1) < Jane Smith (t2) < Joe Smith (t3).

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use phone_book::{Contact, PhoneBook};

/// Creation time of the first sample contact.
pub fn t1() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

pub fn t2() -> DateTime<Utc> {
    t1() + Duration::days(1)
}

pub fn t3() -> DateTime<Utc> {
    t1() + Duration::days(2)
}

/// A contact whose creation and update times are both `at`.
pub fn contact_at(first: &str, last: &str, phone: &str, at: DateTime<Utc>) -> Contact {
    Contact::new(first, last, phone)
        .unwrap()
        .with_timestamps(at, at)
        .unwrap()
}

pub fn john() -> Contact {
    contact_at("John", "Doe", "(123) 456-7890", t1())
        .with_email("john@example.com")
        .unwrap()
        .with_address("1 First Ave")
}

pub fn jane() -> Contact {
    contact_at("Jane", "Smith", "(987) 654-3210", t2())
        .with_email("jane@uottawa.ca")
        .unwrap()
}

pub fn joe() -> Contact {
    contact_at("Joe", "Smith", "(555) 123-4567", t3()).with_address("789 Last St, Ottawa")
}

pub fn sample_contacts() -> Vec<Contact> {
    vec![john(), jane(), joe()]
}

pub fn sample_phone_book() -> PhoneBook {
    PhoneBook::with_contacts(sample_contacts()).unwrap()
}

pub fn first_names(contacts: &[&Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.first_name().to_string()).collect()
}
