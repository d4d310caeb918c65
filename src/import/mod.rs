//! Seeding the phone book from files.

pub mod csv_import;

pub use csv_import::{load_contacts_from_csv, read_contacts};
