//! The phone book: contact ownership, filtered views and CRUD by identity.

mod book;
mod grouping;

pub use book::PhoneBook;
pub use grouping::{GroupKey, NO_EMAIL};
