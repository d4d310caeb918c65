//! Contact filtering and sorting.
//!
//! A [`ContactFilter`] decides which contacts belong in a view and in which
//! order. Matching combines date bounds and a tokenized, case-insensitive
//! search; ordering resolves a [`ContactSort`] field to a [`SortKey`].

pub mod contact_filter;
pub mod sort;

pub use contact_filter::{search_tokens, ContactFilter};
pub use sort::{ContactSort, SortKey};
