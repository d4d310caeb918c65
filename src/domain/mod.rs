//! Domain value objects and types.
//!
//! Type-safe wrappers for contact ids, email addresses and phone numbers.
//! Each one validates at construction time, so an invalid value can never
//! end up inside a [`Contact`](crate::models::Contact).

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod phone;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
