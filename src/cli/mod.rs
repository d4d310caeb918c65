//! Interactive command-line front end.
//!
//! - **prompt**: line input and yes/no, date and optional answers
//! - **printer**: fixed-width contact tables
//! - **actions**: the menu entries
//! - **controller**: the menu loop

pub mod actions;
pub mod controller;
pub mod printer;
pub mod prompt;

pub use actions::{Action, ActionOutcome};
pub use controller::PhoneBookController;
pub use printer::ContactPrinter;
pub use prompt::Prompt;
