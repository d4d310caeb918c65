//! Fixed-width table rendering of contacts.

use crate::models::Contact;

/// Width of the id column; a hyphenated UUID plus padding.
const ID_WIDTH: usize = 40;

/// Placeholder for absent optional fields.
const MISSING: &str = "--";

/// Renders contacts as left-aligned, space separated columns.
#[derive(Debug, Clone)]
pub struct ContactPrinter {
    column_width: usize,
}

impl ContactPrinter {
    pub fn new(column_width: usize) -> Self {
        Self { column_width }
    }

    pub fn headers(&self) -> String {
        self.row(["id", "first_name", "last_name", "phone_number", "email", "address"])
    }

    pub fn to_line(&self, contact: &Contact) -> String {
        self.row([
            contact.id().as_str(),
            contact.first_name(),
            contact.last_name(),
            contact.phone_number().as_str(),
            contact.email().map(|e| e.as_str()).unwrap_or(MISSING),
            contact.address().unwrap_or(MISSING),
        ])
    }

    /// Header line followed by one line per contact.
    pub fn table<'a>(&self, contacts: impl IntoIterator<Item = &'a Contact>) -> Vec<String> {
        std::iter::once(self.headers())
            .chain(contacts.into_iter().map(|contact| self.to_line(contact)))
            .collect()
    }

    fn row(&self, [id, rest @ ..]: [&str; 6]) -> String {
        let width = self.column_width;
        let mut line = format!("{:<id_width$}", id, id_width = ID_WIDTH);
        for cell in rest {
            line.push(' ');
            line.push_str(&format!("{:<width$}", cell));
        }
        line.trim_end().to_string()
    }
}

impl Default for ContactPrinter {
    fn default() -> Self {
        Self::new(20)
    }
}
