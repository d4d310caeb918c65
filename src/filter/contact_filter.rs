//! Match criteria and sort order applied to a contact collection.

use super::sort::{ContactSort, SortKey};
use crate::error::PhoneBookResult;
use crate::models::Contact;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;

type Criterion = fn(&ContactFilter, &Contact) -> bool;

/// Criteria a contact must satisfy, evaluated in order and joined with AND.
const CRITERIA: [Criterion; 5] = [
    ContactFilter::matches_max_created_date,
    ContactFilter::matches_min_created_date,
    ContactFilter::matches_max_updated_date,
    ContactFilter::matches_min_updated_date,
    ContactFilter::matches_search_query,
];

/// Search criteria plus sort order for a phone book view.
///
/// A filter is a plain value: the `with_*` methods consume it and return an
/// updated copy, so a filter that has been applied is never changed behind
/// the phone book's back.
///
/// # Example
///
/// ```
/// use phone_book::filter::{ContactFilter, ContactSort};
///
/// let filter = ContactFilter::default()
///     .with_search_query(Some("smith".to_string()))
///     .with_sort_field(Some(ContactSort::FirstName))
///     .with_ascending(false);
/// assert_eq!(filter.effective_sort_field(), ContactSort::FirstName);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFilter {
    search_query: Option<String>,
    min_created_date: Option<DateTime<Utc>>,
    max_created_date: Option<DateTime<Utc>>,
    min_updated_date: Option<DateTime<Utc>>,
    max_updated_date: Option<DateTime<Utc>>,
    sort_field: Option<ContactSort>,
    ascending: bool,
}

impl Default for ContactFilter {
    fn default() -> Self {
        Self {
            search_query: None,
            min_created_date: None,
            max_created_date: None,
            min_updated_date: None,
            max_updated_date: None,
            sort_field: None,
            ascending: true,
        }
    }
}

impl ContactFilter {
    pub fn with_search_query(mut self, query: Option<String>) -> Self {
        self.search_query = query;
        self
    }

    pub fn with_min_created_date(mut self, bound: Option<DateTime<Utc>>) -> Self {
        self.min_created_date = bound;
        self
    }

    pub fn with_max_created_date(mut self, bound: Option<DateTime<Utc>>) -> Self {
        self.max_created_date = bound;
        self
    }

    pub fn with_min_updated_date(mut self, bound: Option<DateTime<Utc>>) -> Self {
        self.min_updated_date = bound;
        self
    }

    pub fn with_max_updated_date(mut self, bound: Option<DateTime<Utc>>) -> Self {
        self.max_updated_date = bound;
        self
    }

    pub fn with_sort_field(mut self, field: Option<ContactSort>) -> Self {
        self.sort_field = field;
        self
    }

    /// Select the sort field by its user-facing name.
    ///
    /// # Errors
    ///
    /// Returns `PhoneBookError::InvalidFilterField` if the name is not one of
    /// [`ContactSort::names`].
    pub fn with_sort_field_name(self, name: &str) -> PhoneBookResult<Self> {
        let field = name.parse::<ContactSort>()?;
        Ok(self.with_sort_field(Some(field)))
    }

    pub fn with_ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    pub fn search_query(&self) -> Option<&str> {
        self.search_query.as_deref()
    }

    pub fn min_created_date(&self) -> Option<DateTime<Utc>> {
        self.min_created_date
    }

    pub fn max_created_date(&self) -> Option<DateTime<Utc>> {
        self.max_created_date
    }

    pub fn min_updated_date(&self) -> Option<DateTime<Utc>> {
        self.min_updated_date
    }

    pub fn max_updated_date(&self) -> Option<DateTime<Utc>> {
        self.max_updated_date
    }

    pub fn sort_field(&self) -> Option<ContactSort> {
        self.sort_field
    }

    /// The field results are ordered by; unset means `UPDATED_DATE`.
    pub fn effective_sort_field(&self) -> ContactSort {
        self.sort_field.unwrap_or(ContactSort::UpdatedDate)
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Whether the contact satisfies every criterion of this filter.
    pub fn matches(&self, contact: &Contact) -> bool {
        CRITERIA.iter().all(|criterion| criterion(self, contact))
    }

    /// The contact's value for the effective sort field.
    pub fn sort_key<'a>(&self, contact: &'a Contact) -> SortKey<'a> {
        self.effective_sort_field().key(contact)
    }

    /// Order two contacts by sort key, honouring the direction.
    ///
    /// Equal keys compare `Equal` in both directions, so a stable sort keeps
    /// their original relative order even when descending.
    pub fn compare(&self, a: &Contact, b: &Contact) -> Ordering {
        let ordering = self.sort_key(a).cmp(&self.sort_key(b));
        if self.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }

    pub fn matches_max_created_date(&self, contact: &Contact) -> bool {
        self.max_created_date
            .map_or(true, |bound| contact.created_at() <= bound)
    }

    pub fn matches_min_created_date(&self, contact: &Contact) -> bool {
        self.min_created_date
            .map_or(true, |bound| contact.created_at() >= bound)
    }

    pub fn matches_max_updated_date(&self, contact: &Contact) -> bool {
        self.max_updated_date
            .map_or(true, |bound| contact.updated_at() <= bound)
    }

    pub fn matches_min_updated_date(&self, contact: &Contact) -> bool {
        self.min_updated_date
            .map_or(true, |bound| contact.updated_at() >= bound)
    }

    /// Any token of the query is a case-insensitive substring of any present
    /// searchable field. Passes when no query is set.
    pub fn matches_search_query(&self, contact: &Contact) -> bool {
        let Some(query) = self.search_query.as_deref() else {
            return true;
        };
        let tokens = search_tokens(query);
        contact
            .searchable_fields()
            .into_iter()
            .flatten()
            .any(|value| value_matches_tokens(value, &tokens))
    }
}

/// Split a query on every whitespace character, lower-cased.
///
/// Consecutive or leading whitespace produces empty tokens, and an empty
/// token is a substring of every value.
pub fn search_tokens(query: &str) -> Vec<String> {
    query.split(char::is_whitespace).map(str::to_lowercase).collect()
}

fn value_matches_tokens(value: &str, tokens: &[String]) -> bool {
    let value = value.to_lowercase();
    tokens.iter().any(|token| value.contains(token.as_str()))
}

fn display_bound<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

impl fmt::Display for ContactFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Filter:")?;
        writeln!(f, "  Search Query: {}", display_bound(self.search_query.as_deref()))?;
        writeln!(f, "  Min Created Date: {}", display_bound(self.min_created_date))?;
        writeln!(f, "  Max Created Date: {}", display_bound(self.max_created_date))?;
        writeln!(f, "  Min Updated Date: {}", display_bound(self.min_updated_date))?;
        writeln!(f, "  Max Updated Date: {}", display_bound(self.max_updated_date))?;
        writeln!(f, "  Ascending: {}", self.ascending)?;
        writeln!(f, "  Sort Field: {}", self.effective_sort_field())
    }
}
