//! The in-memory contact collection and its filtered view.

use crate::error::{PhoneBookError, PhoneBookResult};
use crate::filter::ContactFilter;
use crate::models::Contact;
use crate::observability::{MetricsTracker, Timer};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::hash::Hash;
use tracing::{debug, info};

/// Owns the contacts, the active filter, and the view that filter produces.
///
/// `current_results` is always the output of applying the active filter to
/// the current contacts: every mutation below recomputes it before
/// returning.
#[derive(Debug, Default)]
pub struct PhoneBook {
    contacts: Vec<Contact>,
    contact_filter: ContactFilter,
    /// Indices into `contacts`, in view order.
    current_results: Vec<usize>,
    metrics: MetricsTracker,
}

impl PhoneBook {
    /// Create an empty phone book with the default filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a phone book seeded with contacts, in the given order.
    ///
    /// # Errors
    ///
    /// Returns `PhoneBookError::DuplicateContact` if two contacts share an id.
    pub fn with_contacts(contacts: impl IntoIterator<Item = Contact>) -> PhoneBookResult<Self> {
        let mut phone_book = Self::new();
        for contact in contacts {
            phone_book.add_contact(contact)?;
        }
        Ok(phone_book)
    }

    /// Report activity to a shared metrics tracker.
    pub fn with_metrics(mut self, metrics: MetricsTracker) -> Self {
        self.metrics = metrics;
        self
    }

    /// All contacts in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contact_filter(&self) -> &ContactFilter {
        &self.contact_filter
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// The contacts matching the active filter, in sorted order.
    pub fn current_results(&self) -> Vec<&Contact> {
        self.current_results
            .iter()
            .map(|&index| &self.contacts[index])
            .collect()
    }

    /// Make `contact_filter` the active filter and return the resulting view.
    ///
    /// Matching contacts keep their insertion order, then a stable sort by
    /// the filter's key is applied, so contacts with equal keys stay in
    /// insertion order in either direction.
    pub fn apply(&mut self, contact_filter: ContactFilter) -> Vec<&Contact> {
        let timer = Timer::new("apply_filter");
        self.current_results = Self::view(&self.contacts, &contact_filter);
        self.contact_filter = contact_filter;
        self.metrics.track_filter_applied(
            timer.elapsed_us(),
            self.current_results.len(),
            self.contacts.len(),
        );
        self.current_results()
    }

    /// Re-apply the active filter to the current contacts.
    pub fn refresh_current_results(&mut self) {
        self.current_results = Self::view(&self.contacts, &self.contact_filter);
    }

    fn view(contacts: &[Contact], contact_filter: &ContactFilter) -> Vec<usize> {
        let mut indices: Vec<usize> = contacts
            .iter()
            .enumerate()
            .filter(|(_, contact)| contact_filter.matches(contact))
            .map(|(index, _)| index)
            .collect();
        // sort_by is stable
        indices.sort_by(|&a, &b| contact_filter.compare(&contacts[a], &contacts[b]));
        indices
    }

    /// Register a new contact.
    ///
    /// # Errors
    ///
    /// Returns `PhoneBookError::DuplicateContact` if a contact with the same
    /// id is already registered. The phone book is left unchanged.
    pub fn add_contact(&mut self, contact: Contact) -> PhoneBookResult<()> {
        if self.position_of(contact.id().as_str()).is_some() {
            return Err(PhoneBookError::DuplicateContact(contact.id().to_string()));
        }

        info!(
            contact_id = %contact.id(),
            name = %contact.full_name(),
            "Contact created"
        );
        self.contacts.push(contact);
        self.metrics.track_contact_added();
        self.refresh_current_results();
        Ok(())
    }

    /// Remove the contact with the same identity as `contact`.
    ///
    /// Identity is the contact id; field values are not compared.
    ///
    /// # Errors
    ///
    /// Returns `PhoneBookError::ContactNotRegistered` if no owned contact has
    /// that id.
    pub fn delete_contact(&mut self, contact: &Contact) -> PhoneBookResult<Contact> {
        let index = self
            .position_of(contact.id().as_str())
            .ok_or_else(|| PhoneBookError::ContactNotRegistered(contact.id().to_string()))?;

        let removed = self.contacts.remove(index);
        info!(
            contact_id = %removed.id(),
            name = %removed.full_name(),
            "Contact deleted"
        );
        self.metrics.track_contacts_deleted(1);
        self.refresh_current_results();
        Ok(removed)
    }

    /// Remove every contact whose id equals `contact_id`.
    ///
    /// Returns the number of contacts removed.
    ///
    /// # Errors
    ///
    /// Returns `PhoneBookError::NoContactsMatched` if no contact has that id.
    pub fn delete_contacts_by_id(&mut self, contact_id: &str) -> PhoneBookResult<usize> {
        let before = self.contacts.len();
        self.contacts.retain(|contact| contact.id().as_str() != contact_id);
        let removed = before - self.contacts.len();

        if removed == 0 {
            return Err(PhoneBookError::NoContactsMatched(contact_id.to_string()));
        }

        info!(contact_id = %contact_id, removed = removed, "Contacts deleted by id");
        self.metrics.track_contacts_deleted(removed);
        self.refresh_current_results();
        Ok(removed)
    }

    /// Remove every contact currently in the filtered view.
    ///
    /// Returns the number of contacts removed. The view is always empty
    /// afterwards, since every remaining contact failed the active filter.
    pub fn delete_current_results(&mut self) -> usize {
        let doomed: HashSet<usize> = self.current_results.iter().copied().collect();
        if doomed.is_empty() {
            return 0;
        }

        let mut index = 0;
        self.contacts.retain(|_| {
            let keep = !doomed.contains(&index);
            index += 1;
            keep
        });

        info!(removed = doomed.len(), "Current results deleted");
        self.metrics.track_contacts_deleted(doomed.len());
        self.refresh_current_results();
        doomed.len()
    }

    /// Apply `edit` to the contact with `contact_id`, then refresh the view.
    ///
    /// The edit runs against a copy; the stored contact is replaced only if
    /// the edit succeeds, so a failed edit leaves the contact untouched.
    ///
    /// # Errors
    ///
    /// Returns `PhoneBookError::NoContactsMatched` if no contact has that id,
    /// or whatever error `edit` returns.
    pub fn edit_contact<F>(&mut self, contact_id: &str, edit: F) -> PhoneBookResult<&Contact>
    where
        F: FnOnce(&mut Contact) -> PhoneBookResult<()>,
    {
        let index = self
            .position_of(contact_id)
            .ok_or_else(|| PhoneBookError::NoContactsMatched(contact_id.to_string()))?;

        let mut edited = self.contacts[index].clone();
        edit(&mut edited)?;
        if edited.id() != self.contacts[index].id() {
            return Err(PhoneBookError::InvalidInput(
                "Contact id cannot be changed".to_string(),
            ));
        }

        debug!(contact_id = %contact_id, "Contact updated");
        self.contacts[index] = edited;
        self.refresh_current_results();
        Ok(&self.contacts[index])
    }

    pub fn retrieve_contacts_by_id(&self, contact_id: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|contact| contact.id().as_str() == contact_id)
            .collect()
    }

    /// Contacts whose full name contains `name`, ignoring case.
    pub fn retrieve_contacts_by_name(&self, name: &str) -> Vec<&Contact> {
        let name = name.to_lowercase();
        self.contacts
            .iter()
            .filter(|contact| contact.full_name().to_lowercase().contains(&name))
            .collect()
    }

    /// Contacts whose phone number contains `phone_number` verbatim.
    pub fn retrieve_contacts_by_phone(&self, phone_number: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|contact| contact.phone_number().as_str().contains(phone_number))
            .collect()
    }

    /// Partition `contacts` by `key`.
    ///
    /// Groups appear in the order their key is first seen and each group
    /// keeps the input order of its members.
    pub fn group_by<'a, K, F>(
        contacts: impl IntoIterator<Item = &'a Contact>,
        mut key: F,
    ) -> IndexMap<K, Vec<&'a Contact>>
    where
        K: Hash + Eq,
        F: FnMut(&Contact) -> K,
    {
        let mut groups: IndexMap<K, Vec<&'a Contact>> = IndexMap::new();
        for contact in contacts {
            groups.entry(key(contact)).or_default().push(contact);
        }
        groups
    }

    fn position_of(&self, contact_id: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|contact| contact.id().as_str() == contact_id)
    }
}
