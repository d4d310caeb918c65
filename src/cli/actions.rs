//! Menu actions of the interactive session.
//!
//! Each action reads what it needs through the [`Prompt`], calls into the
//! [`PhoneBook`], and reports the result. Errors are returned to the
//! controller, which reports them and keeps the session going.

use super::printer::ContactPrinter;
use super::prompt::Prompt;
use crate::error::{PhoneBookError, PhoneBookResult};
use crate::filter::{ContactFilter, ContactSort};
use crate::models::Contact;
use crate::phone_book::{GroupKey, PhoneBook};
use std::fmt::Display;
use std::io::{BufRead, Write};

const UPDATE_QUESTION: &str = "Do you want to update it? (Type 'Yes' or 'No'): ";
const DATE_QUESTION: &str = "Type in the date (YYYY-MM-DD [HH:MM:SS], empty to clear): ";
const NO_CURRENT_RESULTS: &str = "No contacts matching current filter";

/// What the controller should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Continue,
    Exit,
}

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateContact,
    ShowContacts,
    ShowCurrentContacts,
    EditContact,
    DeleteContact,
    DeleteCurrentResults,
    UpdateFilter,
    ResetFilter,
    GroupContacts,
    Exit,
}

impl Action {
    /// The full menu, in display order.
    pub const ALL: [Action; 10] = [
        Action::CreateContact,
        Action::ShowContacts,
        Action::ShowCurrentContacts,
        Action::EditContact,
        Action::DeleteContact,
        Action::DeleteCurrentResults,
        Action::UpdateFilter,
        Action::ResetFilter,
        Action::GroupContacts,
        Action::Exit,
    ];

    /// The label shown in the menu.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateContact => "Create Contact",
            Self::ShowContacts => "Show Contacts",
            Self::ShowCurrentContacts => "Show Current Contacts",
            Self::EditContact => "Edit Contact",
            Self::DeleteContact => "Delete Contact",
            Self::DeleteCurrentResults => "Delete Current Results",
            Self::UpdateFilter => "Update Filter",
            Self::ResetFilter => "Reset Filter",
            Self::GroupContacts => "Group Contacts",
            Self::Exit => "Exit",
        }
    }

    pub fn execute<R: BufRead, W: Write>(
        &self,
        phone_book: &mut PhoneBook,
        prompt: &mut Prompt<R, W>,
        printer: &ContactPrinter,
    ) -> PhoneBookResult<ActionOutcome> {
        match self {
            Self::CreateContact => create_contact(phone_book, prompt)?,
            Self::ShowContacts => show_contacts(phone_book, prompt, printer)?,
            Self::ShowCurrentContacts => show_current_contacts(phone_book, prompt, printer)?,
            Self::EditContact => edit_contact(phone_book, prompt)?,
            Self::DeleteContact => delete_contact(phone_book, prompt)?,
            Self::DeleteCurrentResults => delete_current_results(phone_book, prompt, printer)?,
            Self::UpdateFilter => {
                let filter = updated_filter(prompt, phone_book.contact_filter())?;
                phone_book.apply(filter);
                show_current_contacts(phone_book, prompt, printer)?;
            }
            Self::ResetFilter => {
                phone_book.apply(ContactFilter::default());
                prompt.say("Filter is reset")?;
                show_current_contacts(phone_book, prompt, printer)?;
            }
            Self::GroupContacts => group_contacts(phone_book, prompt, printer)?,
            Self::Exit => return Ok(ActionOutcome::Exit),
        }
        Ok(ActionOutcome::Continue)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn or_none<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

/// Show the current value of a field and ask whether to change it.
fn should_update<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    label: &str,
    current: impl Display,
) -> PhoneBookResult<bool> {
    prompt.say(format!("Current value of '{}' is {}", label, current))?;
    prompt.ask_yes_no(UPDATE_QUESTION)
}

fn print_table<'a, R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    printer: &ContactPrinter,
    contacts: impl IntoIterator<Item = &'a Contact>,
) -> PhoneBookResult<()> {
    for line in printer.table(contacts) {
        prompt.say(line)?;
    }
    Ok(())
}

fn create_contact<R: BufRead, W: Write>(
    phone_book: &mut PhoneBook,
    prompt: &mut Prompt<R, W>,
) -> PhoneBookResult<()> {
    let first_name = prompt.ask("Enter First Name: ")?;
    let last_name = prompt.ask("Enter Last Name: ")?;
    let phone_number = prompt.ask("Enter Phone Number: ")?;
    let email = prompt.ask_optional("Enter Email (optional): ")?;
    let address = prompt.ask_optional("Enter Address (optional): ")?;

    let mut contact = Contact::new(first_name, last_name, phone_number)?;
    if let Some(email) = email {
        contact = contact.with_email(email)?;
    }
    if let Some(address) = address {
        contact = contact.with_address(address);
    }

    let message = format!("Contact '{}'(id={}) created", contact.full_name(), contact.id());
    phone_book.add_contact(contact)?;
    prompt.say(message)
}

fn show_contacts<R: BufRead, W: Write>(
    phone_book: &PhoneBook,
    prompt: &mut Prompt<R, W>,
    printer: &ContactPrinter,
) -> PhoneBookResult<()> {
    if phone_book.is_empty() {
        return prompt.say("No contacts");
    }
    print_table(prompt, printer, phone_book.contacts())
}

fn show_current_contacts<R: BufRead, W: Write>(
    phone_book: &PhoneBook,
    prompt: &mut Prompt<R, W>,
    printer: &ContactPrinter,
) -> PhoneBookResult<()> {
    let results = phone_book.current_results();
    prompt.say("Current filter is:")?;
    prompt.say(phone_book.contact_filter().to_string().trim_end())?;
    prompt.say(format!(
        "Current filter matches {} contacts shown below",
        results.len()
    ))?;
    if results.is_empty() {
        return prompt.say(NO_CURRENT_RESULTS);
    }
    print_table(prompt, printer, results)
}

fn edit_contact<R: BufRead, W: Write>(
    phone_book: &mut PhoneBook,
    prompt: &mut Prompt<R, W>,
) -> PhoneBookResult<()> {
    let contact_id = prompt.ask("Enter the contact id to edit: ")?;
    let contact_id = contact_id.trim();

    if phone_book.retrieve_contacts_by_id(contact_id).is_empty() {
        return prompt.say("No contact found, can't edit");
    }
    phone_book.edit_contact(contact_id, |contact| edit_fields(prompt, contact))?;
    prompt.say(format!("Contact {} updated", contact_id))
}

fn edit_fields<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    contact: &mut Contact,
) -> PhoneBookResult<()> {
    if should_update(prompt, "First Name", contact.first_name())? {
        contact.set_first_name(prompt.ask("Enter First Name: ")?)?;
    }
    if should_update(prompt, "Last Name", contact.last_name())? {
        contact.set_last_name(prompt.ask("Enter Last Name: ")?)?;
    }
    if should_update(prompt, "Phone Number", contact.phone_number())? {
        contact.set_phone_number(prompt.ask("Enter Phone Number: ")?)?;
    }
    if should_update(prompt, "Email", or_none(contact.email()))? {
        contact.set_email(prompt.ask_optional("Enter Email (empty to clear): ")?)?;
    }
    if should_update(prompt, "Address", or_none(contact.address()))? {
        contact.set_address(prompt.ask_optional("Enter Address (empty to clear): ")?);
    }
    Ok(())
}

fn delete_contact<R: BufRead, W: Write>(
    phone_book: &mut PhoneBook,
    prompt: &mut Prompt<R, W>,
) -> PhoneBookResult<()> {
    let contact_id = prompt.ask("Enter the contact id to delete: ")?;
    let contact_id = contact_id.trim();

    let found = phone_book.retrieve_contacts_by_id(contact_id).len();
    prompt.say(format!("Found {} contacts by {}", found, contact_id))?;
    phone_book.delete_contacts_by_id(contact_id)?;
    prompt.say(format!("Contacts with id:{} successfully deleted", contact_id))
}

fn delete_current_results<R: BufRead, W: Write>(
    phone_book: &mut PhoneBook,
    prompt: &mut Prompt<R, W>,
    printer: &ContactPrinter,
) -> PhoneBookResult<()> {
    if phone_book.current_results().is_empty() {
        return prompt.say(NO_CURRENT_RESULTS);
    }
    show_current_contacts(phone_book, prompt, printer)?;

    let confirmed = prompt.ask_yes_no(
        "Are you sure you want to delete all these contacts? (Type 'Yes' or 'Y' to confirm): ",
    )?;
    if !confirmed {
        return prompt.say("Operation cancelled");
    }
    let removed = phone_book.delete_current_results();
    prompt.say(format!("{} contacts deleted", removed))
}

/// Walk through every filter field, returning the updated copy.
fn updated_filter<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    current: &ContactFilter,
) -> PhoneBookResult<ContactFilter> {
    let mut filter = current.clone();

    if should_update(prompt, "Search Query", or_none(filter.search_query()))? {
        let query = prompt.ask(
            "Type in the new search query (query components separated by a space, empty to clear): ",
        )?;
        filter = filter.with_search_query(Some(query).filter(|q| !q.is_empty()));
    }
    if should_update(prompt, "Min Created Date", or_none(filter.min_created_date()))? {
        filter = filter.with_min_created_date(prompt.ask_datetime(DATE_QUESTION)?);
    }
    if should_update(prompt, "Max Created Date", or_none(filter.max_created_date()))? {
        filter = filter.with_max_created_date(prompt.ask_datetime(DATE_QUESTION)?);
    }
    if should_update(prompt, "Min Updated Date", or_none(filter.min_updated_date()))? {
        filter = filter.with_min_updated_date(prompt.ask_datetime(DATE_QUESTION)?);
    }
    if should_update(prompt, "Max Updated Date", or_none(filter.max_updated_date()))? {
        filter = filter.with_max_updated_date(prompt.ask_datetime(DATE_QUESTION)?);
    }
    if should_update(prompt, "Is Sort Ascending", filter.is_ascending())? {
        let ascending =
            prompt.ask_yes_no("Do you want the sort to be ascending? (Type 'Yes' or 'No'): ")?;
        filter = filter.with_ascending(ascending);
    }
    if should_update(prompt, "Sort Field", filter.effective_sort_field())? {
        let choice = prompt.ask(&format!(
            "Select a sort field (one of {}): ",
            ContactSort::names()
        ))?;
        filter = filter.with_sort_field_name(&choice)?;
    }

    Ok(filter)
}

fn group_contacts<R: BufRead, W: Write>(
    phone_book: &PhoneBook,
    prompt: &mut Prompt<R, W>,
    printer: &ContactPrinter,
) -> PhoneBookResult<()> {
    let results = phone_book.current_results();
    if results.is_empty() {
        return prompt.say("No contacts, can't group");
    }

    for (index, key) in GroupKey::ALL.iter().enumerate() {
        prompt.say(format!("{} - {}", index + 1, key))?;
    }
    let choice = prompt.ask("Group by: ")?;
    let key = choice
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| GroupKey::ALL.get(index).copied())
        .ok_or_else(|| PhoneBookError::InvalidInput(format!("Unknown grouping '{}'", choice)))?;

    let groups = PhoneBook::group_by(results, |contact| key.key(contact));
    for (name, group) in groups {
        prompt.say(name)?;
        prompt.say("-".repeat(20))?;
        print_table(prompt, printer, group)?;
    }
    Ok(())
}
