//! Scripted end-to-end sessions through the menu loop.
//!
//! Menu numbers: 1 Create, 2 Show, 3 Show Current, 4 Edit, 5 Delete,
//! 6 Delete Current Results, 7 Update Filter, 8 Reset Filter, 9 Group, 10 Exit.

mod common;

use common::*;
use phone_book::{ContactPrinter, PhoneBook, PhoneBookController};
use std::io::Cursor;

fn run_session(phone_book: PhoneBook, script: &str) -> (PhoneBook, String) {
    let mut controller = PhoneBookController::new(
        phone_book,
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
    )
    .with_printer(ContactPrinter::new(16));
    controller.run().unwrap();
    let (phone_book, output) = controller.into_parts();
    (phone_book, String::from_utf8(output).unwrap())
}

#[test]
fn test_create_then_show() {
    let script = "1\nAda\nLovelace\n(123) 456-7890\nada@example.com\n\n2\n10\n";
    let (phone_book, output) = run_session(PhoneBook::new(), script);

    assert_eq!(phone_book.len(), 1);
    assert!(output.contains("Contact 'Ada Lovelace'(id="));
    assert!(output.contains("ada@example.com"));
}

#[test]
fn test_failed_action_does_not_end_session() {
    // invalid phone, then a valid contact
    let script = "1\nAda\nLovelace\n12\n\n\n\
                  1\nAda\nLovelace\n(123) 456-7890\n\n\n10\n";
    let (phone_book, output) = run_session(PhoneBook::new(), script);

    assert_eq!(phone_book.len(), 1);
    assert!(output.contains("Error: Invalid phone number: 12"));
}

#[test]
fn test_filter_then_group_current_results() {
    // search "smith", leave the other six fields, then group by last name
    let script = "7\ny\nsmith\nn\nn\nn\nn\nn\nn\n9\n2\n10\n";
    let (phone_book, output) = run_session(sample_phone_book(), script);

    assert_eq!(first_names(&phone_book.current_results()), ["Jane", "Joe"]);
    assert!(output.contains("Current filter matches 2 contacts shown below"));
    assert!(output.contains("S\n--------------------\n"));
    assert!(!output.contains("D\n--------------------\n"));
}

#[test]
fn test_sort_descending_by_first_name() {
    let script = "7\nn\nn\nn\nn\nn\ny\nno\ny\nfirst_name\n10\n";
    let (phone_book, _) = run_session(sample_phone_book(), script);

    assert_eq!(first_names(&phone_book.current_results()), ["John", "Joe", "Jane"]);
}

#[test]
fn test_reset_filter() {
    let script = "7\ny\njane\nn\nn\nn\nn\nn\nn\n8\n10\n";
    let (phone_book, output) = run_session(sample_phone_book(), script);

    assert_eq!(phone_book.current_results().len(), 3);
    assert!(output.contains("Filter is reset"));
}

#[test]
fn test_delete_current_results_after_confirmation() {
    let script = "7\ny\nsmith\nn\nn\nn\nn\nn\nn\n6\ny\n10\n";
    let (phone_book, output) = run_session(sample_phone_book(), script);

    assert_eq!(phone_book.len(), 1);
    assert!(output.contains("2 contacts deleted"));
}

#[test]
fn test_delete_by_id_and_edit() {
    let phone_book = sample_phone_book();
    let john_id = phone_book.contacts()[0].id().to_string();
    let jane_id = phone_book.contacts()[1].id().to_string();
    let script = format!(
        "5\n{}\n4\n{}\nn\nn\ny\n(222) 333-4444\nn\nn\n10\n",
        jane_id, john_id
    );
    let (phone_book, output) = run_session(phone_book, &script);

    assert_eq!(phone_book.len(), 2);
    assert!(output.contains(&format!("Contacts with id:{} successfully deleted", jane_id)));
    assert_eq!(
        phone_book.contacts()[0].phone_number().as_str(),
        "(222) 333-4444"
    );
    assert!(phone_book.contacts()[0].updated_at() > t1());
}

#[test]
fn test_session_ends_without_exit_when_input_runs_out() {
    let (phone_book, output) = run_session(sample_phone_book(), "3\n");
    assert_eq!(phone_book.len(), 3);
    assert!(output.contains("Current filter matches 3 contacts shown below"));
}
