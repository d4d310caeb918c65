//! Seeding a phone book from CSV files on disk.

use phone_book::{ImportError, PhoneBook};
use std::io::Write;
use tempfile::NamedTempFile;

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_from_csv_keeps_file_order() {
    let file = csv_file(
        "first_name,last_name,phone_number,email\n\
         John,Doe,(123) 456-7890,john@example.com\n\
         Jane,Smith,(987) 654-3210,\n\
         Joe,Smith,555.123.4567,joe@uottawa.ca\n",
    );

    let phone_book = PhoneBook::from_csv(file.path()).unwrap();
    let names: Vec<String> = phone_book.contacts().iter().map(|c| c.full_name()).collect();
    assert_eq!(names, ["John Doe", "Jane Smith", "Joe Smith"]);
    assert_eq!(phone_book.current_results().len(), 3);
}

#[test]
fn test_from_csv_rejects_repeated_id() {
    let file = csv_file(
        "id,first_name,last_name,phone_number\n\
         7f1c0a52-94b4-4d8e-8f0e-5a1f2c3d4e5f,John,Doe,(123) 456-7890\n\
         7F1C0A52-94B4-4D8E-8F0E-5A1F2C3D4E5F,Jane,Smith,(987) 654-3210\n",
    );

    match PhoneBook::from_csv(file.path()) {
        Err(ImportError::InvalidRecord { line, reason }) => {
            assert_eq!(line, 3);
            assert!(reason.contains("already exists"));
        }
        other => panic!("Expected InvalidRecord, got: {:?}", other),
    }
}

#[test]
fn test_from_csv_invalid_email() {
    let file = csv_file(
        "first_name,last_name,phone_number,email\n\
         John,Doe,(123) 456-7890,not-an-email\n",
    );

    match PhoneBook::from_csv(file.path()) {
        Err(ImportError::InvalidRecord { line, reason }) => {
            assert_eq!(line, 2);
            assert!(reason.contains("not-an-email"));
        }
        other => panic!("Expected InvalidRecord, got: {:?}", other),
    }
}

#[test]
fn test_from_csv_empty_file_with_header() {
    let file = csv_file("first_name,last_name,phone_number\n");
    let phone_book = PhoneBook::from_csv(file.path()).unwrap();
    assert!(phone_book.is_empty());
}
