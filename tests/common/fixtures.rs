//! Test fixtures and sample data.
//!
//! Builders for records and books used across the integration tests.

use contact_book::{AddressBook, Record};

/// Create a record with the given phones.
///
/// Panics if any phone is malformed; fixtures only use valid numbers.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record
            .add_phone(*phone)
            .unwrap_or_else(|e| panic!("fixture phone rejected: {}", e));
    }
    record
}

/// A book with three contacts: Alice (two phones), Bob (one), Carol (none).
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("Alice", &["1111111111", "2222222222"]));
    book.add_record(sample_record("Bob", &["3333333333"]));
    book.add_record(sample_record("Carol", &[]));
    book
}
