//! The address book container.

mod address_book;

pub use address_book::AddressBook;
