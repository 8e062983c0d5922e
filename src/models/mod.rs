//! Data models for the contact book.
//!
//! A [`Record`] is one contact: a name plus zero or more phone numbers.

pub mod record;

pub use record::Record;
