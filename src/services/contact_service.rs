//! Contact service layer.
//!
//! Name-addressed operations over an [`AddressBook`], with the configured
//! phone-edit policy applied and every mutation traced.

use crate::book::AddressBook;
use crate::config::Config;
use crate::error::ValidationResult;
use crate::models::Record;
use tracing::{debug, info, warn};

/// How [`ContactService::change_phone`] treats the replacement number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhoneEditPolicy {
    /// Store the replacement as given (see [`Record::edit_phone`]).
    #[default]
    Lenient,

    /// Reject malformed replacements (see [`Record::try_edit_phone`]).
    Strict,
}

/// Facade over an [`AddressBook`] addressed by contact name.
///
/// Operations on a missing contact are not errors: they leave the book as it
/// is and return `false`. The only error is a [`ValidationError`] for a
/// malformed phone number.
///
/// [`ValidationError`]: crate::domain::ValidationError
#[derive(Debug, Default)]
pub struct ContactService {
    book: AddressBook,
    policy: PhoneEditPolicy,
}

impl ContactService {
    /// Create a service over an empty book.
    pub fn new(policy: PhoneEditPolicy) -> Self {
        Self::with_book(AddressBook::new(), policy)
    }

    /// Create a service over an existing book.
    pub fn with_book(book: AddressBook, policy: PhoneEditPolicy) -> Self {
        Self { book, policy }
    }

    /// Create a service over an empty book using the configured policy.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.edit_policy())
    }

    pub fn policy(&self) -> PhoneEditPolicy {
        self.policy
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Look up a contact by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.book.find(name)
    }

    /// Store a new contact with the given phones, replacing any contact of
    /// the same name.
    ///
    /// All phones are validated before the book is touched, so a malformed
    /// number leaves any existing contact in place.
    pub fn add_contact<S: AsRef<str>>(
        &mut self,
        name: &str,
        phones: &[S],
    ) -> ValidationResult<()> {
        let mut record = Record::new(name);
        for phone in phones {
            record.add_phone(phone.as_ref())?;
        }

        let phone_count = record.phones().len();
        if self.book.add_record(record).is_some() {
            warn!(contact = name, "Replaced existing contact");
        }
        info!(contact = name, phones = phone_count, "Contact saved");
        Ok(())
    }

    /// Append a phone to an existing contact.
    ///
    /// Returns `false` if the contact does not exist.
    pub fn add_phone(&mut self, name: &str, number: &str) -> ValidationResult<bool> {
        let Some(record) = self.book.find_mut(name) else {
            debug!(contact = name, "add_phone: no such contact");
            return Ok(false);
        };

        record.add_phone(number)?;
        info!(contact = name, phone = number, "Phone added");
        Ok(true)
    }

    /// Replace `old` with `new` on a contact, honouring the edit policy.
    ///
    /// Returns `false` if the contact does not exist. A missing `old` number
    /// is not an error.
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> ValidationResult<bool> {
        let Some(record) = self.book.find_mut(name) else {
            debug!(contact = name, "change_phone: no such contact");
            return Ok(false);
        };

        let replaced = match self.policy {
            PhoneEditPolicy::Lenient => record.edit_phone(old, new),
            PhoneEditPolicy::Strict => record.try_edit_phone(old, new)?,
        };

        if replaced == 0 {
            debug!(contact = name, phone = old, "change_phone: no matching phone");
        } else {
            info!(contact = name, old, new, replaced, policy = ?self.policy, "Phone changed");
        }
        Ok(true)
    }

    /// Remove every occurrence of `number` from a contact.
    ///
    /// Returns `false` if the contact does not exist.
    pub fn remove_phone(&mut self, name: &str, number: &str) -> bool {
        match self.book.find_mut(name) {
            Some(record) => {
                let removed = record.remove_phone(number);
                if removed == 0 {
                    debug!(contact = name, phone = number, "remove_phone: no matching phone");
                } else {
                    info!(contact = name, phone = number, removed, "Phone removed");
                }
                true
            }
            None => {
                debug!(contact = name, "remove_phone: no such contact");
                false
            }
        }
    }

    /// Delete a contact. Returns `false` if it did not exist.
    pub fn delete_contact(&mut self, name: &str) -> bool {
        let removed = self.book.delete(name).is_some();
        if removed {
            info!(contact = name, "Contact deleted");
        } else {
            debug!(contact = name, "delete_contact: no such contact");
        }
        removed
    }
}
