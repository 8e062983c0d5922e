//! Record model: one contact with its phone numbers.

use crate::domain::{Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// The name is fixed at construction; phones are kept in insertion order and
/// may contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with the given name and no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::from(name.into()),
            phones: Vec::new(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones, in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `number` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `number` is not ten digits.
    /// The record is left unchanged in that case.
    pub fn add_phone(&mut self, number: impl Into<String>) -> Result<(), ValidationError> {
        let phone = Phone::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `number`. Does nothing if none match.
    ///
    /// Returns how many phones were removed.
    pub fn remove_phone(&mut self, number: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|phone| phone != number);
        before - self.phones.len()
    }

    /// Replace every phone equal to `old` with `new`.
    ///
    /// `new` is stored as given, without format validation. Use
    /// [`Record::try_edit_phone`] to reject malformed replacements.
    ///
    /// Returns how many phones were replaced; zero when `old` is absent.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> usize {
        self.replace_matching(old, new)
    }

    /// Like [`Record::edit_phone`], but validates `new` first.
    ///
    /// Returns how many phones were replaced; zero when `old` is absent.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new` is not ten digits.
    /// No phone is modified in that case.
    pub fn try_edit_phone(&mut self, old: &str, new: &str) -> Result<usize, ValidationError> {
        let new = Phone::new(new)?;
        Ok(self.replace_matching(old, new.as_str()))
    }

    /// First phone equal to `number`, if any.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| *phone == number)
    }

    fn replace_matching(&mut self, old: &str, new: &str) -> usize {
        let mut replaced = 0;
        for phone in self.phones.iter_mut().filter(|phone| **phone == old) {
            phone.replace_unchecked(new);
            replaced += 1;
        }
        replaced
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_no_phones() {
        let record = Record::new("Alice");
        assert_eq!(record.name().as_str(), "Alice");
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_add_then_find_phone() {
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();

        let phone = record.find_phone("1234567890").expect("phone should be present");
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_add_invalid_phone_leaves_record_unchanged() {
        let mut record = Record::new("Alice");
        let err = record.add_phone("12345").unwrap_err();

        assert_eq!(err, ValidationError::InvalidPhone("12345".to_string()));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_add_phone_keeps_duplicates() {
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record.add_phone("1234567890").unwrap();

        assert_eq!(record.remove_phone("1234567890"), 2);

        assert!(record.find_phone("1234567890").is_none());
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "5555555555");
    }

    #[test]
    fn test_remove_missing_phone_is_noop() {
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.remove_phone("0000000000"), 0);
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone() {
        let mut record = Record::new("Alice");
        record.add_phone("1111111111").unwrap();

        assert_eq!(record.edit_phone("1111111111", "2222222222"), 1);

        assert!(record.find_phone("1111111111").is_none());
        assert_eq!(
            record.find_phone("2222222222").map(Phone::as_str),
            Some("2222222222")
        );
    }

    #[test]
    fn test_edit_phone_skips_validation() {
        let mut record = Record::new("Alice");
        record.add_phone("1111111111").unwrap();

        record.edit_phone("1111111111", "not-a-phone");

        assert_eq!(record.phones()[0].as_str(), "not-a-phone");
    }

    #[test]
    fn test_edit_missing_phone_is_noop() {
        let mut record = Record::new("Alice");
        record.add_phone("1111111111").unwrap();
        assert_eq!(record.edit_phone("9999999999", "2222222222"), 0);
        assert_eq!(record.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn test_try_edit_phone_counts_replacements() {
        let mut record = Record::new("Alice");
        record.add_phone("1111111111").unwrap();
        record.add_phone("3333333333").unwrap();
        record.add_phone("1111111111").unwrap();

        let replaced = record.try_edit_phone("1111111111", "2222222222").unwrap();

        assert_eq!(replaced, 2);
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 2222222222; 3333333333; 2222222222"
        );
    }

    #[test]
    fn test_try_edit_phone_rejects_invalid_target() {
        let mut record = Record::new("Alice");
        record.add_phone("1111111111").unwrap();

        let result = record.try_edit_phone("1111111111", "22-22");

        assert!(result.is_err());
        assert_eq!(record.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn test_display() {
        let mut record = Record::new("Alice");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 1111111111; 2222222222"
        );
    }

    #[test]
    fn test_display_without_phones() {
        let record = Record::new("Bob");
        assert_eq!(record.to_string(), "Contact name: Bob, phones: ");
    }

    #[test]
    fn test_record_serialization() {
        let mut record = Record::new("Alice");
        record.add_phone("1111111111").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Alice","phones":["1111111111"]}"#);
    }

    #[test]
    fn test_record_deserialization_validates_phones() {
        let ok: Record =
            serde_json::from_str(r#"{"name":"Alice","phones":["1111111111"]}"#).unwrap();
        assert_eq!(ok.phones().len(), 1);

        let missing: Record = serde_json::from_str(r#"{"name":"Bob"}"#).unwrap();
        assert!(missing.phones().is_empty());

        let bad: Result<Record, _> = serde_json::from_str(r#"{"name":"Alice","phones":["123"]}"#);
        assert!(bad.is_err());
    }
}
