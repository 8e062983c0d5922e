//! Phone field.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("Failed to compile phone regex"));

/// Kind tag for phone numbers.
///
/// # Validation Rules
///
/// - Exactly 10 characters
/// - Every character is a decimal digit (Unicode `Nd`, so fullwidth and
///   Arabic-Indic digits count as well as `0-9`)
///
/// No separators, country prefix or whitespace are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PhoneKind;

impl FieldKind for PhoneKind {
    fn check(value: &str) -> Result<(), ValidationError> {
        if Phone::validate(value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidPhone(value.to_string()))
        }
    }
}

/// A phone number of a contact.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// assert!(Phone::validate("0671234567"));
/// assert!(!Phone::validate("+380671234567"));
/// ```
pub type Phone = Field<PhoneKind>;

impl Field<PhoneKind> {
    /// Check whether `value` is a well-formed phone number.
    pub fn validate(value: &str) -> bool {
        PHONE_REGEX.is_match(value)
    }
}
