//! Field value object.
//!
//! Every scalar attribute of a contact is a [`Field`]: a string tagged with a
//! zero-sized *kind* that decides which values may be constructed. Kinds
//! differ only in their predicate, so `Name` and `Phone` share one
//! implementation.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// The format rule behind a [`Field`].
pub trait FieldKind {
    /// Accept `value` or explain why a field of this kind cannot hold it.
    fn check(value: &str) -> Result<(), ValidationError>;
}

/// Marker for kinds whose predicate accepts every value.
///
/// Fields of these kinds can be built infallibly through `From`.
pub trait Unconstrained: FieldKind {}

/// A type-safe wrapper for a single string attribute.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Name, Phone};
///
/// let name = Name::from("Alice");
/// assert_eq!(name.to_string(), "Alice");
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(Phone::new("050-123-45").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field<K> {
    value: String,
    kind: PhantomData<K>,
}

impl<K: FieldKind> Field<K> {
    /// Create a new field, validating the value against the kind's rule.
    ///
    /// # Errors
    ///
    /// Returns the kind's [`ValidationError`] if the value is rejected.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        K::check(&value)?;
        Ok(Self::unchecked(value))
    }
}

impl<K> Field<K> {
    fn unchecked(value: String) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }

    /// Overwrite the stored value without consulting the kind's rule.
    pub(crate) fn replace_unchecked(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl<K: Unconstrained> From<String> for Field<K> {
    fn from(value: String) -> Self {
        Self::unchecked(value)
    }
}

impl<K: Unconstrained> From<&str> for Field<K> {
    fn from(value: &str) -> Self {
        Self::unchecked(value.to_string())
    }
}

impl<K> PartialEq<str> for Field<K> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<K> PartialEq<&str> for Field<K> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl<K> AsRef<str> for Field<K> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

// Serde support - serialize as string
impl<K> Serialize for Field<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de, K: FieldKind> Deserialize<'de> for Field<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Field::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl<K> fmt::Display for Field<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Lowercase;

    impl FieldKind for Lowercase {
        fn check(value: &str) -> Result<(), ValidationError> {
            if value.chars().all(|c| c.is_ascii_lowercase()) {
                Ok(())
            } else {
                Err(ValidationError::InvalidPhone(value.to_string()))
            }
        }
    }

    #[test]
    fn test_field_applies_kind_rule() {
        assert!(Field::<Lowercase>::new("abc").is_ok());
        assert!(Field::<Lowercase>::new("aBc").is_err());
    }

    #[test]
    fn test_field_rejection_carries_value() {
        let err = Field::<Lowercase>::new("ABC").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("ABC".to_string()));
    }

    #[test]
    fn test_replace_unchecked_skips_rule() {
        let mut field = Field::<Lowercase>::new("abc").unwrap();
        field.replace_unchecked("XYZ");
        assert_eq!(field.as_str(), "XYZ");
    }

    #[test]
    fn test_field_compares_with_str() {
        let field = Field::<Lowercase>::new("abc").unwrap();
        assert!(field == "abc");
        assert!(field != "abd");
    }

    #[test]
    fn test_field_into_inner_and_as_ref() {
        let field = Field::<Lowercase>::new("abc").unwrap();
        let as_ref: &str = field.as_ref();
        assert_eq!(as_ref, "abc");
        assert_eq!(field.into_inner(), "abc".to_string());
    }

    #[test]
    fn test_field_deserialization_validates() {
        let ok: Result<Field<Lowercase>, _> = serde_json::from_str("\"abc\"");
        assert!(ok.is_ok());

        let bad: Result<Field<Lowercase>, _> = serde_json::from_str("\"ABC\"");
        assert!(bad.is_err());
    }
}
