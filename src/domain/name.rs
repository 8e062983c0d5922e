//! Name field.

use super::errors::ValidationError;
use super::field::{Field, FieldKind, Unconstrained};

/// Kind tag for contact names. Any string is a valid name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NameKind;

impl FieldKind for NameKind {
    fn check(_value: &str) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Unconstrained for NameKind {}

/// The name of a contact; identifies a record inside the book.
pub type Name = Field<NameKind>;
