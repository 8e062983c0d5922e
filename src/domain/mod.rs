//! Domain value objects and types.
//!
//! Contact attributes are [`Field`]s: strings tagged with a kind that gates
//! construction. [`Name`] accepts anything, [`Phone`] requires exactly ten
//! digits.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::{Field, FieldKind, Unconstrained};
pub use name::{Name, NameKind};
pub use phone::{Phone, PhoneKind};
