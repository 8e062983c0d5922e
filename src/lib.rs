//! Contact Book - an in-memory address book of names and phone numbers.
//!
//! Contacts are addressed by name. Each contact holds an ordered list of
//! phone numbers, and every phone number is validated to be exactly ten
//! digits when it is created.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (`Name`, `Phone`) and `ValidationError`
//! - **models**: The `Record` type, one contact with its phones
//! - **book**: The `AddressBook` container keyed by contact name
//! - **services**: `ContactService`, name-addressed operations with logging
//! - **config**: Configuration from environment variables
//! - **error**: Error types for the application layers

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use book::AddressBook;
pub use config::Config;
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{ConfigError, ConfigResult, ValidationResult};
pub use models::Record;
pub use services::{ContactService, PhoneEditPolicy};
