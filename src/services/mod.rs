//! Application service layer.
//!
//! Services sit between callers and the [`AddressBook`](crate::AddressBook):
//! they address contacts by name, apply configured policy and log what they
//! change.

mod contact_service;

pub use contact_service::{ContactService, PhoneEditPolicy};
