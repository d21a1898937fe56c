//! Email addresses module.

mod email_address;

pub use email_address::{AddressRef, EmailAddress, EmailAddressError};
