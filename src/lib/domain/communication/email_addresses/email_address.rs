//! Email Address

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").unwrap();
}

use std::fmt;

use thiserror::Error;

use EmailAddressError::*;

/// An error that can occur when creating an email address
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailAddressError {
    /// The email address is empty
    #[error("email is empty")]
    EmptyEmailAddress,

    /// The email address is invalid
    #[error("email is invalid")]
    InvalidEmailAddress,
}

/// An email address
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address
    pub fn new(raw: &str) -> Result<Self, EmailAddressError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(EmptyEmailAddress);
        }

        if !EMAIL_REGEX.is_match(trimmed) {
            return Err(InvalidEmailAddress);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create an email address without validating it
    pub fn new_unchecked(raw: &str) -> Self {
        Self(raw.to_string())
    }

    /// The address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

/// An address chosen by the transport configuration.
///
/// [`AddressRef::Admin`] is a placeholder for the administrator address, which
/// only the caller knows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddressRef {
    /// The administrator address
    Admin,

    /// A literal address
    Address(EmailAddress),
}

impl AddressRef {
    /// Resolves the reference, substituting `admin` for [`AddressRef::Admin`].
    ///
    /// Returns [`None`] when the administrator address is needed but unknown.
    pub fn resolve(&self, admin: Option<&EmailAddress>) -> Option<EmailAddress> {
        match self {
            Self::Admin => admin.cloned(),
            Self::Address(address) => Some(address.clone()),
        }
    }
}
