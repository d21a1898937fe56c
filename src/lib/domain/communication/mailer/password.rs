//! SMTP password

use std::fmt;

/// An SMTP password, masked whenever it is displayed or debug-printed
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SmtpPassword(String);

impl SmtpPassword {
    /// Create a new password
    pub fn new(raw: &str) -> Self {
        Self(raw.to_string())
    }

    /// Whether the password is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the password in clear text
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SmtpPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl fmt::Debug for SmtpPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}
