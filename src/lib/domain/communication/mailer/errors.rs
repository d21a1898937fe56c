//! Mailer errors

use lettre::address::AddressError;
use thiserror::Error;
use tracing::debug;

/// Errors raised by a [`Mailer`](super::Mailer) while sending
#[derive(Debug, Error)]
pub enum MailerError {
    /// The transport rejected or failed to deliver the message
    #[error("{0}")]
    SendError(String),

    /// Invalid email address
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::UnknownError(err)
    }
}

impl From<AddressError> for MailerError {
    fn from(err: AddressError) -> Self {
        debug!("AddressError -> MailerError");

        MailerError::InvalidEmail(err.to_string())
    }
}

impl From<lettre::error::Error> for MailerError {
    fn from(err: lettre::error::Error) -> Self {
        debug!("lettre::error::Error -> MailerError");

        MailerError::UnknownError(err.into())
    }
}

impl From<lettre::transport::smtp::Error> for MailerError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        debug!("lettre::transport::smtp::Error -> MailerError");

        MailerError::SendError(err.to_string())
    }
}
