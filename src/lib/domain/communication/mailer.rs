//! Mailer module

mod config;
mod errors;
mod message;
mod password;

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

pub use config::{MailerConfig, SecureMode, DEFAULT_HOST, DEFAULT_PORT};
pub use errors::MailerError;
pub use message::OutgoingMessage;
pub use password::SmtpPassword;

/// Mail transport
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `config` - The [`MailerConfig`] of this attempt, with every address reference resolved.
    /// * `message` - The [`OutgoingMessage`] to send.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn send_email(
        &self,
        config: &MailerConfig,
        message: &OutgoingMessage,
    ) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send_email(&self, config: &MailerConfig, message: &OutgoingMessage) -> Result<(), MailerError>;
    }
}

#[cfg(test)]
pub mod tests {
    pub use super::MockMailer;
}
