//! SMTP email service implementation

use anyhow::Result;
use async_trait::async_trait;
use lettre::{
    message::Mailbox,
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

use crate::domain::communication::mailer::{
    Mailer, MailerConfig, MailerError, OutgoingMessage, SecureMode,
};

/// How the connection to the SMTP server is secured
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TlsMode {
    /// Plain text only
    None,

    /// STARTTLS when the server offers it
    Opportunistic,

    /// STARTTLS or fail
    Required,

    /// TLS from the first byte
    Wrapper,
}

impl TlsMode {
    /// The mode a configuration asks for
    pub fn for_config(config: &MailerConfig) -> Self {
        match config.secure {
            SecureMode::Ssl => Self::Wrapper,
            SecureMode::Tls => Self::Required,
            SecureMode::None if config.auto_tls => Self::Opportunistic,
            SecureMode::None => Self::None,
        }
    }
}

/// SMTP mailer
#[derive(Debug, Default, Clone)]
pub struct SMTPMailer {
    sender: Option<String>,
}

impl SMTPMailer {
    /// Create a new SMTP mailer.
    ///
    /// `sender` is used for messages that do not name one.
    pub fn new(sender: Option<String>) -> Self {
        Self { sender }
    }

    /// Create the transport described by `config`
    pub fn transport(&self, config: &MailerConfig) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
        let tls = match TlsMode::for_config(config) {
            TlsMode::None => Tls::None,
            TlsMode::Opportunistic => Tls::Opportunistic(TlsParameters::new(config.host.clone())?),
            TlsMode::Required => Tls::Required(TlsParameters::new(config.host.clone())?),
            TlsMode::Wrapper => Tls::Wrapper(TlsParameters::new(config.host.clone())?),
        };

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
            .port(config.port)
            .tls(tls);

        if config.auth_enabled {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.expose().to_string(),
            ));
        }

        Ok(builder.build())
    }

    /// Build the message to hand to the transport
    pub fn message(&self, message: &OutgoingMessage) -> Result<Message, MailerError> {
        let from = message
            .from
            .as_ref()
            .or(self.sender.as_ref())
            .ok_or_else(|| MailerError::InvalidEmail("no sender address".to_string()))?;

        let mut builder = Message::builder()
            .from(from.parse::<Mailbox>()?)
            .subject(message.subject.clone());

        for to in &message.to {
            builder = builder.to(to.parse()?);
        }

        for cc in &message.cc {
            builder = builder.cc(cc.parse()?);
        }

        for bcc in &message.bcc {
            builder = builder.bcc(bcc.parse()?);
        }

        Ok(builder.body(message.body.clone())?)
    }
}

#[async_trait]
impl Mailer for SMTPMailer {
    async fn send_email(
        &self,
        config: &MailerConfig,
        message: &OutgoingMessage,
    ) -> Result<(), MailerError> {
        if let Some(level) = config.debug_level {
            debug!(level, transport = %config, tls = ?TlsMode::for_config(config), "SMTP debugging");
        }

        let email = self.message(message)?;

        match self.transport(config)?.send(email).await {
            Ok(_) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
