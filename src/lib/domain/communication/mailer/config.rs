//! Transport configuration for a single send attempt

use std::fmt;

use crate::domain::communication::email_addresses::AddressRef;

use super::SmtpPassword;

/// The host the default transport relays through
pub const DEFAULT_HOST: &str = "localhost";

/// The port the default transport relays through
pub const DEFAULT_PORT: u16 = 25;

/// Connection encryption
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SecureMode {
    /// Plain connection, optionally upgraded when `auto_tls` is set
    #[default]
    None,

    /// Implicit TLS from the first byte (SMTPS)
    Ssl,

    /// Mandatory STARTTLS upgrade
    Tls,
}

impl fmt::Display for SecureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Ssl => write!(f, "ssl"),
            Self::Tls => write!(f, "tls"),
        }
    }
}

/// Transport settings of one outbound mail attempt.
///
/// The caller owns the value and fills in defaults; the SMTP URI mapper only
/// overwrites the fields the URI decides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailerConfig {
    /// Send through the configured SMTP server rather than the default relay
    pub use_smtp: bool,

    /// Connection encryption
    pub secure: SecureMode,

    /// SMTP server host name
    pub host: String,

    /// SMTP server port
    pub port: u16,

    /// Upgrade a plain connection with STARTTLS when the server offers it
    pub auto_tls: bool,

    /// Authenticate with `username` and `password`
    pub auth_enabled: bool,

    /// SMTP user name
    pub username: String,

    /// SMTP password
    pub password: SmtpPassword,

    /// An additional blind carbon-copy recipient
    pub extra_bcc: Option<AddressRef>,

    /// Transport debug verbosity
    pub debug_level: Option<i32>,

    /// Replacement for the sender address
    pub from: Option<AddressRef>,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            use_smtp: false,
            secure: SecureMode::None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            auto_tls: true,
            auth_enabled: false,
            username: String::new(),
            password: SmtpPassword::default(),
            extra_bcc: None,
            debug_level: None,
            from: None,
        }
    }
}

impl fmt::Display for MailerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.use_smtp {
            return write!(f, "default transport ({}:{})", self.host, self.port);
        }

        write!(f, "smtp {}:{} secure={}", self.host, self.port, self.secure)?;

        if self.secure == SecureMode::None {
            write!(f, " auto_tls={}", self.auto_tls)?;
        }

        if self.auth_enabled {
            write!(f, " user={} password={}", self.username, self.password)?;
        }

        if let Some(level) = self.debug_level {
            write!(f, " debug={}", level)?;
        }

        Ok(())
    }
}
