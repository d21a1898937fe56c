//! Failure records and the log lines built from them

use serde::Serialize;

use super::sanitize::sanitize;

/// Prefix of every line written for a mail failure
pub const LOG_PREFIX: &str = "SMTP error: ";

/// What is known about a message that could not be sent
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    /// To, Cc and Bcc recipients
    pub recipients: Vec<String>,

    /// The subject of the message
    pub subject: String,

    /// The body of the message
    pub body: String,

    /// The error reported by the transport
    pub raw_error_text: String,
}

impl FailureRecord {
    /// The line logged when sending this message failed
    pub fn send_failure_line(&self) -> String {
        format!(
            "{}To,Cc,Bcc={} Subject={} Message={}",
            LOG_PREFIX,
            sanitize(&self.recipients),
            sanitize(&self.subject),
            sanitize(&self.body)
        )
    }

    /// The line logged for the transport error itself
    pub fn transport_error_line(&self) -> String {
        transport_error_line(&self.raw_error_text)
    }
}

/// The line logged for a transport-level error
pub fn transport_error_line(raw_error_text: &str) -> String {
    format!("{}{}", LOG_PREFIX, sanitize(raw_error_text))
}
