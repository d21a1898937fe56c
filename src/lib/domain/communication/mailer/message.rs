//! Email message

/// An outgoing email, as handed over by the application
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutgoingMessage {
    /// The sender of the email, if the application chose one
    pub from: Option<String>,

    /// The primary recipients
    pub to: Vec<String>,

    /// Carbon-copy recipients
    pub cc: Vec<String>,

    /// Blind carbon-copy recipients
    pub bcc: Vec<String>,

    /// The subject of the email
    pub subject: String,

    /// The plain text body of the email
    pub body: String,
}

impl OutgoingMessage {
    /// Create a message with a single recipient
    pub fn new(to: &str, subject: &str, body: &str) -> Self {
        Self {
            to: vec![to.to_string()],
            subject: subject.to_string(),
            body: body.to_string(),
            ..Default::default()
        }
    }

    /// Every recipient: To, then Cc, then Bcc
    pub fn recipients(&self) -> Vec<String> {
        self.to
            .iter()
            .chain(self.cc.iter())
            .chain(self.bcc.iter())
            .cloned()
            .collect()
    }
}
