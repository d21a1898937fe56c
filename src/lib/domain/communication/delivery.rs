//! Mail delivery
//!
//! Ties the SMTP URI mapper, a [`Mailer`] and the failure log together for
//! each outgoing message. Delivery is best effort: failures end up in the log
//! sink, never in the caller's control flow.

mod last_attempt;

use std::{fmt, sync::Arc};

use tracing::{debug, info, warn};

use crate::domain::{
    communication::{
        email_addresses::{AddressRef, EmailAddress},
        mailer::{Mailer, MailerConfig, OutgoingMessage},
        smtp_uri::{self, SmtpUriSource},
    },
    logging::{transport_error_line, CriticalEventReporter, FailureRecord, LogSink},
};

pub use last_attempt::LastAttempt;

/// Line logged when the critical event reporter refuses an event
pub const REPORT_FAILURE_LINE: &str = "Critical event report failure.";

/// Delivery configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliverySettings {
    /// The SMTP URI in effect
    pub smtp_uri: SmtpUriSource,

    /// The administrator address, used as sender fallback and for `/admin_email`
    pub admin_email: Option<EmailAddress>,
}

/// The result of a send attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The transport accepted the message
    Sent,

    /// The transport failed; the failure has been logged
    Failed,
}

/// Delivery service
pub struct DeliveryService<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
    settings: DeliverySettings,
    sink: Arc<dyn LogSink>,
    reporter: Option<Arc<dyn CriticalEventReporter>>,
}

impl<M> DeliveryService<M>
where
    M: Mailer,
{
    /// Creates a new delivery service without a critical event reporter.
    pub fn new(mailer: Arc<M>, settings: DeliverySettings, sink: Arc<dyn LogSink>) -> Self {
        Self {
            mailer,
            settings,
            sink,
            reporter: None,
        }
    }

    /// Forwards transport errors to `reporter` as well.
    pub fn with_reporter(mut self, reporter: Arc<dyn CriticalEventReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// The delivery configuration
    pub fn settings(&self) -> &DeliverySettings {
        &self.settings
    }

    /// Builds the transport configuration for `message`.
    ///
    /// Address references are resolved against the administrator address: a
    /// sender replacement is written to `message.from` and the extra Bcc
    /// recipient is appended to `message.bcc`.
    pub fn configure(&self, message: &mut OutgoingMessage) -> MailerConfig {
        let mut config = MailerConfig::default();

        if let Err(err) = smtp_uri::apply(
            self.settings.smtp_uri.uri(),
            message.from.as_deref(),
            &mut config,
        ) {
            debug!("SMTP URI not applied: {}", err);
        }

        let admin = self.settings.admin_email.as_ref();

        if let Some(from) = config.from.take() {
            match from.resolve(admin) {
                Some(address) => {
                    message.from = Some(address.to_string());
                    config.from = Some(AddressRef::Address(address));
                }
                None => warn!("no administrator address to replace the invalid sender with"),
            }
        }

        if let Some(bcc) = config.extra_bcc.take() {
            match bcc.resolve(admin) {
                Some(address) => {
                    message.bcc.push(address.to_string());
                    config.extra_bcc = Some(AddressRef::Address(address));
                }
                None => warn!("no administrator address to Bcc"),
            }
        }

        config
    }

    /// Sends `message`.
    ///
    /// The error left in `last` by the previous attempt is reported first. A
    /// failure is logged right away and its transport error is left in `last`
    /// for the next [`send`](Self::send) or [`flush`](Self::flush).
    pub async fn send(&self, last: &mut LastAttempt, mut message: OutgoingMessage) -> DeliveryOutcome {
        self.flush(last);

        let config = self.configure(&mut message);
        debug!(transport = %config, "sending mail");

        match self.mailer.send_email(&config, &message).await {
            Ok(()) => {
                info!(recipients = message.recipients().len(), "mail sent");
                DeliveryOutcome::Sent
            }
            Err(err) => {
                let record = FailureRecord {
                    recipients: message.recipients(),
                    subject: message.subject,
                    body: message.body,
                    raw_error_text: err.to_string(),
                };

                self.sink.write_line(&record.send_failure_line());
                last.record_error(&record.raw_error_text);

                DeliveryOutcome::Failed
            }
        }
    }

    /// Reports the error pending in `last`, if any.
    pub fn flush(&self, last: &mut LastAttempt) {
        let Some(error) = last.take_error() else {
            return;
        };

        let line = transport_error_line(&error);
        self.sink.write_line(&line);

        if let Some(reporter) = &self.reporter {
            if let Err(err) = reporter.report_critical_event(&line) {
                debug!("critical event report failed: {}", err);
                self.sink.write_line(REPORT_FAILURE_LINE);
            }
        }
    }

    /// Reports the error of the final attempt before the sender goes away.
    pub fn shutdown(&self, mut last: LastAttempt) {
        self.flush(&mut last);
    }
}

impl<M> fmt::Debug for DeliveryService<M>
where
    M: Mailer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryService")
            .field("settings", &self.settings)
            .field("mailer", &"Mailer")
            .field("sink", &"LogSink")
            .field("reporter", &self.reporter.as_ref().map(|_| "CriticalEventReporter"))
            .finish()
    }
}
