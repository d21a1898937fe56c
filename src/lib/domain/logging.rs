//! Sanitized logging of mail failures

pub mod encoding;

mod failure;
mod reporter;
mod sanitize;
mod sink;

pub use failure::{transport_error_line, FailureRecord, LOG_PREFIX};
pub use reporter::{CriticalEventReporter, ReportError};
pub use sanitize::{sanitize, scrub, MAX_LOG_LENGTH, REPLACEMENT};
pub use sink::LogSink;

#[cfg(test)]
pub mod tests {
    pub use super::reporter::MockCriticalEventReporter;
    pub use super::sink::MockLogSink;
}
