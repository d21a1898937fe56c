//! Critical event reporting

use thiserror::Error;

#[cfg(test)]
use mockall::mock;

/// Errors that can occur when reporting a critical event
#[derive(Debug, Error)]
pub enum ReportError {
    /// The reporter did not accept the event
    #[error("critical event was not accepted")]
    Rejected,

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

/// An optional integration that wants to hear about mail failures
pub trait CriticalEventReporter: Send + Sync {
    /// Report a critical event
    fn report_critical_event(&self, message: &str) -> Result<(), ReportError>;
}

#[cfg(test)]
mock! {
    pub CriticalEventReporter {}

    impl CriticalEventReporter for CriticalEventReporter {
        fn report_critical_event(&self, message: &str) -> Result<(), ReportError>;
    }
}
