//! The previous send attempt

/// The caller-owned slot holding the unreported error of the previous send
/// attempt.
///
/// Keep one per sender and hand it to every
/// [`DeliveryService`](super::DeliveryService) call; the service drains it
/// before the next attempt and at shutdown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LastAttempt {
    pending_error: Option<String>,
}

impl LastAttempt {
    /// An empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the error of the attempt that just failed
    pub fn record_error(&mut self, error: &str) {
        self.pending_error = Some(error.to_string());
    }

    /// Whether an error is waiting to be reported
    pub fn has_pending_error(&self) -> bool {
        self.pending_error
            .as_deref()
            .is_some_and(|error| !error.is_empty())
    }

    /// Take the pending error, leaving the slot empty.
    ///
    /// An empty error text counts as no error.
    pub fn take_error(&mut self) -> Option<String> {
        self.pending_error.take().filter(|error| !error.is_empty())
    }
}
