//! Log sink backed by `tracing`

use tracing::error;

use crate::domain::logging::LogSink;

/// Writes every line as an error event on the `smtp_uri` target
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn write_line(&self, line: &str) {
        error!(target: "smtp_uri", "{}", line);
    }
}
