//! Log sink

#[cfg(test)]
use mockall::mock;

/// A line-oriented log writer
pub trait LogSink: Send + Sync {
    /// Write one line
    fn write_line(&self, line: &str);
}

#[cfg(test)]
mock! {
    pub LogSink {}

    impl LogSink for LogSink {
        fn write_line(&self, line: &str);
    }
}
