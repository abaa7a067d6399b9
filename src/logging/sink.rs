//! The sink abstraction records are delivered to

use std::sync::Arc;

use super::record::LogRecord;

/// A consumer of log records
///
/// `receive` has no return value: a sink deals with its own failures and a
/// logger keeps delivering to the remaining sinks no matter what one of them
/// does internally.
pub trait LogSink: Send + Sync {
    fn receive(&self, record: &LogRecord);
}

/// Shared handle to a sink; one sink may be attached to many loggers
pub type SinkHandle = Arc<dyn LogSink>;

/// Sink that drops every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    #[inline]
    fn receive(&self, _record: &LogRecord) {}
}

impl<F> LogSink for F
where
    F: Fn(&LogRecord) + Send + Sync,
{
    fn receive(&self, record: &LogRecord) {
        self(record)
    }
}
