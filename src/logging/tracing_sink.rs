//! Sink that re-emits records as `tracing` events
//!
//! Lets records flow into whatever subscriber the host application installs.

use super::level::LogLevel;
use super::record::LogRecord;
use super::sink::LogSink;

/// Forwards every record to the active `tracing` subscriber
///
/// The event carries the raw message; the record's own prefix is left out
/// since subscribers add their own timestamp and level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn receive(&self, record: &LogRecord) {
        let logger = record.logger_name();
        let msg = record.raw_msg();
        let payload = record.payload().map(|p| p.to_string());
        let payload = payload.as_deref();

        // tracing needs the level as a constant at each callsite
        match record.level() {
            LogLevel::Debug => tracing::debug!(logger, payload, "{msg}"),
            LogLevel::Info => tracing::info!(logger, payload, "{msg}"),
            LogLevel::Warning => tracing::warn!(logger, payload, "{msg}"),
            LogLevel::Error => tracing::error!(logger, payload, "{msg}"),
            LogLevel::Fatal => tracing::error!(logger, payload, fatal = true, "{msg}"),
        }
    }
}
