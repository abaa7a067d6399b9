//! The stored form of a single log event

use serde_json::Value;

use super::level::LogLevel;

/// One logged event, as delivered to every sink
///
/// Records are immutable once built. The optional payload is cloned on
/// construction, so later changes to the caller's value never reach a stored
/// record. `Clone` produces a fully independent copy.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    log: String,
    logger_name: String,
    level: LogLevel,
    raw_msg: String,
    payload: Option<Value>,
}

impl LogRecord {
    /// Create a record without payload
    pub fn new(
        log: impl Into<String>,
        logger_name: impl Into<String>,
        level: LogLevel,
        raw_msg: impl Into<String>,
    ) -> Self {
        Self::with_payload(log, logger_name, level, raw_msg, None)
    }

    /// Create a record, deep-copying `payload` if one is given
    pub fn with_payload(
        log: impl Into<String>,
        logger_name: impl Into<String>,
        level: LogLevel,
        raw_msg: impl Into<String>,
        payload: Option<&Value>,
    ) -> Self {
        Self {
            log: log.into(),
            logger_name: logger_name.into(),
            level,
            raw_msg: raw_msg.into(),
            payload: payload.cloned(),
        }
    }

    /// The fully formatted line (prefix and message)
    pub fn log(&self) -> &str {
        &self.log
    }

    /// Name of the logger that emitted this record
    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// The message exactly as the caller passed it
    pub fn raw_msg(&self) -> &str {
        &self.raw_msg
    }

    /// Structured data attached to the record, if any
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Whether a payload was attached
    pub fn has_data(&self) -> bool {
        self.payload.is_some()
    }
}
