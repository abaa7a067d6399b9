//! Fan-out logger
//!
//! A `Logger` formats each call into one `LogRecord` and hands that same
//! record to every attached sink, in the order the sinks were added.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::clock::{Clock, SystemClock};
use super::level::LogLevel;
use super::record::LogRecord;
use super::sink::SinkHandle;

/// Name used when neither a name nor an owner tag is given
pub const ROOT_LOGGER_NAME: &str = "root";

/// Name substituted when a logger is given an empty name
pub const UNNAMED_LOGGER_NAME: &str = "Unnamed";

/// chrono format of the timestamp in every prefix
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Reduce an owner tag such as `app::net::Connection<Tcp>` to `Connection`
fn owner_short_name(tag: &str) -> &str {
    let without_generics = tag.split('<').next().unwrap_or(tag);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
        .trim()
}

fn non_empty_name(name: String) -> String {
    if name.is_empty() {
        UNNAMED_LOGGER_NAME.to_string()
    } else {
        name
    }
}

/// A named logger that broadcasts records to its sinks
///
/// Delivery is synchronous: `log` returns once every sink has received the
/// record. There is no level filtering; every call reaches every sink.
pub struct Logger {
    name: String,
    sinks: Vec<SinkHandle>,
    clock: Arc<dyn Clock>,
}

impl Logger {
    /// Logger named `root` with no sinks
    pub fn new() -> Self {
        Self::named(ROOT_LOGGER_NAME)
    }

    /// Logger with an explicit name and no sinks
    pub fn named(name: impl Into<String>) -> Self {
        Self::with_sinks(name, Vec::new())
    }

    /// Logger named after the component that owns it
    ///
    /// The tag's short name is used, e.g. `store::Cache` becomes `Cache`. With
    /// no tag (or an empty one) the logger is named `root`.
    pub fn for_owner(owner: Option<&str>) -> Self {
        let name = owner
            .map(owner_short_name)
            .filter(|short| !short.is_empty())
            .unwrap_or(ROOT_LOGGER_NAME);
        Self::named(name)
    }

    /// Logger with an explicit name and an initial set of sinks
    ///
    /// An empty name becomes `Unnamed`, the same as with [`Logger::set_name`].
    pub fn with_sinks(name: impl Into<String>, sinks: Vec<SinkHandle>) -> Self {
        Self {
            name: non_empty_name(name.into()),
            sinks,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the time source used for prefixes
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the logger; records emitted afterwards carry the new name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = non_empty_name(name.into());
    }

    /// Current time according to this logger's clock
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Current time rendered as `YYYYMMDD_HHMMSS`
    pub fn timestamp_str(&self) -> String {
        self.timestamp().format(TIMESTAMP_FORMAT).to_string()
    }

    /// Build the `[timestamp]:[LEVEL]:[name]` prefix for a record
    pub fn prefix(&self, level: LogLevel) -> String {
        format!("[{}]:[{}]:[{}]", self.timestamp_str(), level, self.name)
    }

    /// Format a message and deliver it to every sink
    pub fn log(&self, level: LogLevel, message: &str, payload: Option<&Value>) {
        let line = format!("{} {}", self.prefix(level), message);
        let record = LogRecord::with_payload(line, self.name.as_str(), level, message, payload);
        for sink in &self.sinks {
            sink.receive(&record);
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, None);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, None);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warning, message, None);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, None);
    }

    pub fn fatal(&self, message: &str) {
        self.log(LogLevel::Fatal, message, None);
    }

    pub fn debug_with(&self, message: &str, payload: &Value) {
        self.log(LogLevel::Debug, message, Some(payload));
    }

    pub fn info_with(&self, message: &str, payload: &Value) {
        self.log(LogLevel::Info, message, Some(payload));
    }

    pub fn warn_with(&self, message: &str, payload: &Value) {
        self.log(LogLevel::Warning, message, Some(payload));
    }

    pub fn error_with(&self, message: &str, payload: &Value) {
        self.log(LogLevel::Error, message, Some(payload));
    }

    pub fn fatal_with(&self, message: &str, payload: &Value) {
        self.log(LogLevel::Fatal, message, Some(payload));
    }

    /// Log `message` at `Fatal` if `condition` is false
    ///
    /// This is a soft assertion: it only records the failure. It never panics
    /// and never stops the process.
    pub fn assertion(&self, condition: bool, message: &str) {
        if !condition {
            self.fatal(message);
        }
    }

    /// Like [`Logger::assertion`], attaching `payload` when it fails
    pub fn assertion_with(&self, condition: bool, message: &str, payload: &Value) {
        if !condition {
            self.fatal_with(message, payload);
        }
    }

    /// Attach a sink; sinks receive records in the order they were added
    pub fn add_sink(&mut self, sink: SinkHandle) {
        self.sinks.push(sink);
    }

    /// Detach every sink, returning how many were removed
    pub fn clear_sinks(&mut self) -> usize {
        let removed = self.sinks.len();
        self.sinks.clear();
        removed
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("sinks", &self.sinks.len())
            .finish_non_exhaustive()
    }
}
