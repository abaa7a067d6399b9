//! Logging core for fanlog
//!
//! Leveled records, the sink trait with console, memory, tracing and no-op
//! sinks, and the fan-out `Logger` that ties them together.

mod clock;
mod console;
mod error;
mod level;
mod logger;
mod memory;
mod record;
mod sink;
mod tracing_sink;

pub use clock::{Clock, FixedClock, SystemClock};
pub use console::{ConsoleSink, ConsoleStyle};
pub use error::LogError;
pub use level::LogLevel;
pub use logger::{Logger, ROOT_LOGGER_NAME, TIMESTAMP_FORMAT, UNNAMED_LOGGER_NAME};
pub use memory::{MemorySink, OverflowPolicy, DEFAULT_CAPACITY};
pub use record::LogRecord;
pub use sink::{LogSink, NoopSink, SinkHandle};
pub use tracing_sink::TracingSink;
