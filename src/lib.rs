//! fanlog - structured logging with fan-out to pluggable sinks
//!
//! A `Logger` turns each call into an immutable `LogRecord` and delivers it,
//! synchronously and in order, to every attached `LogSink`.

pub mod config;
pub mod logging;

pub use logging::{
    Clock, ConsoleSink, LogError, LogLevel, LogRecord, LogSink, Logger, MemorySink, NoopSink,
    SinkHandle, TracingSink,
};
