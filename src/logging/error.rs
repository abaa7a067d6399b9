//! Error types for the logging core

use thiserror::Error;

/// Errors surfaced by the logging API
///
/// Sinks never report failures through this type; only accessors that can be
/// called with bad input do.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogError {
    /// Index past the end of a memory sink
    #[error("index {index} is out of range for a sink holding {size} records")]
    OutOfRange { index: usize, size: usize },

    /// Level name that does not match any `LogLevel`
    #[error("unknown log level '{0}'")]
    UnknownLevel(String),
}
