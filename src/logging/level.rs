//! Log severity levels

use std::fmt;
use std::str::FromStr;

use crossterm::style::{Color, ContentStyle, Stylize};

use super::error::LogError;

/// Severity of a log record, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

impl LogLevel {
    /// Every level, in ascending severity
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Get the display name for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Terminal style used when a console sink colors its output
    pub fn style(&self) -> ContentStyle {
        let base = ContentStyle::new();
        match self {
            LogLevel::Debug => base.with(Color::DarkGrey),
            LogLevel::Info => base.with(Color::Green),
            LogLevel::Warning => base.with(Color::Yellow),
            LogLevel::Error => base.with(Color::Red),
            LogLevel::Fatal => base
                .with(Color::Rgb {
                    r: 0xFF,
                    g: 0xA5,
                    b: 0x00,
                })
                .bold()
                .underlined(),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(LogError::UnknownLevel(s.to_string())),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warning => tracing::Level::WARN,
            // tracing has nothing above ERROR
            LogLevel::Error | LogLevel::Fatal => tracing::Level::ERROR,
        }
    }
}
