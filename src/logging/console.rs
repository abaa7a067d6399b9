//! Console sink
//!
//! Writes each record's formatted line to a stream, stdout unless another
//! writer is injected.

use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::record::LogRecord;
use super::sink::LogSink;

/// How a console sink renders lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleStyle {
    #[default]
    Plain,
    /// ANSI-colored by level
    Colored,
}

/// Sink that writes `record.log()` plus a newline, once per record
pub struct ConsoleSink<W = Stdout> {
    writer: Mutex<W>,
    style: ConsoleStyle,
    failed_writes: AtomicUsize,
}

impl ConsoleSink<Stdout> {
    /// Console sink on the process's standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConsoleSink<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    /// Console sink writing to `writer`
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            style: ConsoleStyle::Plain,
            failed_writes: AtomicUsize::new(0),
        }
    }

    /// Color every line according to its level
    pub fn colored(mut self) -> Self {
        self.style = ConsoleStyle::Colored;
        self
    }

    pub fn style(&self) -> ConsoleStyle {
        self.style
    }

    /// Number of records that could not be written
    pub fn failed_writes(&self) -> usize {
        self.failed_writes.load(Ordering::Relaxed)
    }

    /// Run `f` against the underlying writer
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut writer)
    }

    fn write_record(&self, record: &LogRecord) -> io::Result<()> {
        self.with_writer(|out| -> io::Result<()> {
            match self.style {
                ConsoleStyle::Plain => writeln!(out, "{}", record.log())?,
                ConsoleStyle::Colored => {
                    writeln!(out, "{}", record.level().style().apply(record.log()))?
                }
            }
            out.flush()
        })
    }
}

impl<W: Write + Send> LogSink for ConsoleSink<W> {
    fn receive(&self, record: &LogRecord) {
        if let Err(e) = self.write_record(record) {
            self.failed_writes.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(
                logger = record.logger_name(),
                error = %e,
                "console sink failed to write record"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "stream closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn record(level: LogLevel, msg: &str) -> LogRecord {
        LogRecord::new(format!("[ts]:[{level}]:[root] {msg}"), "root", level, msg)
    }

    fn written(sink: &ConsoleSink<Vec<u8>>) -> String {
        sink.with_writer(|buf| String::from_utf8(buf.clone()).unwrap())
    }

    #[test]
    fn test_writes_one_line_per_record() {
        let sink = ConsoleSink::new(Vec::new());
        sink.receive(&record(LogLevel::Info, "hello"));
        sink.receive(&record(LogLevel::Error, "world"));

        assert_eq!(
            written(&sink),
            "[ts]:[INFO]:[root] hello\n[ts]:[ERROR]:[root] world\n"
        );
        assert_eq!(sink.failed_writes(), 0);
    }

    #[test]
    fn test_colored_output_wraps_line() {
        let sink = ConsoleSink::new(Vec::new()).colored();
        assert_eq!(sink.style(), ConsoleStyle::Colored);

        sink.receive(&record(LogLevel::Fatal, "careful"));

        let out = written(&sink);
        assert!(out.contains("[ts]:[FATAL]:[root] careful"));
        assert!(out.starts_with("\u{1b}["));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_write_failure_is_absorbed() {
        let sink = ConsoleSink::new(FailingWriter);
        sink.receive(&record(LogLevel::Info, "lost"));
        sink.receive(&record(LogLevel::Info, "also lost"));
        assert_eq!(sink.failed_writes(), 2);
    }
}
