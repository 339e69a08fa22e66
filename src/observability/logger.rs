//! Structured JSON logger
//!
//! One log line = one event. Fields serialize in deterministic order so
//! identical runs produce identical logs. Logging is synchronous and
//! unbuffered.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    /// String form used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger.
pub struct Logger;

impl Logger {
    /// Log an event to stdout.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stdout());
    }

    /// Log at INFO level.
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log at WARN level.
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level, to stderr.
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(Severity::Error, event, fields, &mut io::stderr());
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        // BTreeMap gives deterministic (sorted) key order; event and
        // severity are prefixed so they always lead the line.
        let sorted: BTreeMap<&str, &str> = fields.iter().copied().collect();
        let mut line = format!(
            "{{\"event\":{},\"severity\":\"{}\"",
            serde_json::to_string(event).unwrap_or_else(|_| "\"?\"".into()),
            severity.as_str()
        );
        for (key, value) in sorted {
            line.push(',');
            line.push_str(&serde_json::to_string(key).unwrap_or_else(|_| "\"?\"".into()));
            line.push(':');
            line.push_str(&serde_json::to_string(value).unwrap_or_else(|_| "\"?\"".into()));
        }
        line.push_str("}\n");

        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

#[cfg(test)]
pub fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::log_to_writer(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}
