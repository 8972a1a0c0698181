//! Structured JSON logger
//!
//! One log line per event, synchronous, deterministic key order. Events
//! carry a name, a severity, and flat string fields.

use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value};

/// Log severity levels
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
    /// Logs an event to stdout.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stdout());
    }

    /// Logs an event to stderr.
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stderr());
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        // serde_json::Map is sorted by key, which keeps output deterministic
        let mut map = Map::new();
        map.insert("event".to_string(), Value::String(event.to_string()));
        map.insert(
            "severity".to_string(),
            Value::String(severity.as_str().to_string()),
        );
        for (key, value) in fields {
            map.insert(key.to_string(), Value::String(value.to_string()));
        }

        let mut line = Value::Object(map).to_string();
        line.push('\n');

        // One write, one flush; a failed log line is not an error path
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut buf = Vec::new();
        Logger::log_to_writer(severity, event, fields, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_one_line_per_event() {
        let line = render(Severity::Info, "record_inserted", &[("fingerprint", "abc")]);
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_output_is_valid_json_with_fields() {
        let line = render(
            Severity::Warn,
            "fact_fetch_failed",
            &[("reason", "timeout"), ("url", "https://example.test")],
        );
        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(value["event"], "fact_fetch_failed");
        assert_eq!(value["severity"], "WARN");
        assert_eq!(value["reason"], "timeout");
    }

    #[test]
    fn test_deterministic_field_order() {
        let fields = [("zebra", "1"), ("alpha", "2")];
        let a = render(Severity::Info, "evt", &fields);
        let b = render(Severity::Info, "evt", &[("alpha", "2"), ("zebra", "1")]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_escapes_embedded_quotes() {
        let line = render(Severity::Error, "evt", &[("value", "say \"hi\"")]);
        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(value["value"], "say \"hi\"");
    }
}
