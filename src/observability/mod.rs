//! Observability
//!
//! Structured logging for service events. Logs are synchronous JSON
//! lines; one line is one event.

mod logger;

pub use logger::{Logger, Severity};
