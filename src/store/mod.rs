//! Record persistence
//!
//! The store keeps an in-memory fingerprint index rebuilt at open from an
//! append-only, checksummed record log. Mutations are durable before they
//! are visible.

pub mod errors;
pub mod log;
pub mod record;
mod store;

pub use errors::{StoreError, StoreResult};
pub use log::{LogEntry, LogWriter};
pub use record::StringRecord;
pub use store::RecordStore;
