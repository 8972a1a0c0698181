//! stringvault - a content-addressed string analysis and retrieval service
//!
//! Clients submit strings; the service derives properties (length,
//! palindrome status, uniqueness, word count, character frequency),
//! persists them keyed by SHA-256 fingerprint, and answers structured or
//! natural-language filter queries.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod store;
