//! String analysis
//!
//! Pure derivation of record properties. Nothing in this module performs
//! I/O; every output is a function of the input string alone.

pub mod fingerprint;
pub mod properties;

pub use fingerprint::fingerprint;
pub use properties::{analyze, StringProperties};
