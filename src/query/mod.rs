//! Predicate construction
//!
//! Two front doors produce the same `PredicateSet`: structured query
//! parameters (`from_params`) and free-text natural language
//! (`from_natural_language`). The store consumes the set as one AND-ed
//! filter during scans.

pub mod errors;
mod natural;
mod params;
mod predicate;

pub use errors::{QueryError, QueryResult};
pub use predicate::{Predicate, PredicateSet};
