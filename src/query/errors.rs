//! Query construction errors

use thiserror::Error;

/// Result type for predicate construction
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors from turning client input into a predicate set
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A structured filter value failed to parse; names the parameter
    #[error("invalid {0} value")]
    InvalidParameter(String),

    /// A natural-language query matched no trigger
    #[error("unable to parse natural language query")]
    Unparseable,
}

impl QueryError {
    pub fn invalid_parameter(name: impl Into<String>) -> Self {
        QueryError::InvalidParameter(name.into())
    }
}
