//! Query parameter parsing
//!
//! Turns raw query-string parameters into a predicate set. Recognized
//! keys must parse; unrecognized keys are ignored.

use std::collections::HashMap;

use super::errors::{QueryError, QueryResult};
use super::predicate::{Predicate, PredicateSet};

impl PredicateSet {
    /// Builds a predicate set from raw query parameters.
    ///
    /// A malformed value for a recognized key fails the whole parse,
    /// naming the offending parameter.
    pub fn from_params(params: &HashMap<String, String>) -> QueryResult<Self> {
        let mut set = PredicateSet::new();

        for (key, value) in params {
            match key.as_str() {
                "is_palindrome" => {
                    let flag: bool = value
                        .parse()
                        .map_err(|_| QueryError::invalid_parameter("is_palindrome"))?;
                    set.apply(Predicate::IsPalindrome(flag));
                }
                "min_length" => {
                    set.apply(Predicate::MinLength(parse_integer(value, "min_length")?));
                }
                "max_length" => {
                    set.apply(Predicate::MaxLength(parse_integer(value, "max_length")?));
                }
                "word_count" => {
                    set.apply(Predicate::WordCount(parse_integer(value, "word_count")?));
                }
                "contains_character" => {
                    let mut chars = value.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => set.apply(Predicate::ContainsCharacter(c)),
                        _ => return Err(QueryError::invalid_parameter("contains_character")),
                    }
                }
                _ => {} // unrecognized parameters are not an error
            }
        }

        Ok(set)
    }
}

fn parse_integer(value: &str, name: &str) -> QueryResult<i64> {
    value
        .parse()
        .map_err(|_| QueryError::invalid_parameter(name))
}
