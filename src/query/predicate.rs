//! Filter predicates
//!
//! A predicate constrains one filterable record field; a predicate set is
//! the conjunction of its predicates. A set holds at most one predicate
//! per field: applying a predicate whose field is already constrained
//! replaces the earlier one (last write wins).

use serde_json::{Map, Value};

use crate::store::StringRecord;

/// One field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Equality on the palindrome flag
    IsPalindrome(bool),
    /// `length >= bound`
    MinLength(i64),
    /// `length <= bound`
    MaxLength(i64),
    /// Equality on the word count
    WordCount(i64),
    /// Case-sensitive substring containment of one character
    ContainsCharacter(char),
}

impl Predicate {
    /// The query-parameter key this predicate corresponds to.
    pub fn key(&self) -> &'static str {
        match self {
            Predicate::IsPalindrome(_) => "is_palindrome",
            Predicate::MinLength(_) => "min_length",
            Predicate::MaxLength(_) => "max_length",
            Predicate::WordCount(_) => "word_count",
            Predicate::ContainsCharacter(_) => "contains_character",
        }
    }

    /// The constrained value, for echo-back to the caller.
    pub fn value(&self) -> Value {
        match self {
            Predicate::IsPalindrome(b) => Value::Bool(*b),
            Predicate::MinLength(n) | Predicate::MaxLength(n) | Predicate::WordCount(n) => {
                Value::from(*n)
            }
            Predicate::ContainsCharacter(c) => Value::String(c.to_string()),
        }
    }

    /// Checks whether `record` satisfies this predicate.
    pub fn matches(&self, record: &StringRecord) -> bool {
        match self {
            Predicate::IsPalindrome(expected) => record.is_palindrome == *expected,
            Predicate::MinLength(bound) => record.length as i64 >= *bound,
            Predicate::MaxLength(bound) => record.length as i64 <= *bound,
            Predicate::WordCount(expected) => record.word_count as i64 == *expected,
            Predicate::ContainsCharacter(c) => record.value.contains(*c),
        }
    }
}

/// A conjunction of predicates, one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateSet {
    predicates: Vec<Predicate>,
}

impl PredicateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `predicate`, replacing any existing predicate on the same key.
    pub fn apply(&mut self, predicate: Predicate) {
        self.predicates.retain(|p| p.key() != predicate.key());
        self.predicates.push(predicate);
    }

    /// Checks whether `record` satisfies every predicate. An empty set
    /// matches everything.
    pub fn matches(&self, record: &StringRecord) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// The applied filters as a JSON object, keyed by parameter name.
    pub fn to_filter_map(&self) -> Map<String, Value> {
        self.predicates
            .iter()
            .map(|p| (p.key().to_string(), p.value()))
            .collect()
    }
}
