//! The persisted string record
//!
//! Exactly one record exists per distinct value: the fingerprint is a pure
//! function of the value and serves as the primary key. A record is
//! immutable once created; every derived field is computed at write time.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze, fingerprint};

/// One analyzed string and its derived properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringRecord {
    /// SHA-256 of the value, lowercase hex. Primary key.
    pub fingerprint: String,
    /// Original input, unchanged
    pub value: String,
    /// Code point count
    pub length: u64,
    /// Case- and whitespace-insensitive palindrome flag
    pub is_palindrome: bool,
    /// Distinct code point count
    pub unique_characters: u64,
    /// Whitespace-delimited token count
    pub word_count: u64,
    /// Occurrences per code point
    pub character_frequency: HashMap<String, u64>,
    /// Set at first successful insertion, never updated
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Builds a record for `value`, deriving all properties now.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let properties = analyze(&value);
        Self {
            fingerprint: fingerprint(&value),
            value,
            length: properties.length,
            is_palindrome: properties.is_palindrome,
            unique_characters: properties.unique_characters,
            word_count: properties.word_count,
            character_frequency: properties.character_frequency,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_derives_all_properties() {
        let record = StringRecord::new("racecar");
        assert_eq!(record.value, "racecar");
        assert_eq!(record.length, 7);
        assert!(record.is_palindrome);
        assert_eq!(record.unique_characters, 4);
        assert_eq!(record.word_count, 1);
        assert_eq!(record.fingerprint, fingerprint("racecar"));
    }

    #[test]
    fn test_equal_values_share_fingerprint() {
        let a = StringRecord::new("hello");
        let b = StringRecord::new("hello");
        assert_eq!(a.fingerprint, b.fingerprint);
    }

    #[test]
    fn test_record_json_roundtrip() {
        let record = StringRecord::new("A man a plan a canal Panama");
        let bytes = serde_json::to_vec(&record).unwrap();
        let decoded: StringRecord = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(record, decoded);
    }
}
