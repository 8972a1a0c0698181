//! Derived string properties
//!
//! All properties are computed once at write time and stored with the
//! record; they are never recomputed afterward. Lengths and counts are in
//! Unicode code points, not bytes.

use std::collections::HashMap;

/// Properties derived from a single input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringProperties {
    /// Number of code points in the value
    pub length: u64,
    /// Case- and whitespace-insensitive palindrome check
    pub is_palindrome: bool,
    /// Number of distinct code points (case-sensitive, whitespace included)
    pub unique_characters: u64,
    /// Number of whitespace-delimited tokens
    pub word_count: u64,
    /// Occurrences per code point, keyed by the single-character string
    pub character_frequency: HashMap<String, u64>,
}

/// Computes every derived property of `value`.
pub fn analyze(value: &str) -> StringProperties {
    StringProperties {
        length: value.chars().count() as u64,
        is_palindrome: is_palindrome(value),
        unique_characters: count_unique_characters(value),
        word_count: value.split_whitespace().count() as u64,
        character_frequency: character_frequency(value),
    }
}

/// Lowercases the value, strips whitespace, and compares against the
/// reversal. Empty or single-character results are palindromic.
fn is_palindrome(value: &str) -> bool {
    let normalized: Vec<char> = value
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let reversed = normalized.iter().rev();
    normalized.iter().eq(reversed)
}

fn count_unique_characters(value: &str) -> u64 {
    let mut seen: Vec<char> = value.chars().collect();
    seen.sort_unstable();
    seen.dedup();
    seen.len() as u64
}

fn character_frequency(value: &str) -> HashMap<String, u64> {
    let mut frequency = HashMap::new();
    for c in value.chars() {
        *frequency.entry(c.to_string()).or_insert(0) += 1;
    }
    frequency
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_racecar_properties() {
        let props = analyze("racecar");
        assert_eq!(props.length, 7);
        assert!(props.is_palindrome);
        assert_eq!(props.unique_characters, 4);
        assert_eq!(props.word_count, 1);
    }

    #[test]
    fn test_palindrome_ignores_case_and_spaces() {
        assert!(analyze("A man a man").is_palindrome);
        assert!(analyze("A man a plan a canal Panama").is_palindrome);
        assert!(!analyze("hello world").is_palindrome);
    }

    #[test]
    fn test_panama_word_count() {
        assert_eq!(analyze("A man a plan a canal Panama").word_count, 6);
    }

    #[test]
    fn test_single_character_is_palindrome() {
        assert!(analyze("x").is_palindrome);
        assert!(analyze("   x   ").is_palindrome);
    }

    #[test]
    fn test_length_counts_code_points_not_bytes() {
        let props = analyze("héllo");
        assert_eq!(props.length, 5);
        assert_eq!(props.unique_characters, 5);
    }

    #[test]
    fn test_frequency_sums_to_length() {
        for value in ["racecar", "A man a plan a canal Panama", "héllo", "aaa bbb"] {
            let props = analyze(value);
            let total: u64 = props.character_frequency.values().sum();
            assert_eq!(total, props.length, "frequency total for {:?}", value);
        }
    }

    #[test]
    fn test_frequency_is_case_sensitive() {
        let props = analyze("Aa");
        assert_eq!(props.character_frequency.get("A"), Some(&1));
        assert_eq!(props.character_frequency.get("a"), Some(&1));
        assert_eq!(props.unique_characters, 2);
    }

    #[test]
    fn test_word_count_collapses_whitespace() {
        assert_eq!(analyze("  one   two\tthree  ").word_count, 3);
        assert_eq!(analyze("single").word_count, 1);
    }
}
