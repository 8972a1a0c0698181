//! Natural-language filter translation
//!
//! Best-effort translation of free-text queries into the same predicate
//! set the structured parameter parser produces. Matching is fixed,
//! case-insensitive keyword triggers evaluated in a set order; every
//! matching trigger contributes, and a later trigger on the same key
//! overwrites an earlier one.
//!
//! Deliberate leniencies, kept from the service this replaces:
//! - negation is not understood ("not a palindrome" still filters for
//!   palindromes)
//! - a malformed number after "than" silently skips that trigger instead
//!   of failing the parse
//!
//! Only a query matching no trigger at all is an error.

use super::errors::{QueryError, QueryResult};
use super::predicate::{Predicate, PredicateSet};

impl PredicateSet {
    /// Translates a free-text query into a predicate set.
    pub fn from_natural_language(query: &str) -> QueryResult<Self> {
        let lower = query.to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();
        let mut set = PredicateSet::new();

        if lower.contains("palindrom") {
            set.apply(Predicate::IsPalindrome(true));
        }

        if lower.contains("single word") {
            set.apply(Predicate::WordCount(1));
        }
        if lower.contains("two word") || lower.contains("2 word") {
            set.apply(Predicate::WordCount(2));
        }
        if lower.contains("three word") || lower.contains("3 word") {
            set.apply(Predicate::WordCount(3));
        }

        if lower.contains("longer than") {
            for bound in numbers_following(&words, "than") {
                set.apply(Predicate::MinLength(bound + 1));
            }
        }
        if lower.contains("shorter than") {
            for bound in numbers_following(&words, "than") {
                set.apply(Predicate::MaxLength(bound - 1));
            }
        }

        if lower.contains("containing the letter") || lower.contains("contain the letter") {
            for token in tokens_following(&words, "letter") {
                if let Some(c) = token.chars().next() {
                    set.apply(Predicate::ContainsCharacter(c));
                }
            }
        }

        if lower.contains("first vowel") {
            set.apply(Predicate::ContainsCharacter('a'));
        }

        if set.is_empty() {
            return Err(QueryError::Unparseable);
        }

        Ok(set)
    }
}

/// Every token immediately following an occurrence of `marker`.
fn tokens_following<'a>(
    words: &'a [&'a str],
    marker: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    words
        .windows(2)
        .filter(move |pair| pair[0] == marker)
        .map(|pair| pair[1])
}

/// Every integer-parseable token immediately following `marker`;
/// unparseable tokens are skipped.
fn numbers_following<'a>(words: &'a [&'a str], marker: &'a str) -> impl Iterator<Item = i64> + 'a {
    tokens_following(words, marker).filter_map(|token| token.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_longer_than_adds_one() {
        let set = PredicateSet::from_natural_language("strings longer than 10 characters").unwrap();
        assert_eq!(set.to_filter_map().get("min_length"), Some(&json!(11)));
    }

    #[test]
    fn test_shorter_than_subtracts_one() {
        let set = PredicateSet::from_natural_language("anything shorter than 8").unwrap();
        assert_eq!(set.to_filter_map().get("max_length"), Some(&json!(7)));
    }

    #[test]
    fn test_gibberish_is_unparseable() {
        let result = PredicateSet::from_natural_language("gibberish xyz");
        assert_eq!(result, Err(QueryError::Unparseable));
    }

    #[test]
    fn test_palindrome_trigger() {
        let set = PredicateSet::from_natural_language("all palindromic strings").unwrap();
        assert_eq!(set.to_filter_map().get("is_palindrome"), Some(&json!(true)));
    }

    #[test]
    fn test_negation_is_not_understood() {
        // Known leniency: the trigger fires on the substring alone.
        let set = PredicateSet::from_natural_language("not a palindrome").unwrap();
        assert_eq!(set.to_filter_map().get("is_palindrome"), Some(&json!(true)));
    }

    #[test]
    fn test_word_count_triggers() {
        let single = PredicateSet::from_natural_language("single word strings").unwrap();
        assert_eq!(single.to_filter_map().get("word_count"), Some(&json!(1)));

        let two = PredicateSet::from_natural_language("2 word phrases").unwrap();
        assert_eq!(two.to_filter_map().get("word_count"), Some(&json!(2)));

        let three = PredicateSet::from_natural_language("three word phrases").unwrap();
        assert_eq!(three.to_filter_map().get("word_count"), Some(&json!(3)));
    }

    #[test]
    fn test_later_trigger_overwrites_same_key() {
        // "single word" then "two word": the later trigger wins.
        let set = PredicateSet::from_natural_language("single word or two word").unwrap();
        assert_eq!(set.to_filter_map().get("word_count"), Some(&json!(2)));
    }

    #[test]
    fn test_containing_the_letter() {
        let set = PredicateSet::from_natural_language("strings containing the letter z").unwrap();
        assert_eq!(
            set.to_filter_map().get("contains_character"),
            Some(&json!("z"))
        );
    }

    #[test]
    fn test_letter_takes_first_character_of_token() {
        let set = PredicateSet::from_natural_language("contain the letter xyz").unwrap();
        assert_eq!(
            set.to_filter_map().get("contains_character"),
            Some(&json!("x"))
        );
    }

    #[test]
    fn test_first_vowel_overwrites_letter() {
        let set =
            PredicateSet::from_natural_language("containing the letter z with the first vowel")
                .unwrap();
        assert_eq!(
            set.to_filter_map().get("contains_character"),
            Some(&json!("a"))
        );
    }

    #[test]
    fn test_malformed_number_skips_trigger() {
        // "ten" does not parse; the trigger contributes nothing, but the
        // palindrome trigger still makes the query parseable.
        let set = PredicateSet::from_natural_language("palindromes longer than ten").unwrap();
        let map = set.to_filter_map();
        assert!(map.get("min_length").is_none());
        assert_eq!(map.get("is_palindrome"), Some(&json!(true)));
    }

    #[test]
    fn test_malformed_number_alone_is_unparseable() {
        let result = PredicateSet::from_natural_language("longer than ten");
        assert_eq!(result, Err(QueryError::Unparseable));
    }

    #[test]
    fn test_triggers_combine_with_and() {
        let set =
            PredicateSet::from_natural_language("single word palindromes longer than 4").unwrap();
        let map = set.to_filter_map();
        assert_eq!(map.get("is_palindrome"), Some(&json!(true)));
        assert_eq!(map.get("word_count"), Some(&json!(1)));
        assert_eq!(map.get("min_length"), Some(&json!(5)));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let set = PredicateSet::from_natural_language("PALINDROMIC Strings LONGER THAN 3").unwrap();
        let map = set.to_filter_map();
        assert_eq!(map.get("is_palindrome"), Some(&json!(true)));
        assert_eq!(map.get("min_length"), Some(&json!(4)));
    }
}
