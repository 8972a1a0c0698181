//! Content fingerprints
//!
//! A record's primary key is the SHA-256 digest of its value's UTF-8
//! bytes, rendered as lowercase hex. Two equal values always collide to
//! the same fingerprint, so fingerprint uniqueness is value uniqueness.

use sha2::{Digest, Sha256};

/// Computes the deterministic fingerprint of `value`.
///
/// Exposed to clients as `sha256_hash`; not reversible, not secret.
pub fn fingerprint(value: &str) -> String {
    format!("{:x}", Sha256::digest(value.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_deterministic() {
        assert_eq!(fingerprint("racecar"), fingerprint("racecar"));
    }

    #[test]
    fn test_fingerprint_known_vector() {
        // SHA-256("abc"), FIPS 180-2 test vector
        assert_eq!(
            fingerprint("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_fingerprint_is_lowercase_hex() {
        let fp = fingerprint("Hello");
        assert_eq!(fp.len(), 64);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_distinct_values_distinct_fingerprints() {
        assert_ne!(fingerprint("racecar"), fingerprint("racecars"));
        assert_ne!(fingerprint("a"), fingerprint("A"));
    }
}
