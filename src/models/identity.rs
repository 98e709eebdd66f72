// src/models/identity.rs

//! Post identity computation.

use sha2::{Digest, Sha256};

/// Compute the deduplication identity for a post.
///
/// The identity is the hex SHA-256 digest of the normalized text and of
/// nothing else: two fetches of an unchanged post yield the same identity
/// even if media URLs differ in formatting, and two posts with identical
/// text always collide. Collision-by-text is the intended dedup behavior,
/// not security-sensitive hashing.
pub fn compute_identity(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_deterministic() {
        let a = compute_identity("Big announcement coming soon");
        let b = compute_identity("Big announcement coming soon");
        assert_eq!(a, b);
    }

    #[test]
    fn test_identity_is_hex_sha256() {
        let id = compute_identity("x");
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_identity_differs_on_text() {
        assert_ne!(compute_identity("a"), compute_identity("b"));
    }
}
