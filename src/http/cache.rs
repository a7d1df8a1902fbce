//! Conditional-request helpers
//!
//! `ETag` generation and `If-None-Match` evaluation for the static
//! assets. Assets are re-read per request, so the tag is computed from
//! the bytes actually served.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate a quoted `ETag` from response bytes.
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}-{:x}\"", content.len(), hasher.finish())
}

/// Check a client `If-None-Match` header against the computed `ETag`.
///
/// Handles comma-separated candidate lists and the `*` wildcard.
pub fn etag_matches(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|candidates| {
        candidates
            .split(',')
            .any(|e| e.trim() == etag || e.trim() == "*")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etag_is_quoted_and_stable() {
        let a = generate_etag(b"logo bytes");
        let b = generate_etag(b"logo bytes");
        assert_eq!(a, b);
        assert!(a.starts_with('"') && a.ends_with('"'));
    }

    #[test]
    fn test_etag_differs_per_content() {
        assert_ne!(generate_etag(b"favicon"), generate_etag(b"logo"));
    }

    #[test]
    fn test_if_none_match_evaluation() {
        let etag = generate_etag(b"page");
        assert!(etag_matches(Some(&etag), &etag));
        assert!(etag_matches(Some(&format!("\"stale\", {etag}")), &etag));
        assert!(etag_matches(Some("*"), &etag));
        assert!(!etag_matches(Some("\"stale\""), &etag));
        assert!(!etag_matches(None, &etag));
    }
}
