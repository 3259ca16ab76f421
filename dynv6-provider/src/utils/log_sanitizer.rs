//! Log sanitization utilities
//!
//! Keeps API tokens and large TXT payloads out of debug/error logs.

/// Maximum number of bytes of a response body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible by [`mask_secret`].
const MASK_VISIBLE: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Bodies over the limit keep their first `TRUNCATE_LIMIT` bytes (cut on a
/// char boundary) followed by a note with the full length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret, leaving only its first few characters visible.
///
/// Short secrets are masked completely.
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(MASK_VISIBLE).collect();
    if secret.chars().count() <= MASK_VISIBLE * 2 {
        "****".to_string()
    } else {
        format!("{visible}****")
    }
}
