// crates/citygeo-core/src/text.rs

/// Normalize a user query: trim surrounding whitespace and lowercase.
///
/// This is the only folding applied before matching, so a result's
/// lowercased name or country always literally contains the normalized query.
///
/// ```rust
/// use citygeo_core::text::normalize_query;
///
/// assert_eq!(normalize_query("  ToKyO "), "tokyo");
/// assert_eq!(normalize_query("   "), "");
/// ```
pub fn normalize_query(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Number of characters in the trimmed query (not bytes).
#[inline]
pub fn trimmed_len(s: &str) -> usize {
    s.trim().chars().count()
}
