//! Query normalization and lifecycle

/// Default minimum query length before filtering kicks in
pub const MIN_QUERY_CHARS: usize = 3;

/// Normalize a raw query: lower-case and trim
///
/// Total over all inputs; whitespace-only input normalizes to the
/// empty string.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Current normalized search query
///
/// Created empty, mutated from user input, and consulted by every
/// derived view. The minimum-length gate lives here: a non-empty
/// query below the threshold filters like the empty query, but the
/// input field itself keeps its text (intentional, avoids flicker
/// while the user is still typing).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    normalized: String,
}

impl QueryState {
    /// Replace the query from raw input
    pub fn set_raw(&mut self, raw: &str) {
        self.normalized = normalize(raw);
    }

    /// The normalized query text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Whether the normalized query is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// The query to filter with, after the minimum-length gate
    ///
    /// Returns `None` when the query is empty or shorter than
    /// `min_chars` characters; callers treat `None` as "restore
    /// everything".
    #[must_use]
    pub fn effective(&self, min_chars: usize) -> Option<&str> {
        if self.normalized.is_empty() || self.normalized.chars().count() < min_chars {
            None
        } else {
            Some(&self.normalized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize("  Grace HOPPER  "), "grace hopper");
        assert_eq!(normalize("ada"), "ada");
    }

    #[test]
    fn test_normalize_is_total() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\t\n"), "");
    }

    #[test]
    fn test_effective_empty_query() {
        let state = QueryState::default();
        assert!(state.is_empty());
        assert_eq!(state.effective(MIN_QUERY_CHARS), None);
    }

    #[test]
    fn test_effective_short_query_gated() {
        let mut state = QueryState::default();
        state.set_raw("ab");
        assert!(!state.is_empty());
        assert_eq!(state.as_str(), "ab");
        assert_eq!(state.effective(MIN_QUERY_CHARS), None);
    }

    #[test]
    fn test_effective_at_threshold() {
        let mut state = QueryState::default();
        state.set_raw("abc");
        assert_eq!(state.effective(MIN_QUERY_CHARS), Some("abc"));
    }

    #[test]
    fn test_effective_counts_chars_not_bytes() {
        let mut state = QueryState::default();
        state.set_raw("åä");
        // Two characters, four bytes: still below a three-char gate
        assert_eq!(state.effective(3), None);
        state.set_raw("åäö");
        assert_eq!(state.effective(3), Some("åäö"));
    }

    #[test]
    fn test_set_raw_normalizes() {
        let mut state = QueryState::default();
        state.set_raw("  ENGineer ");
        assert_eq!(state.as_str(), "engineer");
    }
}
