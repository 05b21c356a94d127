//! Entry filtering: stable partition of a container's entries
//!
//! The filter never touches the render tree itself. It computes a
//! desired order from entry ids and their normalized searchable text,
//! and the controller applies that order through the render surface
//! in a single batched update.

use crate::surface::EntryId;

/// Result of partitioning one container's entries against a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Desired child order: matched entries first, then unmatched,
    /// each partition in its original relative order
    pub order: Vec<EntryId>,
    /// Matched entries in their original relative order
    pub matched: Vec<EntryId>,
}

impl FilterOutcome {
    /// Whether anything matched
    #[must_use]
    pub fn has_matches(&self) -> bool {
        !self.matched.is_empty()
    }
}

/// Stable-partition entries by substring containment
///
/// `entries` pairs each id with its already-normalized searchable
/// text, in the container's originally captured order; `query` must
/// be normalized and non-empty. Matching is plain substring
/// containment, nothing fuzzy.
#[must_use]
pub fn partition_entries(entries: &[(EntryId, String)], query: &str) -> FilterOutcome {
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();

    for (id, text) in entries {
        if text.contains(query) {
            matched.push(*id);
        } else {
            unmatched.push(*id);
        }
    }

    let mut order = matched.clone();
    order.extend(unmatched);

    FilterOutcome { order, matched }
}
