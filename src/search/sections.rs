//! Section-level reordering
//!
//! Sections are the page's reordering granularity: on an active
//! query, sections containing at least one matched entry surface
//! above the rest. The controls section is pinned first always.

use crate::surface::SectionId;
use std::collections::HashSet;

/// Compute the desired top-level section order
///
/// * Empty query (`query_active == false`): the originally captured
///   order, with the controls section forced to the front.
/// * Active query: controls first, then matched sections, then
///   unmatched sections, each group in its original relative order.
///
/// The controls section never counts as matched or unmatched.
#[must_use]
pub fn section_order(
    original: &[SectionId],
    controls: Option<SectionId>,
    matched: &HashSet<SectionId>,
    query_active: bool,
) -> Vec<SectionId> {
    let mut order = Vec::with_capacity(original.len());
    if let Some(controls) = controls
        && original.contains(&controls)
    {
        order.push(controls);
    }

    if query_active {
        order.extend(
            original
                .iter()
                .filter(|s| Some(**s) != controls && matched.contains(s)),
        );
        order.extend(
            original
                .iter()
                .filter(|s| Some(**s) != controls && !matched.contains(s)),
        );
    } else {
        order.extend(original.iter().filter(|s| Some(**s) != controls));
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<SectionId> {
        raw.iter().map(|i| SectionId(*i)).collect()
    }

    #[test]
    fn test_empty_query_restores_original_order() {
        let original = ids(&[0, 1, 2, 3]);
        let order = section_order(&original, Some(SectionId(0)), &HashSet::new(), false);
        assert_eq!(order, ids(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_controls_forced_first_even_when_not_first_originally() {
        let original = ids(&[1, 2, 0, 3]);
        let order = section_order(&original, Some(SectionId(0)), &HashSet::new(), false);
        assert_eq!(order, ids(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_matched_sections_surface_in_relative_order() {
        let original = ids(&[0, 1, 2, 3, 4]);
        let matched: HashSet<SectionId> = [SectionId(2), SectionId(4)].into_iter().collect();
        let order = section_order(&original, Some(SectionId(0)), &matched, true);
        assert_eq!(order, ids(&[0, 2, 4, 1, 3]));
    }

    #[test]
    fn test_no_controls_section() {
        let original = ids(&[5, 6, 7]);
        let matched: HashSet<SectionId> = [SectionId(7)].into_iter().collect();
        let order = section_order(&original, None, &matched, true);
        assert_eq!(order, ids(&[7, 5, 6]));
    }

    #[test]
    fn test_active_query_with_no_matches_keeps_relative_order() {
        let original = ids(&[0, 1, 2]);
        let order = section_order(&original, Some(SectionId(0)), &HashSet::new(), true);
        assert_eq!(order, ids(&[0, 1, 2]));
    }

    #[test]
    fn test_unknown_controls_id_is_skipped() {
        let original = ids(&[1, 2]);
        let order = section_order(&original, Some(SectionId(9)), &HashSet::new(), false);
        assert_eq!(order, ids(&[1, 2]));
    }
}
