//! The overlap validator: decides whether a candidate placement is
//! compatible with the letters already committed along the active path.

use crate::placement::{LetterMap, Placement};

/// True if every cell `candidate` shares with `committed` carries the same
/// letter. Non-overlapping candidates are always compatible.
///
/// `O(|word|)`: each of the candidate's cells is checked against
/// `committed` by hashmap lookup, never by intersecting the full maps.
pub fn compatible(candidate_letters: &LetterMap, committed: &LetterMap) -> bool {
    for (cell, letter) in candidate_letters.iter() {
        if let Some(existing) = committed.get(cell) {
            if existing != letter {
                return false;
            }
        }
    }
    true
}

/// Convenience wrapper that expands `candidate` (uncached) before checking.
pub fn placement_compatible(candidate: &Placement, committed: &LetterMap) -> bool {
    compatible(&crate::placement::expand_uncached(candidate), committed)
}
