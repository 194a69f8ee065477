//! The placement converter: turns a single (origin, direction, word)
//! decision into the set of cell-to-letter assignments it induces.

use std::collections::HashMap;

use crate::geometry::{offset_cell, Cell, Direction};

/// A decision to write `word` starting at `origin` along `direction`.
///
/// Invariant: `origin + direction * (word.len() - 1)` must lie in-bounds
/// for the grid the placement is destined for. This struct itself does not
/// enforce that; callers obtain placements from the candidate enumerator,
/// which only yields in-bounds candidates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub origin: Cell,
    pub direction: Direction,
    pub word: String,
}

impl Placement {
    pub fn new(origin: Cell, direction: Direction, word: impl Into<String>) -> Self {
        Placement {
            origin,
            direction,
            word: word.into(),
        }
    }
}

/// A mapping from cell to the single letter committed there.
///
/// Invariant: never contains two different letters for the same cell.
/// This is upheld by the overlap validator, never by `LetterMap` itself.
pub type LetterMap = HashMap<Cell, char>;

/// Expands a placement into the `LetterMap` it induces, with no caching.
///
/// Used by high-frequency "does this candidate fit?" checks that would
/// otherwise flood the memoising cache with one-shot entries.
pub fn expand_uncached(placement: &Placement) -> LetterMap {
    let mut letters = LetterMap::with_capacity(placement.word.len());
    for (i, c) in placement.word.chars().enumerate() {
        // Candidates are only ever produced in-bounds by the enumerator, so
        // the cell coordinates here are always non-negative.
        let (x, y) = offset_cell(placement.origin, placement.direction, i);
        letters.insert((x as usize, y as usize), c);
    }
    letters
}

/// Memoising front end over [`expand_uncached`].
///
/// The cache is keyed by structural equality of the `Placement` triple and
/// is never invalidated within a run: the wordlist, grid size and
/// direction set are immutable for the lifetime of a search.
#[derive(Default)]
pub struct PlacementConverter {
    cache: HashMap<Placement, LetterMap>,
}

impl PlacementConverter {
    pub fn new() -> Self {
        PlacementConverter {
            cache: HashMap::new(),
        }
    }

    /// Expands `placement`, populating or reusing the cache entry.
    pub fn expand(&mut self, placement: &Placement) -> &LetterMap {
        self.cache
            .entry(placement.clone())
            .or_insert_with(|| expand_uncached(placement))
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_places_each_letter_in_order() {
        let p = Placement::new((1, 1), Direction::Right, "cat");
        let letters = expand_uncached(&p);
        assert_eq!(letters.len(), 3);
        assert_eq!(letters[&(1, 1)], 'c');
        assert_eq!(letters[&(2, 1)], 'a');
        assert_eq!(letters[&(3, 1)], 't');
    }

    #[test]
    fn expand_handles_negative_directions() {
        let p = Placement::new((2, 2), Direction::UpLeft, "hi");
        let letters = expand_uncached(&p);
        assert_eq!(letters[&(2, 2)], 'h');
        assert_eq!(letters[&(1, 1)], 'i');
    }

    #[test]
    fn cache_is_reused_across_calls() {
        let mut converter = PlacementConverter::new();
        let p = Placement::new((0, 0), Direction::Right, "ok");
        converter.expand(&p);
        assert_eq!(converter.cache_len(), 1);
        converter.expand(&p);
        assert_eq!(converter.cache_len(), 1);

        let cached = converter.expand(&p).clone();
        assert_eq!(cached, expand_uncached(&p));
    }

    #[test]
    fn cache_bypass_does_not_pollute_cache() {
        let mut converter = PlacementConverter::new();
        let p = Placement::new((0, 0), Direction::Right, "ok");
        let _ = expand_uncached(&p);
        assert_eq!(converter.cache_len(), 0);
    }
}
