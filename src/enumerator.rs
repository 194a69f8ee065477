//! The candidate enumerator: for a word and grid size, lazily yields every
//! (origin cell, direction) pair admissible by geometry alone (the overlap
//! validator is applied by the caller, not here).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::geometry::{in_bounds, Cell, Direction};
use crate::placement::Placement;

/// Directions a word of `length` could possibly run along on a
/// `width` x `height` grid, before checking any specific origin.
///
/// When `length > width`, only the vertical directions can ever fit; when
/// `length > height`, only the horizontal ones. This is a cheap
/// pre-filter; [`in_bounds`] is still the authority for any given origin.
pub fn admissible_directions(length: usize, width: usize, height: usize) -> Vec<Direction> {
    if length > width && length > height {
        return vec![];
    }
    if length > width {
        return Direction::ALL
            .iter()
            .copied()
            .filter(|d| d.is_vertical())
            .collect();
    }
    if length > height {
        return Direction::ALL
            .iter()
            .copied()
            .filter(|d| d.is_horizontal())
            .collect();
    }
    Direction::ALL.to_vec()
}

/// Lazily yields [`Placement`] candidates for `word` on a `width` x
/// `height` grid.
///
/// In sequential mode, origins are visited in row-major order (y outer, x
/// inner, both ascending) and directions in the fixed octet order. This
/// is the deterministic-mode contract. In randomised mode, both the origin
/// order and each origin's direction order are drawn from a seeded
/// Fisher-Yates shuffle, so repeated runs with different seeds produce
/// different leaves.
pub struct CandidateEnumerator {
    word: String,
    width: usize,
    height: usize,
    origins: Vec<Cell>,
    directions_template: Vec<Direction>,
    current_origin: Option<Cell>,
    current_directions: Vec<Direction>,
    sequential: bool,
    rng: Option<StdRng>,
}

impl CandidateEnumerator {
    pub fn new(word: &str, width: usize, height: usize, sequential: bool, seed: u64) -> Self {
        let directions_template = admissible_directions(word.chars().count(), width, height);

        let mut origins = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                origins.push((x, y));
            }
        }

        let rng = if sequential {
            None
        } else {
            let mut rng = StdRng::seed_from_u64(seed);
            origins.shuffle(&mut rng);
            Some(rng)
        };

        CandidateEnumerator {
            word: word.to_string(),
            width,
            height,
            origins,
            directions_template,
            current_origin: None,
            current_directions: vec![],
            sequential,
            rng,
        }
    }

    fn refill_directions_for_next_origin(&mut self) -> bool {
        while let Some(origin) = self.next_origin() {
            let mut dirs = self.directions_template.clone();
            if let Some(rng) = self.rng.as_mut() {
                dirs.shuffle(rng);
            } else {
                // current_directions is drained tail-first (see next()), so
                // reverse the template here to present octet order.
                dirs.reverse();
            }
            if !dirs.is_empty() {
                self.current_origin = Some(origin);
                self.current_directions = dirs;
                return true;
            }
        }
        false
    }

    fn next_origin(&mut self) -> Option<Cell> {
        if self.sequential {
            if self.origins.is_empty() {
                None
            } else {
                Some(self.origins.remove(0))
            }
        } else {
            self.origins.pop()
        }
    }
}

impl Iterator for CandidateEnumerator {
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        loop {
            if self.current_directions.is_empty() {
                if !self.refill_directions_for_next_origin() {
                    return None;
                }
            }

            let origin = self.current_origin.expect("set by refill");
            while let Some(direction) = self.current_directions.pop() {
                if in_bounds(origin, direction, self.word.chars().count(), self.width, self.height) {
                    return Some(Placement::new(origin, direction, self.word.clone()));
                }
            }
            // Exhausted directions for this origin without finding an
            // in-bounds one; loop back and pull the next origin.
        }
    }
}
