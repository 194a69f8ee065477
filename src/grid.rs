//! The leaf materialiser: renders a completed placement chain into a
//! W x H grid, optionally filling empty cells with random letters.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::Rng;

use crate::placement::LetterMap;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// A rendered W x H grid of characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<char>,
}

impl Grid {
    /// Builds a grid from the union of `LetterMap`s along a completed
    /// placement chain, using `placeholder` for cells no word touches.
    pub fn render(letters: &LetterMap, width: usize, height: usize, placeholder: char) -> Self {
        let mut cells = Array2::from_elem((height, width), placeholder);
        for (&(x, y), &c) in letters.iter() {
            cells[[y, x]] = c;
        }
        Grid { cells }
    }

    /// Replaces every remaining `placeholder` cell with a uniformly random
    /// lowercase letter drawn from `rng`.
    pub fn fill_random(&mut self, placeholder: char, rng: &mut StdRng) {
        for cell in self.cells.iter_mut() {
            if *cell == placeholder {
                let idx = rng.gen_range(0, LOWERCASE.len());
                *cell = LOWERCASE[idx] as char;
            }
        }
    }

    /// The grid's rows, each as a `width`-character string, top to bottom.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .genrows()
            .into_iter()
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Encodes the grid in the reference CLI's wire format: rows joined by
    /// commas, terminated with a semicolon.
    pub fn to_wire_format(&self) -> String {
        let mut out = self.rows().join(",");
        out.push(';');
        out
    }
}
