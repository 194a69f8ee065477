//! The recursive search: walks the (pre-sorted) wordlist one word at a
//! time, building up a chain of compatible placements and rendering a
//! grid at every completed chain, subject to an output budget.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::budget::Budget;
use crate::config::{GeneratorConfig, ResolvedRun};
use crate::enumerator::CandidateEnumerator;
use crate::errors::WordSearchError;
use crate::grid::Grid;
use crate::placement::{LetterMap, Placement, PlacementConverter};
use crate::validator::compatible;

/// Summary of a completed run: how many grids were actually emitted versus
/// how many were requested (`None` means exhaustive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub emitted: u64,
    pub requested: Option<u64>,
}

/// Runs the search over `words` with `config`, invoking `on_puzzle` with
/// each completed grid's rows (top to bottom) as it is produced.
///
/// `words` need not already be sorted or dimension-checked; [`resolve`] is
/// applied first (see [`GeneratorConfig::resolve`]).
pub fn search(
    config: &GeneratorConfig,
    words: &[String],
    mut on_puzzle: impl FnMut(&[String]),
) -> Result<SearchReport, WordSearchError> {
    let resolved = config.resolve(words)?;

    let budget = match config.puzzle_count {
        Some(n) => Budget::from_u64(n),
        None => Budget::unlimited(),
    };

    let mut placements: Vec<Placement> = Vec::with_capacity(resolved.words.len());
    let mut committed = LetterMap::new();
    let mut emitted = 0u64;
    let mut fill_rng = StdRng::seed_from_u64(config.seed);
    let mut converter = PlacementConverter::new();

    expand_branch(
        &resolved,
        0,
        config.sequential,
        config.seed,
        &mut placements,
        &mut committed,
        &budget,
        config.complete_grids,
        config.placeholder,
        &mut fill_rng,
        &mut converter,
        &mut emitted,
        &mut on_puzzle,
    );

    Ok(SearchReport {
        emitted,
        requested: config.puzzle_count,
    })
}

/// The recursive core: `placements` and
/// `committed` are a single stack shared across the whole recursion, pushed
/// before descending into a child and popped again on return, so no
/// branch ever pays for reconstructing its ancestors' state from scratch.
#[allow(clippy::too_many_arguments)]
fn expand_branch(
    resolved: &ResolvedRun,
    word_index: usize,
    sequential: bool,
    seed: u64,
    placements: &mut Vec<Placement>,
    committed: &mut LetterMap,
    budget: &Budget,
    complete_grids: bool,
    placeholder: char,
    fill_rng: &mut StdRng,
    converter: &mut PlacementConverter,
    emitted: &mut u64,
    on_puzzle: &mut dyn FnMut(&[String]),
) {
    if budget.is_zero() {
        return;
    }

    if word_index == resolved.words.len() {
        let mut grid = Grid::render(committed, resolved.width, resolved.height, placeholder);
        if complete_grids {
            grid.fill_random(placeholder, fill_rng);
        }
        on_puzzle(&grid.rows());
        *emitted += 1;
        return;
    }

    let word = &resolved.words[word_index];
    let enumerator =
        CandidateEnumerator::new(word, resolved.width, resolved.height, sequential, seed);
    let cap = budget.candidate_cap();

    let mut survivors: Vec<(Placement, LetterMap)> = Vec::new();
    for candidate in enumerator {
        if let Some(cap) = cap {
            if survivors.len() >= cap {
                break;
            }
        }
        // The same (origin, direction, word) candidate recurs across many
        // sibling branches at this word_index (the enumerator is seeded
        // identically regardless of the committed map), so the memoising
        // converter earns its keep here rather than in a one-shot bypass.
        let letters = converter.expand(&candidate).clone();
        if compatible(&letters, committed) {
            survivors.push((candidate, letters));
        }
    }

    if survivors.is_empty() {
        // No placement of this word survives against the committed
        // letters; this branch is pruned. Not an error.
        return;
    }

    let child_budgets = budget.distribute(survivors.len());

    for ((candidate, letters), child_budget) in survivors.into_iter().zip(child_budgets) {
        if child_budget.is_zero() {
            continue;
        }

        let mut newly_inserted = Vec::with_capacity(letters.len());
        for (cell, letter) in letters {
            if !committed.contains_key(&cell) {
                committed.insert(cell, letter);
                newly_inserted.push(cell);
            }
        }
        placements.push(candidate);

        expand_branch(
            resolved,
            word_index + 1,
            sequential,
            seed,
            placements,
            committed,
            &child_budget,
            complete_grids,
            placeholder,
            fill_rng,
            converter,
            emitted,
            on_puzzle,
        );

        placements.pop();
        for cell in newly_inserted {
            committed.remove(&cell);
        }
    }
}
