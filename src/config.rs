//! Configuration for a generation run, and the pre-sorting / width-height
//! coercion rule the core applies before searching.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::WordSearchError;

/// Configuration record for one generation run. Immutable once passed to
/// [`crate::search::search`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub width: Option<usize>,
    pub height: Option<usize>,
    /// `None` means exhaustive ("create_all" / budget -1).
    pub puzzle_count: Option<u64>,
    pub complete_grids: bool,
    pub placeholder: char,
    pub sequential: bool,
    /// Seeds the randomised enumerator. Ignored when `sequential` is true.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            width: None,
            height: None,
            puzzle_count: Some(1),
            complete_grids: true,
            placeholder: '*',
            sequential: false,
            seed: 0,
        }
    }
}

/// A pre-sorted, length-validated wordlist paired with the effective grid
/// dimensions it will be searched against.
#[derive(Debug)]
pub struct ResolvedRun {
    pub words: Vec<String>,
    pub width: usize,
    pub height: usize,
}

impl GeneratorConfig {
    /// Loads a config record from a JSON file, for callers that keep their
    /// run settings alongside the wordlist rather than building a
    /// `GeneratorConfig` in code.
    pub fn load_from_file(path: &str) -> Result<Self, WordSearchError> {
        let contents = std::fs::read_to_string(path).map_err(|source| WordSearchError::WordlistIo {
            path: path.to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| WordSearchError::ConfigParse {
            path: path.to_string(),
            source,
        })
    }

    /// Applies the pre-sorting and width/height coercion rule: the
    /// wordlist is stably re-sorted by descending length, and width/height
    /// are coerced upward to at least the longest word's length if the
    /// caller supplied something smaller (logging a `warn!` when that
    /// happens).
    pub fn resolve(&self, words: &[String]) -> Result<ResolvedRun, WordSearchError> {
        if words.is_empty() {
            return Err(WordSearchError::EmptyWordlist);
        }
        for word in words {
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(WordSearchError::InvalidWord(word.clone()));
            }
        }

        let mut sorted = words.to_vec();
        sorted.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));

        let longest = sorted[0].chars().count();

        let width = match self.width {
            None => longest,
            Some(w) if w < longest => {
                warn!(
                    "specified width {} is shorter than the longest word ({}); increasing width to fit",
                    w, longest
                );
                longest
            }
            Some(w) => w,
        };

        let height = match self.height {
            None => longest,
            Some(h) if h < longest => {
                warn!(
                    "specified height {} is shorter than the longest word ({}); increasing height to fit",
                    h, longest
                );
                longest
            }
            Some(h) => h,
        };

        if longest > width.max(height) {
            return Err(WordSearchError::WordTooLong {
                word: sorted[0].clone(),
                length: longest,
                width,
                height,
            });
        }

        Ok(ResolvedRun {
            words: sorted,
            width,
            height,
        })
    }
}
