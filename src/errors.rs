use thiserror::Error;

use crate::geometry::Direction;

/// Errors the core search can raise before a run begins, and errors the
/// ambient wordlist/CLI layer can raise around it.
///
/// Pruning a branch because no candidate placement survives the overlap
/// validator, or finishing a run short of the requested count, are both
/// normal outcomes of the search and are never represented here.
#[derive(Error, Debug)]
pub enum WordSearchError {
    #[error("word '{word}' (length {length}) is too long for a {width}x{height} grid")]
    WordTooLong {
        word: String,
        length: usize,
        width: usize,
        height: usize,
    },

    #[error("word '{0}' contains characters outside a-z")]
    InvalidWord(String),

    #[error("wordlist is empty")]
    EmptyWordlist,

    #[error("placement of '{word}' at {origin:?} direction {direction:?} runs out of bounds")]
    OutOfBounds {
        word: String,
        origin: (usize, usize),
        direction: Direction,
    },

    #[error("could not read wordlist file '{path}': {source}")]
    WordlistIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not write puzzle output to '{path}': {source}")]
    OutputIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
