//! Ambient wordlist-file reading. Not part of the core: the core only ever
//! receives an already-read `&[String]`.

use std::fs;

use crate::errors::WordSearchError;

/// Reads a newline-separated wordlist file, trimming whitespace and
/// dropping blank lines.
pub fn read_wordlist(path: &str) -> Result<Vec<String>, WordSearchError> {
    let contents = fs::read_to_string(path).map_err(|source| WordSearchError::WordlistIo {
        path: path.to_string(),
        source,
    })?;
    Ok(parse_wordlist(&contents))
}

/// Parses wordlist file contents already read into memory.
pub fn parse_wordlist(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_newline_separated_words() {
        let words = parse_wordlist("three\none\ntwo\nfull\n");
        assert_eq!(words, vec!["three", "one", "two", "full"]);
    }

    #[test]
    fn drops_blank_lines_and_normalises_case() {
        let words = parse_wordlist("Cat\n\n  dog \n\nMOUSE\n");
        assert_eq!(words, vec!["cat", "dog", "mouse"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = read_wordlist("/nonexistent/path/to/wordlist.txt");
        assert!(matches!(result, Err(WordSearchError::WordlistIo { .. })));
    }
}
