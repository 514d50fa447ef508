//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::WordLists;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// File holding the answer pool inside a word list directory
pub const ANSWERS_FILE: &str = "answers.txt";

/// File holding the accepted guesses inside a word list directory
pub const ALLOWED_FILE: &str = "allowed.txt";

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::lexicon::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    if skipped > 0 {
        warn!(path = %path.display(), skipped, "skipped invalid words");
    }
    debug!(path = %path.display(), count = words.len(), "loaded word list");

    Ok(words)
}

/// Load a lexicon from a directory containing `answers.txt` and `allowed.txt`
///
/// # Errors
///
/// Returns an I/O error if either file cannot be read.
pub fn load_dir<P: AsRef<Path>>(dir: P) -> io::Result<WordLists> {
    let dir = dir.as_ref();
    let answers = load_from_file(dir.join(ANSWERS_FILE))?;
    let allowed = load_from_file(dir.join(ALLOWED_FILE))?;
    Ok(WordLists::new(allowed, answers))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::lexicon::loader::words_from_slice;
/// use wordle_game::lexicon::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use tempfile::TempDir;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_skips_blank_and_invalid_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "crane\n\n  slate  \nnope\ncr4ne\nIRATE\n").unwrap();

        let words = load_from_file(&path).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();

        assert_eq!(texts, vec!["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(load_from_file(dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn load_dir_builds_lexicon() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(ANSWERS_FILE), "crane\napple\n").unwrap();
        fs::write(dir.path().join(ALLOWED_FILE), "adopt\nslate\n").unwrap();

        let lists = load_dir(dir.path()).unwrap();

        assert_eq!(lists.answer_pool().len(), 2);
        // Answers are always accepted as guesses
        assert_eq!(lists.valid_guesses().len(), 4);
        assert!(lists.is_valid_guess(&Word::new("apple").unwrap()));
    }
}
