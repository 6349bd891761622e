//! Vocabulary loading utilities
//!
//! Reads a vocabulary from a file, a string, or the embedded list.

use super::{LoadError, VOCAB, Vocabulary};
use std::fs;
use std::path::Path;

/// Load a vocabulary from a file with one word per line
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or any validation
/// error from [`Vocabulary::from_lines`].
///
/// # Examples
/// ```no_run
/// use vocab_jumble::vocab::loader::load_from_file;
///
/// let vocab = load_from_file("data/vocab.txt").unwrap();
/// println!("Loaded {} words", vocab.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vocabulary, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_from_str(&content)
}

/// Load a vocabulary from text with one word per line
///
/// # Errors
///
/// Returns a validation error from [`Vocabulary::from_lines`].
pub fn load_from_str(text: &str) -> Result<Vocabulary, LoadError> {
    Vocabulary::from_lines(text.lines())
}

/// Load the vocabulary compiled into the binary
///
/// # Errors
///
/// Only fails if the embedded list itself is malformed.
///
/// # Examples
/// ```
/// use vocab_jumble::vocab::loader::load_embedded;
/// use vocab_jumble::vocab::VOCAB;
///
/// let vocab = load_embedded().unwrap();
/// assert_eq!(vocab.len(), VOCAB.len());
/// ```
pub fn load_embedded() -> Result<Vocabulary, LoadError> {
    Vocabulary::from_lines(VOCAB)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_str_one_word_per_line() {
        let vocab = load_from_str("cat\ndog\r\nbird\n").unwrap();
        assert_eq!(vocab.as_list(), ["bird", "cat", "dog"]);
    }

    #[test]
    fn load_from_str_empty() {
        assert!(matches!(load_from_str(""), Err(LoadError::Empty)));
        assert!(matches!(load_from_str("\n\n# nothing\n"), Err(LoadError::Empty)));
    }

    #[test]
    fn load_from_missing_file() {
        let err = load_from_file("definitely/not/here/vocab.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here/vocab.txt"));
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("vocab_jumble_{}.txt", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "# test list").unwrap();
            writeln!(file, "Kettle").unwrap();
            writeln!(file, "anchor").unwrap();
        }

        let vocab = load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(vocab.as_list(), ["anchor", "kettle"]);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in VOCAB {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }
}
