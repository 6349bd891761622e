//! The game vocabulary
//!
//! A `Vocabulary` is loaded once at startup and never changes afterwards, so a
//! single instance can be shared by reference between every session.

mod embedded;
pub mod loader;

pub use embedded::{VOCAB, VOCAB_COUNT};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a vocabulary
///
/// All of these are fatal: a game cannot be served without a vocabulary.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read vocabulary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("vocabulary contains no words")]
    Empty,
    #[error("line {line}: {text:?} is not a single alphabetic word")]
    Malformed { line: usize, text: String },
    #[error("word {word:?} appears more than once")]
    Duplicate { word: String },
}

/// Where to read the vocabulary from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabSource {
    /// The list compiled into the binary
    Embedded,
    /// A text file with one word per line
    File(PathBuf),
}

impl VocabSource {
    /// Parse a command line value: `embedded` or a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Normalize text for comparison: surrounding whitespace removed, lower-cased
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Immutable, sorted list of distinct lower-case words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Load a vocabulary from `source`
    ///
    /// # Errors
    /// Returns `LoadError` if the source cannot be read, holds no words, or
    /// holds a malformed or repeated entry.
    pub fn load(source: &VocabSource) -> Result<Self, LoadError> {
        let vocab = match source {
            VocabSource::Embedded => loader::load_embedded()?,
            VocabSource::File(path) => loader::load_from_file(path)?,
        };
        log::info!("Loaded vocabulary of {} words", vocab.len());
        Ok(vocab)
    }

    /// Build a vocabulary from lines of text
    ///
    /// Blank lines and lines starting with `#` are skipped. Every other line
    /// must be a single alphabetic word once trimmed.
    ///
    /// # Errors
    /// Returns `LoadError::Malformed`, `LoadError::Duplicate` or
    /// `LoadError::Empty`.
    ///
    /// # Examples
    /// ```
    /// use vocab_jumble::vocab::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_lines(["# pets", "Dog", "cat", ""]).unwrap();
    /// assert_eq!(vocab.as_list(), ["cat", "dog"]);
    /// assert!(vocab.has("DOG"));
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();

        for (i, line) in lines.into_iter().enumerate() {
            let trimmed = line.as_ref().trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if !trimmed.chars().all(char::is_alphabetic) {
                return Err(LoadError::Malformed {
                    line: i + 1,
                    text: trimmed.to_string(),
                });
            }
            words.push(normalize(trimmed));
        }

        if words.is_empty() {
            return Err(LoadError::Empty);
        }

        words.sort_unstable();
        if let Some(pair) = words.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(LoadError::Duplicate {
                word: pair[0].clone(),
            });
        }

        Ok(Self { words })
    }

    /// Case-insensitive membership test
    ///
    /// Empty or non-alphabetic text is never a member.
    #[must_use]
    pub fn has(&self, text: &str) -> bool {
        let word = normalize(text);
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            return false;
        }
        self.words.binary_search(&word).is_ok()
    }

    /// All words in sorted order
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a loaded vocabulary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_is_sorted_and_lowercase() {
        let vocab = Vocabulary::from_lines(["Dog", "bird", "CAT"]).unwrap();
        assert_eq!(vocab.as_list(), ["bird", "cat", "dog"]);
        assert_eq!(vocab.len(), 3);
        assert!(!vocab.is_empty());
    }

    #[test]
    fn vocabulary_skips_comments_and_blanks() {
        let vocab = Vocabulary::from_lines(["# header", "", "   ", "  cat  ", "#dog"]).unwrap();
        assert_eq!(vocab.as_list(), ["cat"]);
    }

    #[test]
    fn vocabulary_rejects_empty() {
        assert!(matches!(
            Vocabulary::from_lines(Vec::<String>::new()),
            Err(LoadError::Empty)
        ));
        assert!(matches!(
            Vocabulary::from_lines(["# only a comment", ""]),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn vocabulary_rejects_malformed() {
        let err = Vocabulary::from_lines(["cat", "two words"]).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Malformed { line: 2, ref text } if text == "two words"
        ));
        assert!(Vocabulary::from_lines(["c4t"]).is_err());
    }

    #[test]
    fn vocabulary_rejects_duplicates_after_normalization() {
        let err = Vocabulary::from_lines(["cat", "dog", "CAT"]).unwrap_err();
        assert!(matches!(err, LoadError::Duplicate { ref word } if word == "cat"));
    }

    #[test]
    fn has_is_case_insensitive() {
        let vocab = Vocabulary::from_lines(["cat", "dog"]).unwrap();
        assert!(vocab.has("cat"));
        assert!(vocab.has("CAT"));
        assert!(vocab.has(" Dog "));
        assert!(!vocab.has("bird"));
    }

    #[test]
    fn has_rejects_empty_and_non_alphabetic() {
        let vocab = Vocabulary::from_lines(["cat"]).unwrap();
        assert!(!vocab.has(""));
        assert!(!vocab.has("   "));
        assert!(!vocab.has("c@t"));
        assert!(!vocab.has("cat!"));
    }

    #[test]
    fn iter_matches_list_order() {
        let vocab = Vocabulary::from_lines(["b", "a"]).unwrap();
        let words: Vec<&str> = vocab.iter().collect();
        assert_eq!(words, vec!["a", "b"]);
    }

    #[test]
    fn source_from_arg() {
        assert_eq!(VocabSource::from_arg("embedded"), VocabSource::Embedded);
        assert_eq!(
            VocabSource::from_arg("data/vocab.txt"),
            VocabSource::File(PathBuf::from("data/vocab.txt"))
        );
    }

    #[test]
    fn embedded_vocabulary_loads() {
        let vocab = Vocabulary::load(&VocabSource::Embedded).unwrap();
        assert_eq!(vocab.len(), VOCAB_COUNT);
        assert!(vocab.as_list().windows(2).all(|pair| pair[0] < pair[1]));
    }
}
