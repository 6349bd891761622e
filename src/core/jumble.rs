//! Jumble generation
//!
//! A jumble is the letters of one or more source words shuffled together. The
//! generator keeps shuffling until the result differs from the plain
//! concatenation of the sources, giving up after a fixed number of attempts so
//! degenerate inputs like "aa" still terminate.

use super::LetterBag;
use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Default number of shuffles tried before accepting an unscrambled result
pub const DEFAULT_MAX_ATTEMPTS: usize = 8;

/// Invalid generator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JumbleError {
    #[error("separator {0:?} is a letter and would become part of the jumble")]
    AlphabeticSeparator(char),
}

/// Scrambled letters presented to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Jumble(String);

impl Jumble {
    /// Wrap an existing jumble string, e.g. one read back from a session store
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The jumble as displayed, separators included
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Letters available to the player
    #[must_use]
    pub fn letters(&self) -> LetterBag {
        LetterBag::new(&self.0)
    }

    /// True if the jumble holds no letters at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.0.chars().any(char::is_alphabetic)
    }
}

impl fmt::Display for Jumble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shuffles source words into a [`Jumble`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumbleGenerator {
    max_attempts: usize,
    separator: Option<char>,
}

impl Default for JumbleGenerator {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            separator: None,
        }
    }
}

impl JumbleGenerator {
    /// Generator with the default retry budget and no separator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Split multi-word jumbles into word-sized groups joined by `separator`
    ///
    /// # Errors
    /// Returns `JumbleError::AlphabeticSeparator` for a letter, since it would
    /// count as a jumble letter.
    pub fn with_separator(mut self, separator: char) -> Result<Self, JumbleError> {
        if separator.is_alphabetic() {
            return Err(JumbleError::AlphabeticSeparator(separator));
        }
        self.separator = Some(separator);
        Ok(self)
    }

    /// Number of shuffles to try before accepting an unscrambled result (minimum 1)
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = if max_attempts == 0 { 1 } else { max_attempts };
        self
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn separator(&self) -> Option<char> {
        self.separator
    }

    /// Scramble the letters of `words`
    ///
    /// The returned jumble always has the same [`LetterBag`] as the concatenated
    /// words. Its letter order differs from the concatenation unless every
    /// shuffle in the retry budget came back unchanged.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use vocab_jumble::core::{JumbleGenerator, LetterBag};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let jumble = JumbleGenerator::new().generate(&["cat"], &mut rng);
    ///
    /// assert_ne!(jumble.as_str(), "cat");
    /// assert!(jumble.letters().matches(&LetterBag::new("cat")));
    /// ```
    pub fn generate<S, R>(&self, words: &[S], rng: &mut R) -> Jumble
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let groups: Vec<Vec<char>> = words
            .iter()
            .map(|word| normalized_letters(word.as_ref()))
            .filter(|group| !group.is_empty())
            .collect();
        let original: Vec<char> = groups.concat();
        let mut letters = original.clone();

        // No permutation of a single repeated letter can differ from the source
        if letters.windows(2).all(|pair| pair[0] == pair[1]) {
            debug!("Jumble source {original:?} cannot be scrambled");
            return Jumble(self.assemble(&letters, &groups));
        }

        for attempt in 1..=self.max_attempts {
            letters.shuffle(rng);
            if letters != original {
                debug!("Scrambled {} letters in {attempt} attempt(s)", letters.len());
                break;
            }
            if attempt == self.max_attempts {
                warn!(
                    "Jumble still unscrambled after {} attempts, accepting it",
                    self.max_attempts
                );
            }
        }

        let jumble = Jumble(self.assemble(&letters, &groups));
        debug_assert!(
            jumble.letters().matches(&source_bag(words)),
            "jumble {jumble} lost or gained letters"
        );
        jumble
    }

    /// Join shuffled letters, re-inserting separators at the source word boundaries
    fn assemble(&self, letters: &[char], groups: &[Vec<char>]) -> String {
        let Some(separator) = self.separator.filter(|_| groups.len() > 1) else {
            return letters.iter().collect();
        };

        let mut text = String::with_capacity(letters.len() + groups.len());
        let mut start = 0;
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                text.push(separator);
            }
            let end = start + group.len();
            text.extend(&letters[start..end]);
            start = end;
        }
        text
    }
}

/// Combined letters of every source word
fn source_bag<S: AsRef<str>>(words: &[S]) -> LetterBag {
    words
        .iter()
        .fold(LetterBag::default(), |bag, word| bag.add(&LetterBag::new(word.as_ref())))
}

/// Lower-cased letters of `text`, in order, with everything else removed
fn normalized_letters(text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}
