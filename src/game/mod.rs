//! Jumble game engine
//!
//! [`Game`] borrows the shared vocabulary and turns an explicit
//! [`SessionState`] into the next one. It never holds session data itself, so
//! one engine can serve any number of independent sessions.

pub mod session;
pub mod store;

pub use session::{CheckResult, NextPage, Progress, SessionState};
pub use store::{MemoryStore, SessionStore};

use crate::core::{JumbleGenerator, LetterBag};
use crate::vocab::{Vocabulary, normalize};
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

/// Matches required to finish a puzzle unless configured otherwise
pub const DEFAULT_SUCCESS_THRESHOLD: usize = 3;

/// Errors that make a session unusable
///
/// Rejected words are not errors; they are reported through [`CheckResult`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("target count is zero (vocabulary of {vocab_size} words, threshold {threshold})")]
    InvalidTarget { vocab_size: usize, threshold: usize },
    #[error("invalid session state: {0}")]
    InvalidState(String),
    #[error("session field `{0}` is missing")]
    MissingField(&'static str),
    #[error("session field `{field}` is corrupt: {reason}")]
    CorruptField { field: &'static str, reason: String },
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Matches needed to complete a puzzle, capped by the vocabulary size
    pub success_threshold: usize,
    pub generator: JumbleGenerator,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            success_threshold: DEFAULT_SUCCESS_THRESHOLD,
            generator: JumbleGenerator::default(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(success_threshold: usize) -> Self {
        Self {
            success_threshold,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_generator(mut self, generator: JumbleGenerator) -> Self {
        self.generator = generator;
        self
    }
}

/// The jumble game engine
pub struct Game<'a> {
    vocab: &'a Vocabulary,
    config: GameConfig,
}

impl<'a> Game<'a> {
    #[must_use]
    pub const fn new(vocab: &'a Vocabulary, config: GameConfig) -> Self {
        Self { vocab, config }
    }

    #[inline]
    #[must_use]
    pub const fn vocab(&self) -> &'a Vocabulary {
        self.vocab
    }

    /// Distinct matches needed per puzzle: the smaller of vocabulary size and threshold
    ///
    /// # Errors
    /// Returns `SessionError::InvalidTarget` if that number is zero.
    pub fn target_count(&self) -> Result<usize, SessionError> {
        let target = self.vocab.len().min(self.config.success_threshold);
        if target == 0 {
            return Err(SessionError::InvalidTarget {
                vocab_size: self.vocab.len(),
                threshold: self.config.success_threshold,
            });
        }
        Ok(target)
    }

    /// Start a new puzzle
    ///
    /// Picks `target_count` distinct vocabulary words at random and jumbles
    /// their letters together, so every target word can be found.
    ///
    /// # Errors
    /// Returns `SessionError::InvalidTarget` for a misconfigured threshold.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use vocab_jumble::game::{Game, GameConfig};
    /// use vocab_jumble::vocab::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_lines(["cat", "dog", "bird"]).unwrap();
    /// let game = Game::new(&vocab, GameConfig::new(2));
    /// let state = game.start_session(&mut StdRng::seed_from_u64(1)).unwrap();
    ///
    /// assert_eq!(state.target_count, 2);
    /// assert!(state.matches.is_empty());
    /// ```
    pub fn start_session<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SessionState, SessionError> {
        let target_count = self.target_count()?;
        let sources: Vec<&String> = self
            .vocab
            .as_list()
            .choose_multiple(rng, target_count)
            .collect();
        self.start_session_from(&sources, rng)
    }

    /// Start a new puzzle whose jumble is built from `sources`
    ///
    /// # Errors
    /// Returns `SessionError::InvalidTarget` for a misconfigured threshold, or
    /// `SessionError::InvalidState` if the sources contain no letters.
    pub fn start_session_from<S, R>(
        &self,
        sources: &[S],
        rng: &mut R,
    ) -> Result<SessionState, SessionError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let target_count = self.target_count()?;
        let jumble = self.config.generator.generate(sources, rng);
        let state = SessionState::new(target_count, jumble);
        state.validate()?;

        debug!(
            "Session started: target {target_count}, jumble {:?}",
            state.jumble.as_str()
        );
        Ok(state)
    }

    /// Continue the current puzzle with the same jumble
    ///
    /// # Errors
    /// Returns the integrity error if `state` is not a usable session.
    pub fn keep_going(&self, state: &SessionState) -> Result<Progress, SessionError> {
        self.validate(state)?;
        Ok(state.progress())
    }

    /// Check a submitted word against the session
    ///
    /// A word is valid when it is in the vocabulary and its letters are
    /// available in the jumble. A valid word not seen before is appended to
    /// `state.matches`; nothing else in the state changes. Once the puzzle is
    /// complete no further words are appended, so a new valid word is reported
    /// as `valid`, not `oldmatch`, and left out of `state.matches`.
    ///
    /// # Errors
    /// Returns an integrity error if `state` is corrupt. Bad submissions are
    /// never errors.
    ///
    /// # Examples
    /// ```
    /// use vocab_jumble::core::Jumble;
    /// use vocab_jumble::game::{Game, GameConfig, SessionState};
    /// use vocab_jumble::vocab::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_lines(["cat", "dog", "bird"]).unwrap();
    /// let game = Game::new(&vocab, GameConfig::new(2));
    /// let mut state = SessionState::new(2, Jumble::new("tac"));
    ///
    /// let result = game.check(&mut state, "Cat").unwrap();
    /// assert!(result.valid && !result.oldmatch && !result.complete);
    /// assert_eq!(state.matches, ["cat"]);
    /// ```
    pub fn check(&self, state: &mut SessionState, text: &str) -> Result<CheckResult, SessionError> {
        self.validate(state)?;

        let word = normalize(text);
        let valid = !word.is_empty()
            && self.vocab.has(&word)
            && LetterBag::new(&word).is_subset_of(&state.jumble.letters());
        let oldmatch = !word.is_empty() && state.matches.contains(&word);

        if valid && !oldmatch && !state.is_complete() {
            state.matches.push(word.clone());
        }

        let result = CheckResult {
            valid,
            oldmatch,
            complete: state.is_complete(),
        };
        debug!(
            "Checked {word:?}: valid={} oldmatch={} complete={} ({}/{})",
            result.valid,
            result.oldmatch,
            result.complete,
            state.matches.len(),
            state.target_count
        );
        Ok(result)
    }

    /// Check every invariant of `state`, including those tied to the vocabulary
    ///
    /// # Errors
    /// Returns `SessionError::InvalidState` describing the first violation.
    pub fn validate(&self, state: &SessionState) -> Result<(), SessionError> {
        state.validate()?;

        if state.target_count > self.vocab.len() {
            return Err(SessionError::InvalidState(format!(
                "target count {} exceeds vocabulary of {} words",
                state.target_count,
                self.vocab.len()
            )));
        }

        let letters = state.jumble.letters();
        for word in &state.matches {
            if !self.vocab.has(word) {
                return Err(SessionError::InvalidState(format!(
                    "match {word:?} is not in the vocabulary"
                )));
            }
            if !letters.contains(&LetterBag::new(word)) {
                return Err(SessionError::InvalidState(format!(
                    "match {word:?} cannot be spelled from the jumble"
                )));
            }
        }
        Ok(())
    }
}
