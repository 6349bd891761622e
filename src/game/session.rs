//! Per-session game state
//!
//! The state is a plain value: the serving layer keeps it in its own session
//! store between requests and hands it back for every submission.

use super::SessionError;
use super::store::SessionStore;
use crate::core::Jumble;
use crate::vocab::normalize;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Store key holding the number of matches needed to finish the puzzle
pub const KEY_TARGET_COUNT: &str = "target_count";
/// Store key holding the words found so far
pub const KEY_MATCHES: &str = "matches";
/// Store key holding the active jumble
pub const KEY_JUMBLE: &str = "jumble";

/// Progress through the current puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Fewer matches than the target
    Active,
    /// Target reached; terminal until a new puzzle starts
    Complete,
}

/// State of one player's puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub target_count: usize,
    pub matches: Vec<String>,
    pub jumble: Jumble,
}

impl SessionState {
    /// Fresh puzzle with no matches yet
    #[must_use]
    pub const fn new(target_count: usize, jumble: Jumble) -> Self {
        Self {
            target_count,
            matches: Vec::new(),
            jumble,
        }
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        if self.matches.len() >= self.target_count {
            Progress::Complete
        } else {
            Progress::Active
        }
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress() == Progress::Complete
    }

    /// Matches still needed to complete the puzzle
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.target_count.saturating_sub(self.matches.len())
    }

    /// Check the invariants that do not depend on the vocabulary
    ///
    /// # Errors
    /// Returns `SessionError::InvalidState` describing the first violation.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.target_count == 0 {
            return Err(SessionError::InvalidState(
                "target count is zero".to_string(),
            ));
        }
        if self.jumble.is_empty() {
            return Err(SessionError::InvalidState("jumble is empty".to_string()));
        }
        if self.matches.len() > self.target_count {
            return Err(SessionError::InvalidState(format!(
                "{} matches recorded for a target of {}",
                self.matches.len(),
                self.target_count
            )));
        }
        for (i, word) in self.matches.iter().enumerate() {
            if word.is_empty() || *word != normalize(word) {
                return Err(SessionError::InvalidState(format!(
                    "match {word:?} is not a normalized word"
                )));
            }
            if self.matches[..i].contains(word) {
                return Err(SessionError::InvalidState(format!(
                    "match {word:?} recorded twice"
                )));
            }
        }
        Ok(())
    }

    /// Read the state back from a session store
    ///
    /// # Errors
    /// Returns `SessionError::MissingField` if a key is absent and
    /// `SessionError::CorruptField` if a value has the wrong shape.
    pub fn load_from<S: SessionStore + ?Sized>(store: &S) -> Result<Self, SessionError> {
        Ok(Self {
            target_count: read_field(store, KEY_TARGET_COUNT)?,
            matches: read_field(store, KEY_MATCHES)?,
            jumble: read_field(store, KEY_JUMBLE)?,
        })
    }

    /// Write every field to a session store
    pub fn save_to<S: SessionStore + ?Sized>(&self, store: &mut S) {
        store.set(KEY_TARGET_COUNT, json!(self.target_count));
        store.set(KEY_MATCHES, json!(self.matches));
        store.set(KEY_JUMBLE, json!(self.jumble.as_str()));
    }
}

fn read_field<S, T>(store: &S, field: &'static str) -> Result<T, SessionError>
where
    S: SessionStore + ?Sized,
    T: serde::de::DeserializeOwned,
{
    let value = store.get(field).ok_or(SessionError::MissingField(field))?;
    serde_json::from_value(value).map_err(|e| SessionError::CorruptField {
        field,
        reason: e.to_string(),
    })
}

/// Where the serving layer should send the player after a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextPage {
    Success,
    KeepGoing,
}

impl NextPage {
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::KeepGoing => "keep_going",
        }
    }
}

/// Outcome of checking one submitted word
///
/// Once a session is complete nothing more is recorded. A valid word that was
/// not matched before is then reported as `valid: true, oldmatch: false,
/// complete: true` but does not appear in the session's matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Word is in the vocabulary and can be spelled from the jumble
    pub valid: bool,
    /// Word had already been matched before this submission
    ///
    /// Stays false for a new word submitted after completion, even though that
    /// word is not recorded.
    pub oldmatch: bool,
    /// The session reached its target count
    pub complete: bool,
}

impl CheckResult {
    #[must_use]
    pub const fn next_page(&self) -> NextPage {
        if self.complete {
            NextPage::Success
        } else {
            NextPage::KeepGoing
        }
    }
}
