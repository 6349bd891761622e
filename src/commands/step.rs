//! One-shot JSON requests
//!
//! Each call is a single request/response cycle: session state comes in as a
//! JSON object, the updated state goes out. The caller owns persistence.

use crate::game::{CheckResult, Game, MemoryStore, SessionState, SessionStore};
use anyhow::{Context, Result, bail};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

/// Check result as returned to the client, with the page to show next
#[derive(Debug, Clone, Serialize)]
pub struct CheckReply {
    #[serde(flatten)]
    pub result: CheckResult,
    pub url: &'static str,
}

/// Response to a check request
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub result: CheckReply,
    pub state: SessionState,
}

/// Start a new puzzle and return its state
///
/// # Errors
///
/// Returns an error if the game cannot start a session.
pub fn start<R: Rng + ?Sized>(game: &Game<'_>, rng: &mut R) -> Result<SessionState> {
    Ok(game.start_session(rng)?)
}

/// Check `word` against the session encoded in `state_json`
///
/// # Errors
///
/// Returns an error if `state_json` is not a JSON object holding a usable
/// session state.
///
/// # Examples
/// ```
/// use vocab_jumble::commands::step::check;
/// use vocab_jumble::game::{Game, GameConfig};
/// use vocab_jumble::vocab::Vocabulary;
///
/// let vocab = Vocabulary::from_lines(["cat", "dog"]).unwrap();
/// let game = Game::new(&vocab, GameConfig::new(2));
///
/// let state = r#"{"target_count": 2, "matches": [], "jumble": "tac"}"#;
/// let response = check(&game, state, "cat").unwrap();
/// assert!(response.result.result.valid);
/// assert_eq!(response.result.url, "keep_going");
/// assert_eq!(response.state.matches, ["cat"]);
/// ```
pub fn check(game: &Game<'_>, state_json: &str, word: &str) -> Result<CheckResponse> {
    let store = store_from_json(state_json)?;
    let mut state = SessionState::load_from(&store).context("cannot restore session")?;

    let result = game.check(&mut state, word)?;

    Ok(CheckResponse {
        result: CheckReply {
            result,
            url: result.next_page().route(),
        },
        state,
    })
}

/// Copy the fields of a JSON object into a fresh session store
fn store_from_json(state_json: &str) -> Result<MemoryStore> {
    let value: Value = serde_json::from_str(state_json).context("session state is not JSON")?;
    let Value::Object(fields) = value else {
        bail!("session state must be a JSON object");
    };

    let mut store = MemoryStore::new();
    for (key, value) in fields {
        store.set(&key, value);
    }
    Ok(store)
}
