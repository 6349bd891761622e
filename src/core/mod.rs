//! Core domain types for the jumble game
//!
//! Letter multisets and the jumble generator built on them. Nothing here knows
//! about vocabularies or sessions.

pub mod jumble;
mod letterbag;

pub use jumble::{Jumble, JumbleError, JumbleGenerator};
pub use letterbag::LetterBag;
