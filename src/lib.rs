//! Vocabulary Jumble
//!
//! A word-jumble game engine: letters of vocabulary words are scrambled into a
//! puzzle and the player hunts for the words hidden in it.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use vocab_jumble::game::{Game, GameConfig};
//! use vocab_jumble::vocab::Vocabulary;
//!
//! let vocab = Vocabulary::from_lines(["cat", "dog", "bird"]).unwrap();
//! let game = Game::new(&vocab, GameConfig::new(2));
//!
//! let mut state = game.start_session(&mut StdRng::seed_from_u64(1)).unwrap();
//! println!("Find {} words in {}", state.target_count, state.jumble);
//!
//! let result = game.check(&mut state, "cat").unwrap();
//! println!("valid: {}, complete: {}", result.valid, result.complete);
//! ```

// Letter bags and jumble generation
pub mod core;

// Shared vocabulary
pub mod vocab;

// Session state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
