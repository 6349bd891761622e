// Integration tests for the jumble engine
// These drive the public API the way a serving layer would

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use vocab_jumble::core::{Jumble, JumbleGenerator, LetterBag};
use vocab_jumble::game::{
    CheckResult, Game, GameConfig, MemoryStore, NextPage, SessionError, SessionState, SessionStore,
};
use vocab_jumble::vocab::{VocabSource, Vocabulary};

fn animals() -> Vocabulary {
    Vocabulary::from_lines(["cat", "dog", "bird"]).unwrap()
}

fn result(valid: bool, oldmatch: bool, complete: bool) -> CheckResult {
    CheckResult {
        valid,
        oldmatch,
        complete,
    }
}

#[test]
fn test_single_word_puzzle_walkthrough() {
    let vocab = animals();
    let game = Game::new(&vocab, GameConfig::new(2));
    assert_eq!(game.target_count(), Ok(2));

    let mut rng = StdRng::seed_from_u64(17);
    let mut state = game.start_session_from(&["cat"], &mut rng).unwrap();
    assert_ne!(state.jumble.as_str(), "cat");
    assert!(state.jumble.letters().matches(&LetterBag::new("cat")));

    // New match
    assert_eq!(game.check(&mut state, "cat"), Ok(result(true, false, false)));
    assert_eq!(state.matches, ["cat"]);

    // Repeat is reported, not re-added
    assert_eq!(game.check(&mut state, "cat"), Ok(result(true, true, false)));
    assert_eq!(state.matches, ["cat"]);

    // In the vocabulary but not in the jumble
    assert_eq!(game.check(&mut state, "dog"), Ok(result(false, false, false)));

    // Blank input
    assert_eq!(game.check(&mut state, ""), Ok(result(false, false, false)));
    assert_eq!(state.matches, ["cat"]);
}

#[test]
fn test_tiny_vocabulary_completes_in_one() {
    let vocab = Vocabulary::from_lines(["ox"]).unwrap();
    let game = Game::new(&vocab, GameConfig::new(5));
    assert_eq!(game.target_count(), Ok(1));

    let mut state = game.start_session(&mut StdRng::seed_from_u64(0)).unwrap();
    let outcome = game.check(&mut state, "ox").unwrap();

    assert_eq!(outcome, result(true, false, true));
    assert_eq!(outcome.next_page(), NextPage::Success);
}

#[test]
fn test_full_session_through_store() {
    let vocab = Vocabulary::load(&VocabSource::Embedded).unwrap();
    let game = Game::new(&vocab, GameConfig::new(3));
    let mut rng = StdRng::seed_from_u64(99);

    // Request 1: start, persist
    let mut store = MemoryStore::new();
    game.start_session(&mut rng).unwrap().save_to(&mut store);

    // Find the target words the way a player would: vocabulary words in the jumble
    let state = SessionState::load_from(&store).unwrap();
    let letters = state.jumble.letters();
    let hidden: Vec<String> = vocab
        .iter()
        .filter(|w| LetterBag::new(w).is_subset_of(&letters))
        .map(str::to_string)
        .collect();
    assert!(hidden.len() >= 3);

    // One request per submission, state round-tripped through the store each time
    let mut complete = false;
    for word in &hidden {
        let mut state = SessionState::load_from(&store).unwrap();
        let outcome = game.check(&mut state, &word.to_uppercase()).unwrap();
        state.save_to(&mut store);

        // Completion never reverts
        assert!(outcome.complete || !complete);
        complete = outcome.complete;
    }

    let state = SessionState::load_from(&store).unwrap();
    assert!(complete);
    assert_eq!(state.matches.len(), 3);
}

#[test]
fn test_corrupt_store_is_reported() {
    let vocab = animals();
    let game = Game::new(&vocab, GameConfig::new(2));

    // A full save copied into a store that lost one key
    let mut saved = MemoryStore::new();
    game.start_session(&mut StdRng::seed_from_u64(1))
        .unwrap()
        .save_to(&mut saved);

    let mut store = MemoryStore::new();
    for key in ["matches", "jumble"] {
        store.set(key, saved.get(key).unwrap());
    }

    assert_eq!(
        SessionState::load_from(&store),
        Err(SessionError::MissingField("target_count"))
    );
}

#[test]
fn test_separator_letters_stay_out_of_the_jumble() {
    assert!(JumbleGenerator::new().with_separator('x').is_err());

    let vocab = animals();
    let generator = JumbleGenerator::new().with_separator('+').unwrap();
    let game = Game::new(&vocab, GameConfig::new(2).with_generator(generator));
    let mut state = game
        .start_session_from(&["cat", "dog"], &mut StdRng::seed_from_u64(3))
        .unwrap();

    assert!(state.jumble.letters().matches(&LetterBag::new("catdog")));
    assert_eq!(game.check(&mut state, "bird"), Ok(result(false, false, false)));
}

#[test]
fn test_mixed_case_stored_match_is_rejected() {
    let vocab = animals();
    let game = Game::new(&vocab, GameConfig::new(2));

    let mut store = MemoryStore::new();
    store.set("target_count", serde_json::json!(2));
    store.set("matches", serde_json::json!(["Cat"]));
    store.set("jumble", serde_json::json!("tacgod"));

    let mut state = SessionState::load_from(&store).unwrap();
    assert!(matches!(
        game.check(&mut state, "cat"),
        Err(SessionError::InvalidState(_))
    ));
}

#[test]
fn test_anagram_symmetry_over_permutations() {
    let mut rng = StdRng::seed_from_u64(5);
    for word in ["lantern", "kettle", "Mississippi", "a", ""] {
        let mut letters: Vec<char> = word.chars().collect();
        for _ in 0..20 {
            letters.shuffle(&mut rng);
            let permuted: String = letters.iter().collect();
            assert!(LetterBag::new(word).matches(&LetterBag::new(&permuted)));
        }
    }
}

#[test]
fn test_jumble_soundness_for_embedded_vocabulary() {
    let vocab = Vocabulary::load(&VocabSource::Embedded).unwrap();
    let generator = JumbleGenerator::new();
    let mut rng = StdRng::seed_from_u64(2024);

    for word in vocab.iter() {
        let jumble = generator.generate(&[word], &mut rng);
        assert!(jumble.letters().matches(&LetterBag::new(word)));
        assert_ne!(jumble.as_str(), word);
    }
}

#[test]
fn test_validation_matches_definition() {
    let vocab = Vocabulary::from_lines(["cat", "act", "tact", "dog", "at"]).unwrap();
    let game = Game::new(&vocab, GameConfig::new(5));
    let jumble = LetterBag::new("tca");

    for text in ["cat", "act", "tact", "dog", "at", "ta", "", "CAT", "c a t"] {
        let mut state = SessionState::new(5, Jumble::new("tca"));
        let expected = vocab.has(text) && LetterBag::new(text).is_subset_of(&jumble);
        assert_eq!(game.check(&mut state, text).unwrap().valid, expected, "{text:?}");
    }
}

