//! Interactive terminal game
//!
//! Plays the role of the serving layer: keeps the session state between
//! submissions and decides what to show next from each check result.

use crate::game::Game;
use crate::output::{write_check_result, write_puzzle, write_success};
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};

/// Run the interactive game until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or if the game cannot start a session.
pub fn run_play<B, W, R>(game: &Game<'_>, input: &mut B, out: &mut W, rng: &mut R) -> Result<()>
where
    B: BufRead,
    W: Write,
    R: Rng + ?Sized,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Vocabulary Jumble                        ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Find the vocabulary words hidden in the jumbled letters.")?;
    writeln!(out, "Commands: ':words' to list found words, ':new' for a new puzzle, ':quit' to exit\n")?;

    let mut state = game.start_session(rng)?;
    write_puzzle(out, &state)?;

    loop {
        let Some(line) = get_user_input(input, out, "Word")? else {
            return Ok(());
        };

        // Commands carry a ':' prefix so every vocabulary word can be submitted
        match line.to_lowercase().as_str() {
            "" => {}
            ":quit" | ":q" | ":exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            ":new" | ":n" => {
                state = game.start_session(rng)?;
                writeln!(out, "\n🔄 New puzzle!\n")?;
                write_puzzle(out, &state)?;
            }
            ":words" | ":w" => write_puzzle(out, &state)?,
            _ => {
                let result = game.check(&mut state, &line)?;
                write_check_result(out, &line, &result, &state)?;

                if result.complete {
                    write_success(out, &state)?;
                    if !play_again(input, out)? {
                        writeln!(out, "\n👋 Thanks for playing!\n")?;
                        return Ok(());
                    }
                    state = game.start_session(rng)?;
                    writeln!(out, "\n🔄 New puzzle!\n")?;
                    write_puzzle(out, &state)?;
                }
            }
        }
    }
}

fn play_again<B: BufRead, W: Write>(input: &mut B, out: &mut W) -> Result<bool> {
    let answer = get_user_input(input, out, "Play again? (yes/no)")?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<B: BufRead, W: Write>(
    input: &mut B,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
