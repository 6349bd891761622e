//! Display functions for the interactive game

use super::formatters::{progress_line, spaced_jumble};
use crate::game::{CheckResult, SessionState};
use colored::Colorize;
use std::io::{self, Write};

const PROGRESS_WIDTH: usize = 20;

/// Print the jumble and how many words are still to be found
///
/// # Errors
/// Propagates write failures.
pub fn write_puzzle<W: Write>(out: &mut W, state: &SessionState) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Jumble:   {}",
        spaced_jumble(&state.jumble).bright_yellow().bold()
    )?;
    writeln!(
        out,
        "Progress: {}",
        progress_line(state.matches.len(), state.target_count, PROGRESS_WIDTH)
    )?;
    if !state.matches.is_empty() {
        writeln!(out, "Found:    {}", state.matches.join(", "))?;
    }
    writeln!(out, "{}", "─".repeat(60).cyan())
}

/// Print the verdict for one submitted word
///
/// # Errors
/// Propagates write failures.
pub fn write_check_result<W: Write>(
    out: &mut W,
    word: &str,
    result: &CheckResult,
    state: &SessionState,
) -> io::Result<()> {
    let word = word.trim().to_uppercase();

    if result.oldmatch {
        writeln!(out, "{} {word} was already found", "•".yellow())?;
    } else if result.valid {
        writeln!(
            out,
            "{} {word} is a match! ({} to go)",
            "✓".green().bold(),
            state.remaining()
        )?;
    } else {
        writeln!(
            out,
            "{} {word} is not a vocabulary word in the jumble",
            "✗".red()
        )?;
    }
    Ok(())
}

/// Celebrate a finished puzzle
///
/// # Errors
/// Propagates write failures.
pub fn write_success<W: Write>(out: &mut W, state: &SessionState) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "          🎉  J U M B L E   S O L V E D !  🎉          "
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;

    writeln!(out, "\n  Words found:")?;
    for (i, word) in state.matches.iter().enumerate() {
        writeln!(
            out,
            "    {}. {}",
            (i + 1).to_string().bright_black(),
            word.to_uppercase().bright_white().bold()
        )?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Jumble;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn puzzle_shows_jumble_and_progress() {
        let mut state = SessionState::new(2, Jumble::new("tac"));
        state.matches.push("cat".to_string());

        let text = render(|out| write_puzzle(out, &state));
        assert!(text.contains("T A C"));
        assert!(text.contains("1/2"));
        assert!(text.contains("cat"));
    }

    #[test]
    fn check_result_messages() {
        let state = SessionState::new(2, Jumble::new("tac"));
        let mut result = CheckResult {
            valid: true,
            oldmatch: false,
            complete: false,
        };
        assert!(render(|out| write_check_result(out, "cat", &result, &state)).contains("match"));

        result.oldmatch = true;
        assert!(render(|out| write_check_result(out, "cat", &result, &state)).contains("already"));

        result = CheckResult {
            valid: false,
            oldmatch: false,
            complete: false,
        };
        assert!(render(|out| write_check_result(out, "dog", &result, &state)).contains("not"));
    }

    #[test]
    fn success_lists_words() {
        let mut state = SessionState::new(1, Jumble::new("xo"));
        state.matches.push("ox".to_string());

        let text = render(|out| write_success(out, &state));
        assert!(text.contains("OX"));
    }
}
