//! Terminal output formatting
//!
//! Display utilities for the interactive game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{write_check_result, write_puzzle, write_success};
