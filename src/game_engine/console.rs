//! Player-facing text. Everything the session prints comes from here.

use std::io::{self, Write};

use crate::game_engine::models::{Feedback, GameConfig, Secret};

pub const REJECTION: &str = "This is not a valid guess. Please try again.";

/// Instructions printed once when the session starts.
pub fn banner(config: &GameConfig) -> String {
    format!(
        "Welcome to Simple Mastermind!\n\
         You will have {guesses} chances to guess the {len} digit secret answer\n\
         Each digit will be a number between and including {min} through {max}\n\
         For every correct digit in the correct place in your guess, your hint will include a plus (+) symbol\n\
         For every correct digit in the incorrect place in your guess, your hint will include a minus (-) symbol\n\
         You must guess a {len} digit number",
        guesses = config.guesses_amount,
        len = config.solution_length,
        min = config.min_number,
        max = config.max_number,
    )
}

/// Preceded by two blank lines so rounds stand apart from what came before.
pub fn new_game() -> &'static str {
    "\n\nStarting new game"
}

pub fn prompt(n: u32, config: &GameConfig) -> String {
    format!("Guess {n}/{}:", config.guesses_amount)
}

/// Followed by a blank line.
pub fn hint(feedback: &Feedback) -> String {
    format!("Hint: {}\n", feedback.hint())
}

pub fn win(secret: &Secret) -> String {
    format!("Congratuations! You guessed the correct number: {secret}")
}

pub fn loss(secret: &Secret) -> String {
    format!("No more guesses! The secret answer you were looking for was: {secret}")
}

pub fn say<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{line}")?;
    out.flush()
}
