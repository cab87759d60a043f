//! Guess scoring.
//!
//! [`evaluate`] reproduces the frequency-table algorithm exactly: the table is
//! built once per round and never decremented, so a repeated guess digit can
//! collect more `-` than the secret holds copies of it. [`evaluate_canonical`]
//! is the standard multiset accounting, selected via [`ScoringMode::Canonical`].

use log::debug;

use crate::game_engine::models::{
    DigitFrequency, Feedback, GameConfig, Guess, ScoringMode, Secret,
};

/// Score `guess` with the configured mode.
pub fn score(
    config: &GameConfig,
    secret: &Secret,
    frequency: &DigitFrequency,
    guess: &Guess,
) -> Feedback {
    match config.scoring {
        ScoringMode::Literal   => evaluate(secret, frequency, guess),
        ScoringMode::Canonical => evaluate_canonical(secret, frequency, guess),
    }
}

/// Literal scoring.
///
/// Expects `guess.len() == secret.len()`; extra positions on either side are
/// not compared. Guess digits missing from the frequency table contribute
/// nothing.
pub fn evaluate(secret: &Secret, frequency: &DigitFrequency, guess: &Guess) -> Feedback {
    let mut feedback = Feedback::default();
    for (i, (&g, &s)) in guess.digits().iter().zip(secret.digits()).enumerate() {
        match frequency.get(g) {
            None => debug!("Guessed number out of range: digit {i} = {g}"),
            Some(0) => {}
            Some(_) => {
                if g == s {
                    feedback.exact += 1;
                } else {
                    feedback.present += 1;
                }
                debug!("Digit {i} was found in the array");
            }
        }
    }
    feedback
}

/// Canonical Mastermind scoring: each secret digit backs at most one credit.
pub fn evaluate_canonical(
    secret: &Secret,
    frequency: &DigitFrequency,
    guess: &Guess,
) -> Feedback {
    let exact = guess
        .digits()
        .iter()
        .zip(secret.digits())
        .filter(|&(&g, &s)| g == s && frequency.get(g).is_some())
        .count();

    let matched: usize = frequency
        .iter()
        .map(|(digit, count)| {
            let in_guess = guess.digits().iter().filter(|&&g| g == digit).count();
            in_guess.min(count as usize)
        })
        .sum();

    Feedback::new(exact, matched.saturating_sub(exact))
}
