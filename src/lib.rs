//! # mastermind_digits
//!
//! A console Mastermind variant played with digits.
//!
//! Each round draws a secret of `solution_length` digits from
//! `min_number..=max_number`. The player gets `guesses_amount` tries; every
//! accepted guess earns a hint with one `+` per digit in the right place and
//! one `-` per digit found elsewhere in the secret.
//!
//! ## How it works
//!
//! 1. Build a [`GameConfig`] (the default is 4 digits from 1–6, 10 guesses).
//! 2. Start a [`RoundState`] with a secret from any [`SecretSource`]:
//!    [`RandomSecrets`] for play, [`ScriptedSecrets`] for tests.
//! 3. Feed raw input lines to [`RoundState::submit`]. Malformed lines are
//!    rejected without using a turn; valid ones return a [`Feedback`].
//! 4. Or hand stdin/stdout to a [`Session`], which prints the banner and plays
//!    rounds until its input closes.
//!
//! ## Scoring
//!
//! The default [`ScoringMode::Literal`] checks presence against a per-round
//! frequency table that is never decremented, so `1111` against `1234` scores
//! `+---`. [`ScoringMode::Canonical`] credits each secret digit at most once.
//! In both modes a guess digit outside the configured range simply scores
//! nothing.
//!
//! ## Quick start
//!
//! ```rust
//! use mastermind_digits::{GameConfig, RoundState, RoundStatus, Secret};
//!
//! let mut round = RoundState::new(GameConfig::default(), Secret::new(vec![2, 2, 4, 4])).unwrap();
//! assert_eq!(round.submit("2222").unwrap().hint(), "++--");
//! assert!(round.submit("22").is_err()); // no turn used
//! round.submit("2244").unwrap();
//! assert_eq!(round.status(), RoundStatus::Won);
//! assert_eq!(round.guesses_used(), 2);
//! ```

pub mod game_engine;
pub mod report;

pub use game_engine::{
    evaluate, evaluate_canonical, generate, DigitFrequency, Feedback, GameConfig, GameError,
    Guess, GuessRecord, RandomSecrets, RoundState, RoundStatus, ScoringMode, ScriptedSecrets,
    Secret, SecretSource, Session,
};
pub use report::round_report;
