//! Core game engine: secret generation, scoring, and the round/session loop.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: config, secret, guess, frequency table, feedback |
//! | `error`     | `GameError` taxonomy |
//! | `secret`    | Random digit generation and injectable secret sources |
//! | `evaluator` | Literal and canonical scoring of a guess against the secret |
//! | `round`     | `RoundState` state machine (`InProgress` → `Won` / `Exhausted`) |
//! | `console`   | Every line of player-facing text |
//! | `session`   | Banner + endless rounds over any `BufRead` / `Write` pair |

pub mod console;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod round;
pub mod secret;
pub mod session;

pub use error::GameError;
pub use evaluator::{evaluate, evaluate_canonical, score};
pub use models::{
    DigitFrequency, Feedback, GameConfig, Guess, GuessRecord, RoundStatus, ScoringMode, Secret,
};
pub use round::RoundState;
pub use secret::{generate, RandomSecrets, ScriptedSecrets, SecretSource};
pub use session::Session;
