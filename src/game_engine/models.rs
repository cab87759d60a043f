use std::fmt;
use serde::{Deserialize, Serialize};

use crate::game_engine::error::GameError;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// How a guess is scored against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoringMode {
    /// Presence is looked up in a frequency table that is never decremented,
    /// so a digit that occurs once in the secret can earn several `-`.
    #[default]
    Literal,
    /// Standard Mastermind accounting: each secret digit is credited at most once.
    Canonical,
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Literal   => write!(f, "literal"),
            ScoringMode::Canonical => write!(f, "canonical"),
        }
    }
}

/// Immutable game parameters, handed to every round at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub min_number: u8,
    pub max_number: u8,
    pub solution_length: usize,
    pub guesses_amount: u32,
    #[serde(default)]
    pub scoring: ScoringMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            min_number: 1,
            max_number: 6,
            solution_length: 4,
            guesses_amount: 10,
            scoring: ScoringMode::Literal,
        }
    }
}

impl GameConfig {
    /// Reject parameter sets no round could be played with.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.min_number > self.max_number {
            return Err(GameError::invalid_config(format!(
                "min_number {} is greater than max_number {}",
                self.min_number, self.max_number
            )));
        }
        if self.max_number > 9 {
            return Err(GameError::invalid_config(format!(
                "max_number {} does not fit in a single digit",
                self.max_number
            )));
        }
        if self.solution_length == 0 {
            return Err(GameError::invalid_config("solution_length must be at least 1"));
        }
        if self.guesses_amount == 0 {
            return Err(GameError::invalid_config("guesses_amount must be at least 1"));
        }
        Ok(())
    }

    /// Number of distinct digit values a secret can contain.
    ///
    /// An inverted range yields a single-slot table instead of underflowing;
    /// `validate` is what rejects such configs.
    pub fn alphabet_size(&self) -> usize {
        usize::from(self.max_number.saturating_sub(self.min_number)) + 1
    }
}

// ---------------------------------------------------------------------------
// Digit sequences
// ---------------------------------------------------------------------------

/// The target sequence for one round. Never mutated after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret(Vec<u8>);

impl Secret {
    pub fn new(digits: Vec<u8>) -> Self {
        Secret(digits)
    }

    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

/// A syntactically valid player guess.
///
/// Only length and "every character is a decimal digit" are checked here.
/// Digits outside the configured range are accepted and later scored as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess(Vec<u8>);

impl Guess {
    /// Parse one line of player input.
    pub fn parse(input: &str, solution_length: usize) -> Result<Self, GameError> {
        if input.chars().count() != solution_length {
            return Err(GameError::malformed(
                input,
                format!("expected {solution_length} digits"),
            ));
        }
        let digits = input
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| GameError::malformed(input, "contains a non-digit character"))?;
        Ok(Guess(digits))
    }

    pub fn from_digits(digits: Vec<u8>) -> Self {
        Guess(digits)
    }

    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

fn write_digits(f: &mut fmt::Formatter<'_>, digits: &[u8]) -> fmt::Result {
    for d in digits {
        write!(f, "{d}")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Occurrence count of each digit value in a secret, indexed by `digit - min_number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitFrequency {
    min_number: u8,
    counts: Vec<u32>,
}

impl DigitFrequency {
    /// Build the table once per round.
    ///
    /// Secret digits outside the configured range cannot come from the
    /// generator; if one is injected anyway it is left out of the table.
    pub fn from_secret(secret: &Secret, config: &GameConfig) -> Self {
        let mut counts = vec![0u32; config.alphabet_size()];
        for &digit in secret.digits() {
            let slot = Self::index(config.min_number, digit).and_then(|i| counts.get_mut(i));
            if let Some(slot) = slot {
                *slot += 1;
            }
        }
        DigitFrequency { min_number: config.min_number, counts }
    }

    /// Occurrences of `digit`, or `None` when the digit lies outside the table.
    pub fn get(&self, digit: u8) -> Option<u32> {
        Self::index(self.min_number, digit).and_then(|i| self.counts.get(i).copied())
    }

    /// Occurrences of `digit`; out-of-range digits count as absent.
    pub fn count(&self, digit: u8) -> u32 {
        self.get(digit).unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// `(digit, count)` for every value in the table, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| (self.min_number + i as u8, count))
    }

    fn index(min_number: u8, digit: u8) -> Option<usize> {
        digit.checked_sub(min_number).map(usize::from)
    }
}

/// Result of scoring one guess: `+` for exact, `-` for present-but-misplaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Feedback {
    pub exact: usize,
    pub present: usize,
}

impl Feedback {
    pub fn new(exact: usize, present: usize) -> Self {
        Feedback { exact, present }
    }

    /// True when every position matched.
    pub fn is_win(&self, solution_length: usize) -> bool {
        self.exact == solution_length
    }

    /// Pluses always precede minuses, e.g. `++-`.
    pub fn hint(&self) -> String {
        format!("{}{}", "+".repeat(self.exact), "-".repeat(self.present))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hint())
    }
}

// ---------------------------------------------------------------------------
// Round bookkeeping
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    InProgress,
    Won,
    Exhausted,
}

impl RoundStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundStatus::InProgress => write!(f, "in progress"),
            RoundStatus::Won        => write!(f, "won"),
            RoundStatus::Exhausted  => write!(f, "exhausted"),
        }
    }
}

/// One accepted guess and the feedback it earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: Guess,
    pub feedback: Feedback,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_classic_constants() {
        let c = GameConfig::default();
        assert_eq!((c.min_number, c.max_number), (1, 6));
        assert_eq!(c.solution_length, 4);
        assert_eq!(c.guesses_amount, 10);
        assert_eq!(c.scoring, ScoringMode::Literal);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn inverted_range_is_invalid() {
        let c = GameConfig { min_number: 6, max_number: 1, ..GameConfig::default() };
        assert!(matches!(c.validate(), Err(GameError::InvalidConfiguration { .. })));
    }

    #[test]
    fn zero_length_and_zero_guesses_are_invalid() {
        let c = GameConfig { solution_length: 0, ..GameConfig::default() };
        assert!(matches!(c.validate(), Err(GameError::InvalidConfiguration { .. })));
        let c = GameConfig { guesses_amount: 0, ..GameConfig::default() };
        assert!(matches!(c.validate(), Err(GameError::InvalidConfiguration { .. })));
    }

    #[test]
    fn config_deserializes_without_scoring_field() {
        let c: GameConfig = serde_json::from_str(
            r#"{"min_number":0,"max_number":9,"solution_length":5,"guesses_amount":12}"#,
        )
        .unwrap();
        assert_eq!(c.scoring, ScoringMode::Literal);
        assert_eq!(c.alphabet_size(), 10);
    }

    #[test]
    fn guess_parse_rejects_wrong_length_and_non_digits() {
        assert!(Guess::parse("123", 4).is_err());
        assert!(Guess::parse("12345", 4).is_err());
        assert!(Guess::parse("12a4", 4).is_err());
        assert!(Guess::parse("-123", 4).is_err());
        assert!(Guess::parse("", 4).is_err());
    }

    #[test]
    fn guess_parse_accepts_out_of_range_digits() {
        let g = Guess::parse("0789", 4).unwrap();
        assert_eq!(g.digits(), &[0, 7, 8, 9]);
        assert_eq!(g.to_string(), "0789");
    }

    #[test]
    fn frequency_sums_to_secret_length() {
        let config = GameConfig::default();
        let secret = Secret::new(vec![2, 2, 4, 6]);
        let freq = DigitFrequency::from_secret(&secret, &config);
        assert_eq!(freq.total(), 4);
        assert_eq!(freq.count(2), 2);
        assert_eq!(freq.count(4), 1);
        assert_eq!(freq.count(1), 0);
    }

    #[test]
    fn frequency_lookup_outside_table_is_absent() {
        let config = GameConfig::default();
        let freq = DigitFrequency::from_secret(&Secret::new(vec![1, 1, 1, 1]), &config);
        assert_eq!(freq.get(0), None);
        assert_eq!(freq.get(7), None);
        assert_eq!(freq.count(9), 0);
    }

    #[test]
    fn frequency_from_inverted_config_does_not_panic() {
        let config = GameConfig { min_number: 6, max_number: 1, ..GameConfig::default() };
        assert_eq!(config.alphabet_size(), 1);
        let freq = DigitFrequency::from_secret(&Secret::new(vec![1, 2, 3, 4]), &config);
        assert_eq!(freq.total(), 0);
        assert_eq!(freq.get(1), None);
        assert_eq!(freq.count(6), 0);
    }

    #[test]
    fn hint_puts_plus_before_minus() {
        assert_eq!(Feedback::new(2, 1).hint(), "++-");
        assert_eq!(Feedback::new(0, 0).hint(), "");
    }
}
