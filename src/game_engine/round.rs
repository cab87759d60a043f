//! Per-round state machine.
//!
//! `InProgress` → `Won` when a guess matches every position, `InProgress` →
//! `Exhausted` when the last allowed guess misses. Malformed input is rejected
//! before it touches the state, so it never costs a turn.

use log::{debug, info};

use crate::game_engine::{
    error::GameError,
    evaluator,
    models::{DigitFrequency, Feedback, GameConfig, Guess, GuessRecord, RoundStatus, Secret},
};

/// Everything one round needs, created at round start and dropped at its end.
#[derive(Debug, Clone)]
pub struct RoundState {
    config: GameConfig,
    secret: Secret,
    frequency: DigitFrequency,
    guesses_used: u32,
    status: RoundStatus,
    history: Vec<GuessRecord>,
}

impl RoundState {
    pub fn new(config: GameConfig, secret: Secret) -> Result<Self, GameError> {
        config.validate()?;
        if secret.len() != config.solution_length {
            return Err(GameError::InvalidConfiguration {
                reason: format!(
                    "secret {secret} has {} digits, expected {}",
                    secret.len(),
                    config.solution_length
                ),
            });
        }
        let frequency = DigitFrequency::from_secret(&secret, &config);
        info!(
            "Round started ({} digits, {} guesses)",
            config.solution_length, config.guesses_amount
        );
        Ok(RoundState {
            config,
            secret,
            frequency,
            guesses_used: 0,
            status: RoundStatus::InProgress,
            history: Vec::new(),
        })
    }

    /// Parse and score one line of input.
    ///
    /// `MalformedGuess` leaves the round untouched. Once the round is terminal
    /// every call fails with `RoundOver`.
    pub fn submit(&mut self, input: &str) -> Result<Feedback, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::RoundOver);
        }
        let guess = Guess::parse(input, self.config.solution_length)?;
        Ok(self.apply(guess))
    }

    fn apply(&mut self, guess: Guess) -> Feedback {
        let feedback = evaluator::score(&self.config, &self.secret, &self.frequency, &guess);
        self.guesses_used += 1;
        debug!("Guess {} `{guess}` scored `{feedback}`", self.guesses_used);

        if feedback.is_win(self.config.solution_length) {
            self.status = RoundStatus::Won;
        } else if self.guesses_used == self.config.guesses_amount {
            self.status = RoundStatus::Exhausted;
        }
        if self.status.is_terminal() {
            info!("Round {} after {} guesses", self.status, self.guesses_used);
        }

        self.history.push(GuessRecord { guess, feedback });
        feedback
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    pub fn frequency(&self) -> &DigitFrequency {
        &self.frequency
    }

    pub fn guesses_used(&self) -> u32 {
        self.guesses_used
    }

    pub fn guess_limit(&self) -> u32 {
        self.config.guesses_amount
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn won(&self) -> bool {
        self.status == RoundStatus::Won
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(secret: &[u8]) -> RoundState {
        RoundState::new(GameConfig::default(), Secret::new(secret.to_vec())).unwrap()
    }

    #[test]
    fn starts_in_progress_with_no_guesses() {
        let r = round(&[1, 2, 3, 4]);
        assert_eq!(r.status(), RoundStatus::InProgress);
        assert_eq!(r.guesses_used(), 0);
        assert_eq!(r.guess_limit(), 10);
        assert_eq!(r.frequency().total(), 4);
    }

    #[test]
    fn exact_guess_wins() {
        let mut r = round(&[1, 2, 3, 4]);
        let fb = r.submit("1234").unwrap();
        assert_eq!(fb, Feedback::new(4, 0));
        assert!(r.won());
        assert_eq!(r.guesses_used(), 1);
    }

    #[test]
    fn malformed_guesses_do_not_consume_turns() {
        let mut r = round(&[1, 2, 3, 4]);
        for bad in ["", "123", "12345", "abcd", "12 4", "+123"] {
            let err = r.submit(bad).unwrap_err();
            assert!(err.is_recoverable(), "{bad:?} -> {err}");
        }
        for _ in 0..r.guess_limit() {
            assert!(r.submit("x").is_err());
        }
        assert_eq!(r.status(), RoundStatus::InProgress);
        assert_eq!(r.guesses_used(), 0);
        assert!(r.history().is_empty());
    }

    #[test]
    fn last_miss_exhausts_the_round() {
        let mut r = round(&[1, 2, 3, 4]);
        for n in 1..=10 {
            r.submit("5555").unwrap();
            let expected = if n < 10 { RoundStatus::InProgress } else { RoundStatus::Exhausted };
            assert_eq!(r.status(), expected, "after guess {n}");
        }
        assert_eq!(r.guesses_used(), 10);
    }

    #[test]
    fn win_on_final_guess_is_won_not_exhausted() {
        let mut r = round(&[1, 2, 3, 4]);
        for _ in 0..9 {
            r.submit("6666").unwrap();
        }
        r.submit("1234").unwrap();
        assert_eq!(r.status(), RoundStatus::Won);
    }

    #[test]
    fn terminal_round_rejects_further_guesses() {
        let mut r = round(&[1, 2, 3, 4]);
        r.submit("1234").unwrap();
        assert!(matches!(r.submit("1234"), Err(GameError::RoundOver)));
        assert_eq!(r.guesses_used(), 1);
    }

    #[test]
    fn out_of_range_guess_consumes_a_turn() {
        let mut r = round(&[1, 2, 3, 4]);
        assert_eq!(r.submit("0000").unwrap(), Feedback::new(0, 0));
        assert_eq!(r.guesses_used(), 1);
    }

    #[test]
    fn secret_of_wrong_length_is_rejected() {
        let err = RoundState::new(GameConfig::default(), Secret::new(vec![1, 2])).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration { .. }));
    }

    #[test]
    fn history_records_accepted_guesses_in_order() {
        let mut r = round(&[2, 2, 4, 4]);
        r.submit("1111").unwrap();
        r.submit("bad").unwrap_err();
        r.submit("2222").unwrap();
        let got: Vec<String> = r.history().iter().map(|h| h.guess.to_string()).collect();
        assert_eq!(got, ["1111", "2222"]);
    }
}
