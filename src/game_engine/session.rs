//! Console session driver: one banner, then rounds until the input closes.

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::{
    game_engine::{
        console,
        error::GameError,
        models::{GameConfig, RoundStatus},
        round::RoundState,
        secret::SecretSource,
    },
    report,
};

pub struct Session<S, R, W> {
    config: GameConfig,
    secrets: S,
    input: R,
    output: W,
    rounds_played: u64,
}

impl<S: SecretSource, R: BufRead, W: Write> Session<S, R, W> {
    /// Fails with `InvalidConfiguration` before anything is printed.
    pub fn new(config: GameConfig, secrets: S, input: R, output: W) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Session { config, secrets, input, output, rounds_played: 0 })
    }

    /// Print the banner and play rounds back to back.
    ///
    /// There is no in-game way to quit; the loop only ends when the input
    /// reaches end-of-file or an I/O error occurs.
    pub fn run(&mut self) -> Result<(), GameError> {
        console::say(&mut self.output, &console::banner(&self.config))?;
        while self.play_round()?.is_some() {}
        info!("Input closed after {} completed rounds", self.rounds_played);
        Ok(())
    }

    /// Play one round to a terminal state.
    ///
    /// Returns `None` when the input closes before the round is decided.
    pub fn play_round(&mut self) -> Result<Option<RoundState>, GameError> {
        console::say(&mut self.output, console::new_game())?;
        let secret = self.secrets.next_secret(&self.config)?;
        let mut round = RoundState::new(self.config.clone(), secret)?;

        while round.status() == RoundStatus::InProgress {
            let prompt = console::prompt(round.guesses_used() + 1, &self.config);
            console::say(&mut self.output, &prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match round.submit(&line) {
                Ok(feedback) => {
                    if !round.won() {
                        console::say(&mut self.output, &console::hint(&feedback))?;
                    }
                }
                Err(err) if err.is_recoverable() => {
                    debug!("Rejected guess: {err}");
                    console::say(&mut self.output, console::REJECTION)?;
                }
                Err(err) => return Err(err),
            }
        }

        let closing = match round.status() {
            RoundStatus::Won => console::win(round.secret()),
            _ => console::loss(round.secret()),
        };
        console::say(&mut self.output, &closing)?;

        self.rounds_played += 1;
        debug!("Round report: {}", report::round_report(&round));
        Ok(Some(round))
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Invalid UTF-8 is decoded lossily; the replacement characters then fail
    /// guess parsing like any other non-digit.
    fn read_line(&mut self) -> Result<Option<String>, GameError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}
