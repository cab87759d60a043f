use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::game_engine::{
    error::GameError,
    models::{GameConfig, Secret},
};

/// Draw `length` independent, uniformly distributed digits from
/// `min_number..=max_number`.
pub fn generate<R: Rng>(
    rng: &mut R,
    min_number: u8,
    max_number: u8,
    length: usize,
) -> Result<Secret, GameError> {
    if min_number > max_number {
        return Err(GameError::InvalidConfiguration {
            reason: format!("min_number {min_number} is greater than max_number {max_number}"),
        });
    }
    if length == 0 {
        return Err(GameError::InvalidConfiguration {
            reason: "secret length must be at least 1".to_string(),
        });
    }
    let digits = (0..length).map(|_| rng.gen_range(min_number..=max_number)).collect();
    Ok(Secret::new(digits))
}

/// Supplies one secret per round. Sessions take any source so tests can
/// script the secrets they play against.
pub trait SecretSource {
    fn next_secret(&mut self, config: &GameConfig) -> Result<Secret, GameError>;
}

/// Random secrets from a [`StdRng`], reproducible when seeded.
pub struct RandomSecrets {
    rng: StdRng,
}

impl RandomSecrets {
    /// `Some(seed)` replays the same secret sequence every time; `None` draws from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        RandomSecrets { rng }
    }
}

impl SecretSource for RandomSecrets {
    fn next_secret(&mut self, config: &GameConfig) -> Result<Secret, GameError> {
        let secret = generate(
            &mut self.rng,
            config.min_number,
            config.max_number,
            config.solution_length,
        )?;
        debug!("Generated answer: {secret}");
        Ok(secret)
    }
}

/// Plays a fixed list of secrets in order, cycling when the list runs out.
pub struct ScriptedSecrets {
    secrets: Vec<Secret>,
    cursor: usize,
}

impl ScriptedSecrets {
    pub fn new(secrets: Vec<Secret>) -> Self {
        ScriptedSecrets { secrets, cursor: 0 }
    }
}

impl SecretSource for ScriptedSecrets {
    fn next_secret(&mut self, config: &GameConfig) -> Result<Secret, GameError> {
        if self.secrets.is_empty() {
            return Err(GameError::InvalidConfiguration {
                reason: "no scripted secrets supplied".to_string(),
            });
        }
        let secret = self.secrets[self.cursor % self.secrets.len()].clone();
        self.cursor += 1;
        if secret.len() != config.solution_length {
            return Err(GameError::InvalidConfiguration {
                reason: format!(
                    "scripted secret {secret} does not have {} digits",
                    config.solution_length
                ),
            });
        }
        Ok(secret)
    }
}
