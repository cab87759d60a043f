//! Error types for the guessing game.

/// Game errors.
///
/// A guess digit outside `[min_number, max_number]` is deliberately not an
/// error: it is scored as "not in the secret".
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Wrong length or a non-digit character. The player is re-prompted.
    #[error("malformed guess `{input}`: {reason}")]
    MalformedGuess { input: String, reason: String },

    /// Static parameters no round can be played with.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A guess was submitted after the round reached a terminal state.
    #[error("round is already over")]
    RoundOver,

    /// Console I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GameError {
    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        GameError::MalformedGuess {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        GameError::InvalidConfiguration { reason: reason.into() }
    }

    /// Recoverable errors are reported to the player without ending the round.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::MalformedGuess { .. })
    }
}
