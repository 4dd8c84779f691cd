//! Error type for the command-line front end.
//!
//! Engine rejections are kept as [`GameError`] so the message the player sees
//! matches what the shell shows; everything else is flattened to text.

use nike_engine::errors::GameError;
use std::fmt;

use crate::config::ConfigError;

#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, data directory, round log)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// A bet or adjustment the engine turned down
    Engine(GameError),

    /// Input ended abruptly (e.g. Ctrl+C while the shell was reading)
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "{}", e),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_display_the_player_message() {
        let e = CliError::from(GameError::InvalidBet { amount: 0 });
        assert_eq!(e.to_string(), "Invalid bet: 0.");
    }

    #[test]
    fn config_errors_keep_their_text() {
        let e = CliError::from(ConfigError::Invalid("Invalid seed".into()));
        assert_eq!(e.to_string(), "Configuration error: Invalid seed");
    }
}
