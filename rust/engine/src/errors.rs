use thiserror::Error;

/// Rejections reported to the player. The display text is what the
/// presenter shows, so keep it short.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Register first.")]
    NoPlayer,
    #[error("Invalid bet: {amount}.")]
    InvalidBet { amount: i64 },
    #[error("Invalid number: {number} (pick 0-36).")]
    InvalidNumber { number: i64 },
    #[error("Invalid amount: {amount}.")]
    InvalidAmount { amount: i64 },
    #[error("A round is already in progress.")]
    RoundInFlight,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}
