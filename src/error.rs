use thiserror::Error;

/// Errors raised by the campaign engine and its presentation boundary.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Conversation pool exhausted: requested {requested}, only {available} left")]
    InsufficientPool { requested: usize, available: usize },
    #[error("Invalid campaign: {0}")]
    InvalidCampaign(String),
    #[error("Day {0} is not part of this campaign")]
    UnknownDay(u32),
    #[error("Interrupted by the player")]
    Interrupted,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
