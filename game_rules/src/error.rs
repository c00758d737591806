//! Error types for estate record operations.

use crate::entities::CharacterId;

/// Result type for estate record operations.
pub type Result<T> = std::result::Result<T, GameRulesError>;

#[derive(Debug, thiserror::Error)]
pub enum GameRulesError {
    /// A log referenced a character that is not on the estate roster.
    #[error("Unknown character: {0}")]
    UnknownCharacter(CharacterId),

    /// Snapshot could not be read or written.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
