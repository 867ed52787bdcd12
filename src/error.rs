//! Error type shared by the library modules.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("failed to (de)serialize column: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("difficulty level {0} is outside 1..=3")]
    InvalidDifficulty(i64),

    #[error("unknown option id {0:?}")]
    InvalidOptionId(String),

    #[error("invalid generation plan: {0}")]
    InvalidPlan(String),
}

pub type Result<T> = std::result::Result<T, SeedError>;
