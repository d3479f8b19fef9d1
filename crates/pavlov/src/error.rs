//! Errors raised at the boundaries (config parsing, checked construction)

use thiserror::Error;

use crate::game::MAX_ROUNDS;

#[derive(Debug, Error)]
pub enum GameError {
    /// Round count outside `1..=MAX_ROUNDS`.
    #[error("round count {rounds} outside 1..={max}", max = MAX_ROUNDS)]
    InvalidRounds { rounds: u32 },

    #[error("unknown strategy `{name}`")]
    UnknownStrategy { name: String },

    /// A deeper decision table was given without the shallower ones it builds on.
    #[error("strategy table missing `{missing}`")]
    IncompleteStrategy { missing: &'static str },

    #[error("invalid payoffs `{input}`: expected four comma-separated integers")]
    InvalidPayoffs { input: String },

    #[error("invalid match config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read match config: {0}")]
    Io(#[from] std::io::Error),
}
