//! Pure Strategies for the Iterated Prisoner's Dilemma
//!
//! Deterministic strategies with up to three rounds of memory, encoded as
//! bit tables, and a match simulator that plays two of them against each
//! other with optional forced mistakes.
//! This crate is compiled to:
//! - Native (library and `pavlov` CLI)
//! - WASM (for frontend match replay)

mod config;
mod error;
mod game;
mod history;
mod noise;
mod outcome;
mod strategy;
mod window;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{MatchConfig, StrategySpec, StrategyTable};
pub use error::GameError;
pub use game::{apply_mistake, simulate_match, MatchResult, PairGame, Payoffs, RoundResult, MAX_ROUNDS};
pub use history::{render_history, History, ROUND_SEPARATOR};
pub use noise::{mistake_mask, NoiseConfig, SeededRng};
pub use outcome::{Move, Outcome};
pub use strategy::{
    NamedStrategy, PureStrategy, StrategyInfo, ALWAYS_COOPERATE, ALWAYS_DEFECT, MOVES_PAVLOV,
    MOVES_TFT, MOVES_TFTWF, PAVLOV, SUSPICIOUS_TIT_FOR_TAT, TIT_FOR_TAT,
    TIT_FOR_TAT_WITH_FORGIVENESS,
};
pub use window::{OutcomeWindow, WINDOW_DEPTH};

/// Standard Prisoner's Dilemma payoffs, indexed by outcome: D, D/C, C/D, C.
pub const DEFAULT_PAYOFFS: Payoffs = Payoffs::DEFAULT;
