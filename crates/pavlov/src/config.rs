//! JSON match configuration
//!
//! A config names both strategies (by catalogue id or as decision tables),
//! the payoffs, explicit mistake masks, optional seeded noise, and the
//! round count. [`MatchConfig::to_game`] turns it into a checked
//! [`PairGame`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::game::{PairGame, Payoffs};
use crate::noise::NoiseConfig;
use crate::strategy::{NamedStrategy, PureStrategy};

/// Decision tables as written in a config; missing deeper tables are expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrategyTable {
    pub move1: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move2: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move3: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "moveN")]
    pub move_n: Option<u64>,
}

impl StrategyTable {
    /// Expand through the deepest table given.
    pub fn expand(&self) -> Result<PureStrategy, GameError> {
        match (self.move2, self.move3, self.move_n) {
            (None, None, None) => Ok(PureStrategy::with_memory0(self.move1)),
            (Some(m2), None, None) => Ok(PureStrategy::with_memory1(self.move1, m2)),
            (Some(m2), Some(m3), None) => Ok(PureStrategy::with_memory2(self.move1, m2, m3)),
            (Some(m2), Some(m3), Some(mn)) => Ok(PureStrategy::with_memory3(self.move1, m2, m3, mn)),
            (None, _, _) => Err(GameError::IncompleteStrategy { missing: "move2" }),
            (Some(_), None, Some(_)) => Err(GameError::IncompleteStrategy { missing: "move3" }),
        }
    }
}

impl From<PureStrategy> for StrategyTable {
    fn from(strategy: PureStrategy) -> Self {
        Self {
            move1: strategy.move1,
            move2: Some(strategy.move2),
            move3: Some(strategy.move3),
            move_n: Some(strategy.move_n),
        }
    }
}

/// A strategy reference: a catalogue id such as `"tit-for-tat"`, or tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StrategySpec {
    Named(NamedStrategy),
    Table(StrategyTable),
}

impl StrategySpec {
    pub fn resolve(&self) -> Result<PureStrategy, GameError> {
        match self {
            StrategySpec::Named(named) => Ok(named.strategy()),
            StrategySpec::Table(table) => table.expand(),
        }
    }
}

impl From<NamedStrategy> for StrategySpec {
    fn from(named: NamedStrategy) -> Self {
        StrategySpec::Named(named)
    }
}

fn default_rounds() -> u8 {
    10
}

/// Everything needed to play one match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub a: StrategySpec,
    pub b: StrategySpec,
    #[serde(default)]
    pub payoffs: Payoffs,
    #[serde(default)]
    pub mistakes_a: u32,
    #[serde(default)]
    pub mistakes_b: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise: Option<NoiseConfig>,
    #[serde(default = "default_rounds")]
    pub rounds: u8,
}

impl MatchConfig {
    pub fn new(a: impl Into<StrategySpec>, b: impl Into<StrategySpec>, rounds: u8) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            payoffs: Payoffs::DEFAULT,
            mistakes_a: 0,
            mistakes_b: 0,
            noise: None,
            rounds,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        log::debug!("loading match config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Resolve strategies, fold noise into the mistake masks, check the round count.
    pub fn to_game(&self) -> Result<PairGame, GameError> {
        let game = self.resolve_game().inspect_err(|e| log::warn!("rejected match config: {}", e))?;
        log::debug!(
            "match ready: {} rounds, mistakes a={:#b} b={:#b}",
            game.rounds,
            game.mistakes_a,
            game.mistakes_b
        );
        Ok(game)
    }

    fn resolve_game(&self) -> Result<PairGame, GameError> {
        let (noise_a, noise_b) = self
            .noise
            .map(|noise| noise.masks(self.rounds))
            .unwrap_or((0, 0));
        let game = PairGame::new(self.a.resolve()?, self.b.resolve()?, self.rounds)?
            .with_payoffs(self.payoffs)
            .with_mistakes(self.mistakes_a | noise_a, self.mistakes_b | noise_b);
        Ok(game)
    }
}
