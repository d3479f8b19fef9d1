//! Match execution engine

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::history::History;
use crate::outcome::{Move, Outcome};
use crate::strategy::PureStrategy;
use crate::window::OutcomeWindow;

/// Longest supported match; the packed history holds two bits per round in a `u64`.
pub const MAX_ROUNDS: u8 = 32;

/// Payoff per outcome, indexed by the scoring player's own outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payoffs(pub [i32; 4]);

impl Payoffs {
    /// Standard table: D 0, D/C 3, C/D -1, C 2.
    pub const DEFAULT: Payoffs = Payoffs([0, 3, -1, 2]);

    #[inline]
    pub const fn get(&self, outcome: Outcome) -> i32 {
        self.0[outcome.index() as usize]
    }
}

impl Default for Payoffs {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Payoffs {
    type Err = GameError;

    /// Parse `"D,D/C,C/D,C"` payoffs, e.g. `"0,3,-1,2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidPayoffs { input: s.to_string() };
        let values = s
            .split(',')
            .map(|part| part.trim().parse::<i32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        let table: [i32; 4] = values.try_into().map_err(|_| invalid())?;
        Ok(Payoffs(table))
    }
}

/// One match between two pure strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairGame {
    pub a: PureStrategy,
    pub b: PureStrategy,
    /// Bit `r` set forces A to defect in round `r + 1`.
    pub mistakes_a: u32,
    /// Bit `r` set forces B to defect in round `r + 1`.
    pub mistakes_b: u32,
    pub payoffs: Payoffs,
    /// Min 1, max [`MAX_ROUNDS`].
    pub rounds: u8,
}

impl PairGame {
    /// Mistake-free game with default payoffs.
    pub fn new(a: PureStrategy, b: PureStrategy, rounds: u8) -> Result<Self, GameError> {
        let game = Self {
            a,
            b,
            mistakes_a: 0,
            mistakes_b: 0,
            payoffs: Payoffs::DEFAULT,
            rounds,
        };
        game.validate()?;
        Ok(game)
    }

    pub fn with_payoffs(self, payoffs: Payoffs) -> Self {
        Self { payoffs, ..self }
    }

    pub fn with_mistakes(self, mistakes_a: u32, mistakes_b: u32) -> Self {
        Self {
            mistakes_a,
            mistakes_b,
            ..self
        }
    }

    /// Check the round count is within `1..=MAX_ROUNDS`.
    pub fn validate(&self) -> Result<(), GameError> {
        if (1..=MAX_ROUNDS).contains(&self.rounds) {
            Ok(())
        } else {
            Err(GameError::InvalidRounds {
                rounds: u32::from(self.rounds),
            })
        }
    }
}

/// Result of a complete match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    pub score_a: i32,
    pub score_b: i32,
    /// Outcomes from A's point of view.
    pub history: History,
}

/// Result of a single round, recovered from a packed history
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// 1-based.
    pub round: u8,
    pub move_a: Move,
    pub move_b: Move,
    pub score_a: i32,
    pub score_b: i32,
    pub cumulative_a: i32,
    pub cumulative_b: i32,
}

impl MatchResult {
    /// Round-by-round breakdown, scored with `payoffs`.
    pub fn rounds(&self, payoffs: &Payoffs) -> Vec<RoundResult> {
        let mut total_a = 0i32;
        let mut total_b = 0i32;
        self.history
            .outcomes()
            .zip(1u8..)
            .map(|(outcome, round)| {
                let score_a = payoffs.get(outcome);
                let score_b = payoffs.get(outcome.mirror());
                total_a += score_a;
                total_b += score_b;
                RoundResult {
                    round,
                    move_a: outcome.own_move(),
                    move_b: outcome.opponent_move(),
                    score_a,
                    score_b,
                    cumulative_a: total_a,
                    cumulative_b: total_b,
                }
            })
            .collect()
    }
}

/// Force a defection when the round's mistake bit is set.
///
/// The intended move is ANDed with the complement of the mistake bit, so a
/// mistake never turns a defection into cooperation.
#[inline]
pub fn apply_mistake(intended: Move, mistakes: u32, round_index: u8) -> Move {
    let mistake = mistakes.checked_shr(u32::from(round_index)).unwrap_or(0) as u8;
    Move::from_bit(intended.bit() & !mistake)
}

/// Play a complete match
///
/// Each round, both players read their intended move from their own
/// outcome window, mistakes are applied, both players score their own
/// outcome, and A's outcome is appended to the history.
///
/// `game.rounds` must be within `1..=MAX_ROUNDS`; use [`PairGame::validate`]
/// for untrusted input.
pub fn simulate_match(game: &PairGame) -> MatchResult {
    debug_assert!(
        game.validate().is_ok(),
        "round count {} outside 1..={}",
        game.rounds,
        MAX_ROUNDS
    );

    let mut window_a = OutcomeWindow::new();
    let mut window_b = OutcomeWindow::new();
    let mut history = History::new();
    let mut score_a = 0i32;
    let mut score_b = 0i32;

    for round_index in 0..game.rounds {
        let move_a = apply_mistake(game.a.decide(&window_a), game.mistakes_a, round_index);
        let move_b = apply_mistake(game.b.decide(&window_b), game.mistakes_b, round_index);

        let outcome_a = Outcome::from_moves(move_a, move_b);
        let outcome_b = Outcome::from_moves(move_b, move_a);
        score_a += game.payoffs.get(outcome_a);
        score_b += game.payoffs.get(outcome_b);

        window_a.push(outcome_a);
        window_b.push(outcome_b);
        history.push(outcome_a);
    }

    MatchResult {
        score_a,
        score_b,
        history,
    }
}
