//! Pure strategy encoding
//!
//! A strategy remembers at most three rounds. Its whole decision function is
//! stored as four bit tables, each indexed by the owning player's recent
//! outcomes (see [`Outcome`](crate::Outcome)):
//!
//! - `move1`: the move for round 1,
//! - `move2`: bit `o1` is the move for round 2,
//! - `move3`: bit `o1 << 2 | o2` is the move for round 3,
//! - `move_n`: bit `o[n-3] << 4 | o[n-2] << 2 | o[n-1]` is the move for round n >= 4.
//!
//! A strategy with shorter memory is expanded by tiling its deepest table
//! over the higher index bits it ignores, so every lookup index is valid.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::outcome::Move;
use crate::window::OutcomeWindow;

/// Round-2 table for Tit-for-Tat: copy the opponent's last move.
pub const MOVES_TFT: u8 = 0b1010;
/// Round-2 table for Pavlov: cooperate iff both played the same move.
pub const MOVES_PAVLOV: u8 = 0b1001;
/// Round-3 table for Tit-for-Tat-with-forgiveness: defect only after two defections in a row.
pub const MOVES_TFTWF: u16 = 0b1111_1010_1111_1010;

/// Pure (non-random) strategy with up to three rounds of memory
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PureStrategy {
    pub move1: u8,
    pub move2: u8,
    pub move3: u16,
    pub move_n: u64,
}

pub const ALWAYS_COOPERATE: PureStrategy = PureStrategy::with_memory0(1);
pub const ALWAYS_DEFECT: PureStrategy = PureStrategy::with_memory0(0);
pub const TIT_FOR_TAT: PureStrategy = PureStrategy::with_memory1(1, MOVES_TFT);
pub const SUSPICIOUS_TIT_FOR_TAT: PureStrategy = PureStrategy::with_memory1(0, MOVES_TFT);
pub const PAVLOV: PureStrategy = PureStrategy::with_memory1(1, MOVES_PAVLOV);
pub const TIT_FOR_TAT_WITH_FORGIVENESS: PureStrategy =
    PureStrategy::with_memory2(1, 0b1111, MOVES_TFTWF);

impl PureStrategy {
    /// Strategy without memory: always plays `mv`.
    pub const fn with_memory0(mv: u8) -> Self {
        let mv = mv & 1;
        Self::with_memory1(mv, mv * 0b1111)
    }

    /// One round of memory: `move3` is `move2` tiled four times.
    pub const fn with_memory1(move1: u8, move2: u8) -> Self {
        let m2 = (move2 & 0b1111) as u16;
        Self::with_memory2(move1, move2, (m2 << 12) | (m2 << 8) | (m2 << 4) | m2)
    }

    /// Two rounds of memory: `move_n` is `move3` tiled four times.
    pub const fn with_memory2(move1: u8, move2: u8, move3: u16) -> Self {
        let m3 = move3 as u64;
        Self::with_memory3(move1, move2, move3, (m3 << 48) | (m3 << 32) | (m3 << 16) | m3)
    }

    /// Full three-round table, stored as given.
    pub const fn with_memory3(move1: u8, move2: u8, move3: u16, move_n: u64) -> Self {
        Self {
            move1: move1 & 1,
            move2: move2 & 0b1111,
            move3,
            move_n,
        }
    }

    /// Look up the intended move for the next round.
    ///
    /// The table is chosen by how many outcomes `window` has seen, so the
    /// first three rounds read `move1`, `move2` and `move3`.
    #[inline]
    pub fn decide(&self, window: &OutcomeWindow) -> Move {
        let index = window.index();
        let bit = match window.depth() {
            0 => self.move1,
            1 => self.move2 >> index,
            2 => (self.move3 >> index) as u8,
            _ => (self.move_n >> index) as u8,
        };
        Move::from_bit(bit)
    }

    /// Smallest memory depth (0..=3) whose expansion reproduces this strategy.
    pub fn memory_depth(&self) -> u8 {
        if Self::with_memory0(self.move1) == *self {
            0
        } else if Self::with_memory1(self.move1, self.move2) == *self {
            1
        } else if Self::with_memory2(self.move1, self.move2, self.move3) == *self {
            2
        } else {
            3
        }
    }
}

impl Default for PureStrategy {
    fn default() -> Self {
        TIT_FOR_TAT
    }
}

impl core::fmt::Display for PureStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "PureStrategy(move1={:01b} move2={:04b} move3={:016b} moveN={:064b})",
            self.move1, self.move2, self.move3, self.move_n
        )
    }
}

/// Catalogue of well-known strategies
///
/// Serialized as its kebab-case id. Parsing, from a string or through serde,
/// goes through [`FromStr`]: case-insensitive, short aliases accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum NamedStrategy {
    /// Never defects.
    AlwaysCooperate,
    /// Never cooperates.
    AlwaysDefect,
    /// Copy opponent's last move. Start with cooperate.
    TitForTat,
    /// Tit-for-Tat but start with defect.
    SuspiciousTitForTat,
    /// Win-stay, lose-shift.
    Pavlov,
    /// Defect only if opponent defected twice in a row.
    TitForTatWithForgiveness,
}

impl NamedStrategy {
    pub const ALL: [NamedStrategy; 6] = [
        NamedStrategy::AlwaysCooperate,
        NamedStrategy::AlwaysDefect,
        NamedStrategy::TitForTat,
        NamedStrategy::SuspiciousTitForTat,
        NamedStrategy::Pavlov,
        NamedStrategy::TitForTatWithForgiveness,
    ];

    pub const fn strategy(self) -> PureStrategy {
        match self {
            NamedStrategy::AlwaysCooperate => ALWAYS_COOPERATE,
            NamedStrategy::AlwaysDefect => ALWAYS_DEFECT,
            NamedStrategy::TitForTat => TIT_FOR_TAT,
            NamedStrategy::SuspiciousTitForTat => SUSPICIOUS_TIT_FOR_TAT,
            NamedStrategy::Pavlov => PAVLOV,
            NamedStrategy::TitForTatWithForgiveness => TIT_FOR_TAT_WITH_FORGIVENESS,
        }
    }

    /// Stable kebab-case id, as accepted by [`FromStr`] and serde.
    pub const fn name(self) -> &'static str {
        match self {
            NamedStrategy::AlwaysCooperate => "always-cooperate",
            NamedStrategy::AlwaysDefect => "always-defect",
            NamedStrategy::TitForTat => "tit-for-tat",
            NamedStrategy::SuspiciousTitForTat => "suspicious-tit-for-tat",
            NamedStrategy::Pavlov => "pavlov",
            NamedStrategy::TitForTatWithForgiveness => "tit-for-tat-with-forgiveness",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            NamedStrategy::AlwaysCooperate => "Never defects. Always cooperates.",
            NamedStrategy::AlwaysDefect => "Never cooperates. Always defects.",
            NamedStrategy::TitForTat => "Copies opponent's last move. Starts by cooperating.",
            NamedStrategy::SuspiciousTitForTat => "Like Tit-for-Tat, but starts with defect.",
            NamedStrategy::Pavlov => "Repeats its move after a matching round, switches otherwise.",
            NamedStrategy::TitForTatWithForgiveness => {
                "Only retaliates after two consecutive defections."
            }
        }
    }

    /// Catalogue row for frontends.
    pub fn info(self) -> StrategyInfo {
        let strategy = self.strategy();
        StrategyInfo {
            id: self.name(),
            description: self.description(),
            memory_depth: strategy.memory_depth(),
            move1: strategy.move1,
            move2: strategy.move2,
            move3: strategy.move3,
            move_n: strategy.move_n.to_string(),
        }
    }

    /// Reverse lookup from a strategy value to its catalogue entry.
    pub fn identify(strategy: &PureStrategy) -> Option<Self> {
        Self::ALL.into_iter().find(|named| named.strategy() == *strategy)
    }
}

/// One catalogue entry with its tables, safe to hand to JavaScript.
///
/// `move_n` is a decimal string: JS numbers stop at 2^53.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StrategyInfo {
    pub id: &'static str,
    pub description: &'static str,
    pub memory_depth: u8,
    pub move1: u8,
    pub move2: u8,
    pub move3: u16,
    pub move_n: String,
}

impl FromStr for NamedStrategy {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let named = match s.to_ascii_lowercase().as_str() {
            "always-cooperate" | "allc" => NamedStrategy::AlwaysCooperate,
            "always-defect" | "always-defeat" | "alld" => NamedStrategy::AlwaysDefect,
            "tit-for-tat" | "tft" => NamedStrategy::TitForTat,
            "suspicious-tit-for-tat" | "stft" => NamedStrategy::SuspiciousTitForTat,
            "pavlov" | "wsls" => NamedStrategy::Pavlov,
            "tit-for-tat-with-forgiveness" | "tftwf" => NamedStrategy::TitForTatWithForgiveness,
            _ => return Err(GameError::UnknownStrategy { name: s.to_string() }),
        };
        Ok(named)
    }
}

impl TryFrom<String> for NamedStrategy {
    type Error = GameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl core::fmt::Display for NamedStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
