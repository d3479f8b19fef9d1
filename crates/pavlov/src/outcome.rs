//! Moves and round outcomes
//!
//! An outcome packs one player's view of a round into two bits:
//!
//! ```text
//! value | they defect | they coop
//! ------+-------------+----------
//! I def | 00 (0) D    | 01 (1) D/C
//! I coo | 10 (2) C/D  | 11 (3) C
//! ```

use serde::{Deserialize, Serialize};

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Move {
    Defect = 0,
    Cooperate = 1,
}

impl Move {
    /// Build a move from the lowest bit of `bit`
    #[inline]
    pub const fn from_bit(bit: u8) -> Self {
        if bit & 1 == 1 {
            Move::Cooperate
        } else {
            Move::Defect
        }
    }

    #[inline]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Single-letter label, `C` or `D`
    pub const fn label(self) -> &'static str {
        match self {
            Move::Defect => "D",
            Move::Cooperate => "C",
        }
    }
}

/// One round seen from one player: own move in the high bit, opponent's in the low bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Outcome {
    /// Both defected
    MutualDefection = 0b00,
    /// I defected, they cooperated
    Temptation = 0b01,
    /// I cooperated, they defected
    Sucker = 0b10,
    /// Both cooperated
    MutualCooperation = 0b11,
}

impl Outcome {
    pub const ALL: [Outcome; 4] = [
        Outcome::MutualDefection,
        Outcome::Temptation,
        Outcome::Sucker,
        Outcome::MutualCooperation,
    ];

    #[inline]
    pub const fn from_moves(own: Move, opponent: Move) -> Self {
        Self::from_bits((own.bit() << 1) | opponent.bit())
    }

    /// Build an outcome from the two lowest bits of `bits`
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Outcome::MutualDefection,
            0b01 => Outcome::Temptation,
            0b10 => Outcome::Sucker,
            _ => Outcome::MutualCooperation,
        }
    }

    /// Table index of this outcome (0..4)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn own_move(self) -> Move {
        Move::from_bit(self.index() >> 1)
    }

    #[inline]
    pub const fn opponent_move(self) -> Move {
        Move::from_bit(self.index())
    }

    /// The same round seen from the other seat (top and bottom bit swapped).
    #[inline]
    pub const fn mirror(self) -> Self {
        let bits = self.index();
        Self::from_bits(((bits & 1) << 1) | (bits >> 1))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Outcome::MutualDefection => "D",
            Outcome::Temptation => "D/C",
            Outcome::Sucker => "C/D",
            Outcome::MutualCooperation => "C",
        }
    }
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
