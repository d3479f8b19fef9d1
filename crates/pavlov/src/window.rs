//! Sliding window over a player's last three outcomes
//!
//! The window is the lookup index into a strategy's decision tables. Before
//! round 4 it holds fewer than three outcomes and selects a shallower table.

use crate::outcome::Outcome;

/// Number of outcomes the window remembers.
pub const WINDOW_DEPTH: u8 = 3;

const INDEX_MASK: u8 = (1 << (2 * WINDOW_DEPTH)) - 1;

/// Fixed-width ring of the last [`WINDOW_DEPTH`] outcomes, oldest in the high bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutcomeWindow {
    index: u8,
    seen: u8,
}

impl OutcomeWindow {
    pub const fn new() -> Self {
        Self { index: 0, seen: 0 }
    }

    /// Slide in the newest outcome, dropping the oldest once full.
    #[inline]
    pub fn push(&mut self, outcome: Outcome) {
        self.index = ((self.index << 2) | outcome.index()) & INDEX_MASK;
        if self.seen < WINDOW_DEPTH {
            self.seen += 1;
        }
    }

    /// Table index: `(o[n-3] << 4) | (o[n-2] << 2) | o[n-1]`, truncated to what has been seen.
    #[inline]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// How many outcomes the window holds (0..=3).
    #[inline]
    pub const fn depth(&self) -> u8 {
        self.seen
    }

    /// Most recent outcome, if any round has been played.
    pub fn last(&self) -> Option<Outcome> {
        (self.seen > 0).then(|| Outcome::from_bits(self.index))
    }
}
