//! Packed match history
//!
//! Two bits per round, from player A's point of view. Round 1 sits in the
//! most significant used pair, so appending a round is a shift by two.

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// Separator used by [`History`]'s `Display`.
pub const ROUND_SEPARATOR: &str = " -> ";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct History {
    bits: u64,
    rounds: u8,
}

impl History {
    pub const fn new() -> Self {
        Self { bits: 0, rounds: 0 }
    }

    /// Wrap an already packed history of `rounds` rounds.
    pub const fn from_bits(bits: u64, rounds: u8) -> Self {
        Self { bits, rounds }
    }

    #[inline]
    pub fn push(&mut self, outcome: Outcome) {
        self.bits = (self.bits << 2) | u64::from(outcome.index());
        self.rounds += 1;
    }

    pub const fn bits(&self) -> u64 {
        self.bits
    }

    pub const fn rounds(&self) -> u8 {
        self.rounds
    }

    /// Outcome of `round` (1-based) from A's point of view.
    ///
    /// # Panics
    /// If `round` is 0 or past the recorded rounds.
    pub fn outcome(&self, round: u8) -> Outcome {
        assert!(
            round >= 1 && round <= self.rounds,
            "round {} outside 1..={}",
            round,
            self.rounds
        );
        // Rounds before the 32 that fit in the packed bits read as D.
        let shift = 2 * u32::from(self.rounds - round);
        Outcome::from_bits(self.bits.checked_shr(shift).unwrap_or(0) as u8)
    }

    /// Outcomes in round order.
    pub fn outcomes(&self) -> impl Iterator<Item = Outcome> + '_ {
        (1..=self.rounds).map(move |round| self.outcome(round))
    }

    /// Whether `self` is `other` cut short after `self.rounds()` rounds.
    pub fn is_prefix_of(&self, other: &History) -> bool {
        if self.rounds > other.rounds {
            return false;
        }
        let dropped = 2 * u32::from(other.rounds - self.rounds);
        other.bits.checked_shr(dropped).unwrap_or(0) == self.bits
    }

    /// Labels of every round joined by `separator`.
    pub fn render(&self, separator: &str) -> String {
        self.outcomes()
            .map(Outcome::label)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl core::fmt::Display for History {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render(ROUND_SEPARATOR))
    }
}

/// Render a packed history, e.g. `C/D -> D -> D`.
pub fn render_history(bits: u64, rounds: u8) -> String {
    History::from_bits(bits, rounds).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Outcome::*;

    fn history_of(outcomes: &[Outcome]) -> History {
        let mut history = History::new();
        for outcome in outcomes {
            history.push(*outcome);
        }
        history
    }

    #[test]
    fn test_round_one_most_significant() {
        let history = history_of(&[Sucker, MutualDefection, MutualCooperation]);
        assert_eq!(history.bits(), 0b10_00_11);
        assert_eq!(history.rounds(), 3);
        assert_eq!(history.outcome(1), Sucker);
        assert_eq!(history.outcome(3), MutualCooperation);
    }

    #[test]
    fn test_render_labels() {
        let history = history_of(&[MutualDefection, Temptation, Sucker, MutualCooperation]);
        assert_eq!(history.to_string(), "D -> D/C -> C/D -> C");
        assert_eq!(history.render(","), "D,D/C,C/D,C");
    }

    #[test]
    fn test_render_packed() {
        assert_eq!(render_history(0b10_00_00, 3), "C/D -> D -> D");
        // Leading D rounds are zero bits and still rendered.
        assert_eq!(render_history(0b11, 3), "D -> D -> C");
        assert_eq!(render_history(0, 0), "");
    }

    #[test]
    fn test_full_width() {
        let history = history_of(&[MutualCooperation; 32]);
        assert_eq!(history.bits(), u64::MAX);
        assert_eq!(history.outcomes().count(), 32);
    }

    #[test]
    fn test_prefix() {
        let long = history_of(&[Sucker, Temptation, MutualCooperation]);
        let short = history_of(&[Sucker, Temptation]);
        let other = history_of(&[Sucker, Sucker]);
        assert!(short.is_prefix_of(&long));
        assert!(long.is_prefix_of(&long));
        assert!(History::new().is_prefix_of(&long));
        assert!(!other.is_prefix_of(&long));
        assert!(!long.is_prefix_of(&short));
    }

    #[test]
    fn test_render_past_packed_width() {
        let text = render_history(u64::MAX, 33);
        assert!(text.starts_with("D -> C -> C"));
        assert_eq!(text.split(ROUND_SEPARATOR).count(), 33);

        let history = History::from_bits(u64::MAX, u8::MAX);
        assert_eq!(history.outcome(1), Outcome::MutualDefection);
        assert_eq!(history.outcome(u8::MAX), Outcome::MutualCooperation);
        assert_eq!(history.outcomes().count(), 255);
    }

    #[test]
    #[should_panic]
    fn test_outcome_round_zero_panics() {
        history_of(&[Sucker]).outcome(0);
    }
}
