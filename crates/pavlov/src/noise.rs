//! Seeded mistake noise
//!
//! Strategies are pure; noise enters a match only through its mistake masks.
//! This module draws those masks from a deterministic PRNG so that a noisy
//! match can be replayed from its seed.

use serde::{Deserialize, Serialize};

use crate::game::MAX_ROUNDS;

/// Seeded random number generator
///
/// Deterministic: same seed + stream = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a seed and a stream index (e.g. one per player)
    pub fn new(seed: u64, stream: u32) -> Self {
        let mut state = seed ^ u64::from(stream).wrapping_mul(0x517c_c1b7_2722_0a95);
        // xorshift never leaves the all-zero state
        if state == 0 {
            state = 0x9e37_79b9_7f4a_7c15;
        }

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Generate next u32
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a value 0-99 (for percentage checks)
    pub fn next_percent(&mut self) -> u8 {
        (self.next_u32() % 100) as u8
    }
}

/// Draw a mistake mask: each of the first `rounds` bits is set with
/// probability `rate_percent`%.
pub fn mistake_mask(rng: &mut SeededRng, rate_percent: u8, rounds: u8) -> u32 {
    (0..rounds.min(MAX_ROUNDS)).fold(0u32, |mask, round| {
        if rng.next_percent() < rate_percent {
            mask | (1 << round)
        } else {
            mask
        }
    })
}

/// Trembling-hand noise settings for one match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseConfig {
    pub seed: u64,
    /// Chance (0-100) that a player's move in a given round is forced to defect.
    pub rate_percent: u8,
}

impl NoiseConfig {
    /// Mistake masks for players A and B, drawn from independent streams.
    pub fn masks(&self, rounds: u8) -> (u32, u32) {
        let mut rng_a = SeededRng::new(self.seed, 0);
        let mut rng_b = SeededRng::new(self.seed, 1);
        (
            mistake_mask(&mut rng_a, self.rate_percent, rounds),
            mistake_mask(&mut rng_b, self.rate_percent, rounds),
        )
    }
}
