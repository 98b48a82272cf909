//! Seeded, non-cryptographic value generation.
//!
//! The base step is a linear congruential hash:
//! `h(s) = (s * 9301 + 49297) mod 233280`.
//!
//! [`draw`] applies a single step and reduces it into `[0, max)`. Every
//! attribute drawn that way for a given seed shares the same hash value, so
//! attributes are correlated. [`SeedStream`] in [`DrawMode::Stream`] instead
//! advances the hash once per draw, giving each attribute its own value while
//! keeping the first draw identical to [`draw`].

use serde::{Deserialize, Serialize};

use super::identifier::Seed;

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233280;

/// One LCG step. The seed is reduced first so large seeds cannot overflow.
fn step(state: u64) -> u64 {
    ((state % MODULUS) * MULTIPLIER + INCREMENT) % MODULUS
}

/// Deterministic value in `[0, max)` for a seed.
///
/// `max` must be non-zero; catalogs are never empty.
pub fn draw(seed: Seed, max: u32) -> u32 {
    debug_assert!(max > 0, "draw bound must be non-zero");
    (step(seed) % u64::from(max)) as u32
}

/// How a [`SeedStream`] produces successive draws.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    /// Every draw reuses the single hash of the seed. Matches historical outputs.
    Legacy,
    /// Each draw advances the hash, so attributes are drawn independently.
    #[default]
    Stream,
}

impl DrawMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawMode::Legacy => "legacy",
            DrawMode::Stream => "stream",
        }
    }
}

/// Sequence of draws derived from one seed.
#[derive(Debug, Clone)]
pub struct SeedStream {
    seed: Seed,
    state: u64,
    mode: DrawMode,
}

impl SeedStream {
    pub fn new(seed: Seed, mode: DrawMode) -> Self {
        Self {
            seed,
            state: seed,
            mode,
        }
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Next raw value in `[0, 233280)`.
    pub fn next_value(&mut self) -> u64 {
        match self.mode {
            DrawMode::Legacy => step(self.seed),
            DrawMode::Stream => {
                self.state = step(self.state);
                self.state
            }
        }
    }

    /// Next value in `[0, max)`.
    pub fn draw(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0, "draw bound must be non-zero");
        (self.next_value() % u64::from(max)) as u32
    }

    /// Next index into a non-empty catalog.
    pub fn index(&mut self, len: usize) -> usize {
        let bound = u32::try_from(len).unwrap_or(u32::MAX);
        self.draw(bound) as usize
    }
}
