//! Mersenne Twister (MT19937, 2002 seeding revision)
//!
//! # Twist modes
//!
//! [`TwistMode::Simplified`] (the default) regenerates the state with the
//! seeding recurrence instead of the matrix-A feedback:
//!
//! ```text
//! state[i] = 0x6C078965 * (state[i-1] ^ (state[i-1] >> 30)) + i    (i in 1..N)
//! ```
//!
//! `state[0]` is never rewritten, so after seeding every twist reproduces the
//! same words and the output repeats every `N` draws. This is the established
//! reference behavior of this engine and output vectors depend on it.
//!
//! [`TwistMode::Canonical`] is the published MT19937 twist and matches other
//! MT19937 implementations bit for bit (seed 5489 gives 3499211612 first).

use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use super::RandomSource;
use crate::core::seed::Seed;
use crate::core::word::truncate32;

/// Word size in bits
pub const W: u32 = 32;
/// State words
pub const N: usize = 624;
/// Twist lag
pub const M: usize = 397;
/// Seeding multiplier
pub const F: u32 = 1812433253;
/// Matrix A of the canonical twist
pub const A: u32 = 0x9908B0DF;
/// Tempering right shift
pub const U: u32 = 11;
/// Tempering left shift, paired with `B`
pub const S: u32 = 7;
/// Tempering mask for the `S` shift
pub const B: u32 = 0x9D2C5680;
/// Tempering left shift, paired with `C`
pub const T: u32 = 15;
/// Tempering mask for the `T` shift
pub const C: u32 = 0xEFC60000;
/// Final tempering right shift
pub const L: u32 = 18;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;

/// Index value that forces a twist before the next word is read
pub const NEEDS_TWIST: usize = N + 1;

/// State regeneration strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwistMode {
    /// Seeding recurrence re-applied to words 1..N
    #[default]
    Simplified,
    /// Published MT19937 matrix-A twist
    Canonical,
}

/// MT19937 generator
///
/// A fresh instance is unseeded: all-zero state with a pending twist. Drawing
/// from it is well defined and always produces the same sequence.
///
/// # Example
/// ```
/// use pseudo_random_core_rs::{MersenneTwister, RandomSource};
///
/// let mut rng = MersenneTwister::with_seed(123u32);
/// assert_eq!(rng.state()[1], 3885958024);
/// assert_eq!(rng.next_u32(), 172234346);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct MersenneTwister {
    state: [u32; N],
    index: usize,
    mode: TwistMode,
}

impl MersenneTwister {
    /// Unseeded generator using the simplified twist
    pub fn new() -> Self {
        Self::with_mode(TwistMode::default())
    }

    /// Unseeded generator using `mode`
    pub fn with_mode(mode: TwistMode) -> Self {
        Self {
            state: [0; N],
            index: NEEDS_TWIST,
            mode,
        }
    }

    /// Seeded generator using the simplified twist
    pub fn with_seed<S: Into<Seed>>(seed: S) -> Self {
        let mut rng = Self::new();
        rng.reseed(seed.into());
        rng
    }

    /// Seeded generator using the canonical MT19937 twist
    pub fn canonical<S: Into<Seed>>(seed: S) -> Self {
        let mut rng = Self::with_mode(TwistMode::Canonical);
        rng.reseed(seed.into());
        rng
    }

    pub fn state(&self) -> &[u32; N] {
        &self.state
    }

    /// Position of the next word to temper; `>= N` means a twist is pending
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn twist_mode(&self) -> TwistMode {
        self.mode
    }

    /// Regenerate the whole state and rewind the cursor
    pub fn twist(&mut self) {
        trace!("mt19937 twist ({:?})", self.mode);
        match self.mode {
            TwistMode::Simplified => self.twist_simplified(),
            TwistMode::Canonical => self.twist_canonical(),
        }
        self.index = 0;
    }

    fn twist_simplified(&mut self) {
        for i in 1..N {
            self.state[i] = next_seed_word(self.state[i - 1], i);
        }
    }

    fn twist_canonical(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut next = self.state[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= A;
            }
            self.state[i] = next;
        }
    }
}

impl Default for MersenneTwister {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MersenneTwister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MersenneTwister")
            .field("index", &self.index)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

/// `F * (prev ^ (prev >> (W - 2))) + i`, truncated to 32 bits
fn next_seed_word(prev: u32, i: usize) -> u32 {
    let mixed = u64::from(prev ^ (prev >> (W - 2)));
    truncate32(u64::from(F) * mixed + i as u64)
}

/// Tempering transform applied to every output word
pub fn temper(word: u32) -> u32 {
    let mut y = word;
    y ^= y >> U;
    y ^= (y << S) & B;
    y ^= (y << T) & C;
    y ^= y >> L;
    y
}

impl RandomSource for MersenneTwister {
    fn reseed(&mut self, seed: Seed) {
        self.state[0] = truncate32(seed.value());
        for i in 1..N {
            self.state[i] = next_seed_word(self.state[i - 1], i);
        }
        self.index = NEEDS_TWIST;
        trace!("mt19937 seeded: state[0]={}", self.state[0]);
    }

    fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let y = temper(self.state[self.index]);
        self.index += 1;
        y
    }

    fn random(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4294967296.0
    }
}
