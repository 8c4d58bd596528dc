//! Linear congruential generator
//!
//! Uses the ANSI C `rand()` coefficients:
//!
//! ```text
//! last = (A * last + C) mod M      A = 1103515245, C = 12345, M = 2^31
//! ```
//!
//! The whole state is the previous output. Its low bits have very short
//! periods, so it is only suitable for demonstrations and tests.

use log::trace;

use super::RandomSource;
use crate::core::seed::Seed;
use crate::core::word::truncate32;

/// Multiplier
pub const A: u64 = 1103515245;
/// Increment
pub const C: u64 = 12345;
/// Modulus (2^31)
pub const M: u64 = 1 << 31;

/// Linear congruential generator over 31-bit outputs
///
/// # Example
/// ```
/// use pseudo_random_core_rs::{LinearCongruentialGenerator, RandomSource};
///
/// let mut rng = LinearCongruentialGenerator::new(411u32);
/// assert_eq!(rng.next_u32(), 425728312);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearCongruentialGenerator {
    last: u32,
}

impl LinearCongruentialGenerator {
    /// Create a generator seeded with `seed`
    pub fn new<S: Into<Seed>>(seed: S) -> Self {
        let mut rng = Self { last: 0 };
        rng.reseed(seed.into());
        rng
    }

    /// Create a generator seeded from the wall clock
    pub fn from_time() -> Self {
        Self::new(Seed::from_system_time())
    }

    /// Previous output (or the seed, before the first draw)
    pub fn last(&self) -> u32 {
        self.last
    }
}

/// One step of the recurrence. Pure in `last`.
pub fn generate_next_int(last: u32) -> u32 {
    ((A * u64::from(last) + C) % M) as u32
}

impl RandomSource for LinearCongruentialGenerator {
    fn reseed(&mut self, seed: Seed) {
        self.last = truncate32(seed.value());
        trace!("lcg seeded: last={}", self.last);
    }

    fn next_u32(&mut self) -> u32 {
        self.last = generate_next_int(self.last);
        self.last
    }

    fn random(&mut self) -> f64 {
        f64::from(self.next_u32()) / M as f64
    }
}
