//! Middle-square method (von Neumann, 1949)
//!
//! The state is a `digits`-digit decimal number. Each step squares it, pads
//! the square to `2 * digits` digits and keeps the middle `digits` digits.
//! Sequences quickly fall into short cycles or stick at zero.

use log::trace;

use super::RandomSource;
use crate::core::seed::Seed;

pub const DEFAULT_DIGITS: u32 = 8;
pub const MIN_DIGITS: u32 = 2;
pub const MAX_DIGITS: u32 = 8;

/// True for digit counts the generator accepts (even, 2..=8)
pub fn valid_digits(digits: u32) -> bool {
    (MIN_DIGITS..=MAX_DIGITS).contains(&digits) && digits % 2 == 0
}

/// Middle-square generator
///
/// # Example
/// ```
/// use pseudo_random_core_rs::{MiddleSquare, RandomSource};
///
/// let mut rng = MiddleSquare::with_digits(4, 411u32);
/// assert_eq!(rng.next_u32(), 1689);
/// assert_eq!(rng.next_u32(), 8527);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddleSquare {
    value: u64,
    digits: u32,
    modulus: u64,
}

impl MiddleSquare {
    /// Generator with [`DEFAULT_DIGITS`] digits
    pub fn new<S: Into<Seed>>(seed: S) -> Self {
        Self::with_digits(DEFAULT_DIGITS, seed)
    }

    /// Generator with a custom digit count
    ///
    /// # Panics
    /// Panics unless `digits` is even and within 2..=8.
    pub fn with_digits<S: Into<Seed>>(digits: u32, seed: S) -> Self {
        assert!(valid_digits(digits), "digits must be even and between 2 and 8");
        let mut rng = Self {
            value: 0,
            digits,
            modulus: 10u64.pow(digits),
        };
        rng.reseed(seed.into());
        rng
    }

    /// Current state
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }
}

impl RandomSource for MiddleSquare {
    fn reseed(&mut self, seed: Seed) {
        self.value = seed.value() % self.modulus;
        trace!("middle-square seeded: value={} digits={}", self.value, self.digits);
    }

    fn next_u32(&mut self) -> u32 {
        let square = self.value * self.value;
        let shift = 10u64.pow(self.digits / 2);
        self.value = (square / shift) % self.modulus;
        self.value as u32
    }

    fn random(&mut self) -> f64 {
        self.next_u32() as f64 / self.modulus as f64
    }
}
