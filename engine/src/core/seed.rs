//! Seed values
//!
//! A [`Seed`] is the integer that establishes a generator's initial state.
//! Each algorithm folds it into its own state width when seeding.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Integer seed for a generator
///
/// Identical seeds always reproduce identical output sequences.
///
/// # Example
/// ```
/// use pseudo_random_core_rs::Seed;
///
/// assert_eq!(Seed::from(411u32).value(), 411);
/// assert_eq!(Seed::from(-1i64).value(), u64::MAX);
/// assert_eq!(Seed::from(1_700_000_000.75f64).value(), 1_700_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(u64);

impl Seed {
    /// Create a seed from a raw 64-bit value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Seed from the wall clock (nanoseconds since the Unix epoch)
    ///
    /// This is the default for callers that never pick a seed. A clock set
    /// before 1970 yields seed 0.
    pub fn from_system_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or(0);
        Self(nanos as u64)
    }

    /// Raw seed value
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Self(u64::from(value))
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Self(value as u64)
    }
}

/// Keeps the integer part of a timestamp-like float.
///
/// Out-of-range values saturate and NaN becomes 0.
impl From<f64> for Seed {
    fn from(value: f64) -> Self {
        Self::from(value.trunc() as i64)
    }
}
