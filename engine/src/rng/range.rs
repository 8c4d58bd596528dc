//! Range mapping shared by every generator
//!
//! All bounded outputs are derived from a single uniform draw `x` in [0, 1):
//!
//! ```text
//! randrange(a, b) = floor(x * (b - a) + a)      in [a, b)
//! randint(a, b)   = randrange(a, b + 1)         in [a, b]
//! uniform(a, b)   = a + (b - a) * x             in [a, b)
//! ```
//!
//! Keeping the formulas here guarantees that the LCG, MT19937 and
//! middle-square generators map their draws identically.

use thiserror::Error;

/// Errors for out-of-contract bounds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Empty range: start {start} must be less than stop {stop}")]
    EmptyRange { start: i64, stop: i64 },

    #[error("Range [{start}, {stop}] overflows: inclusive upper bound has no successor")]
    Overflow { start: i64, stop: i64 },
}

/// Validate a half-open range [start, stop)
pub fn check(start: i64, stop: i64) -> Result<(), RangeError> {
    if start < stop {
        Ok(())
    } else {
        Err(RangeError::EmptyRange { start, stop })
    }
}

/// Convert an inclusive upper bound into the exclusive one `randrange` takes
pub fn inclusive_stop(start: i64, stop: i64) -> Result<i64, RangeError> {
    stop.checked_add(1)
        .ok_or(RangeError::Overflow { start, stop })
}

/// Map a draw `x` in [0, 1) onto [start, stop)
///
/// The caller must have validated the bounds with [`check`]. The width is
/// computed in `i128` so the full `i64` span cannot overflow, and the offset
/// is clamped because `x * width` can round up to `width` once the width
/// exceeds 2^53.
pub fn scale(x: f64, start: i64, stop: i64) -> i64 {
    debug_assert!(start < stop, "scale() called with unchecked bounds");

    let width = i128::from(stop) - i128::from(start);
    let offset = (x * width as f64).floor() as i128;
    (i128::from(start) + offset.clamp(0, width - 1)) as i64
}

/// Map a draw `x` in [0, 1) onto the real interval [low, high)
pub fn uniform(x: f64, low: f64, high: f64) -> f64 {
    low + (high - low) * x
}
