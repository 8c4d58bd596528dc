//! Pseudo Random Core - Rust Engine
//!
//! Deterministic pseudo-random number generation behind one shared contract.
//!
//! # Architecture
//!
//! - **core**: 32-bit word arithmetic and seed values
//! - **rng**: The `RandomSource` contract, the shared range mapper and the
//!   generator algorithms (LCG, MT19937, middle-square)
//! - **config**: Serializable generator configuration and the `Generator`
//!   tagged variant used to pick an algorithm at run time
//!
//! # Critical Invariants
//!
//! 1. Same algorithm + same seed = same output sequence, bit for bit
//! 2. Word arithmetic wraps modulo 2^32, it never errors
//! 3. Re-seeding replaces all generator state
//!
//! None of the generators are cryptographically secure. Observing enough
//! output recovers the full state of every algorithm in this crate.

// Module declarations
pub mod config;
pub mod core;
pub mod rng;

// Re-exports for convenience
pub use config::{Algorithm, ConfigError, Generator, GeneratorConfig};
pub use crate::core::seed::Seed;
pub use crate::core::word::truncate32;
pub use rng::{
    LinearCongruentialGenerator, MersenneTwister, MiddleSquare, RandomSource, Randoms,
    RangeError, TwistMode,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn pseudo_random_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::random::PyRandom>()?;
    Ok(())
}
