//! Python bindings (PyO3)
//!
//! Exposes the engine as a `Random` class shaped like Python's own
//! `random.Random`.

pub mod random;
