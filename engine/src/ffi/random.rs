//! PyO3 wrapper for Generator

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::{Algorithm, Generator, GeneratorConfig};
use crate::core::seed::Seed;
use crate::rng::RandomSource;

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python ints are signed; negative seeds wrap the same way `Seed::from(i64)` does.
fn seed_from_py(value: i64) -> Seed {
    Seed::from(value)
}

/// Python wrapper for a seeded generator
///
/// # Example (from Python)
///
/// ```python
/// from pseudo_random_core_rs import Random
///
/// rng = Random("lcg", 411)
/// print(rng.random(), rng.randint(1, 6))
///
/// rng.seed(411)
/// print(rng.randoms(3))
/// ```
#[pyclass(name = "Random")]
pub struct PyRandom {
    inner: Generator,
}

#[pymethods]
impl PyRandom {
    /// Create a generator
    ///
    /// # Errors
    ///
    /// Raises ValueError for an unknown algorithm name.
    #[new]
    #[pyo3(signature = (algorithm = "mersenne_twister", seed = None))]
    fn new(algorithm: &str, seed: Option<i64>) -> PyResult<Self> {
        let algorithm: Algorithm = algorithm.parse().map_err(value_error)?;
        let inner = GeneratorConfig::for_algorithm(algorithm, seed.map(seed_from_py))
            .build()
            .map_err(value_error)?;
        Ok(PyRandom { inner })
    }

    /// Name of the active algorithm
    #[getter]
    fn algorithm(&self) -> &'static str {
        self.inner.algorithm().as_str()
    }

    /// Re-seed; `None` seeds from the wall clock
    #[pyo3(signature = (value = None))]
    fn seed(&mut self, value: Option<i64>) {
        let seed = value.map(seed_from_py).unwrap_or_else(Seed::from_system_time);
        self.inner.reseed(seed);
    }

    fn random(&mut self) -> f64 {
        self.inner.random()
    }

    fn randrange(&mut self, start: i64, stop: i64) -> PyResult<i64> {
        self.inner.randrange(start, stop).map_err(value_error)
    }

    fn randint(&mut self, a: i64, b: i64) -> PyResult<i64> {
        self.inner.randint(a, b).map_err(value_error)
    }

    fn randoms(&mut self, count: usize) -> Vec<f64> {
        self.inner.randoms(count).collect()
    }

    fn uniform(&mut self, a: f64, b: f64) -> f64 {
        self.inner.uniform(a, b)
    }

    fn __repr__(&self) -> String {
        format!("Random(algorithm='{}')", self.inner.algorithm())
    }
}
