//! PyO3 wrapper for Xoshiro256

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::rng::{OutputVariant, RngError, Xoshiro256};

fn to_py_err(err: RngError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn variant(plus: bool) -> OutputVariant {
    if plus {
        OutputVariant::Plus
    } else {
        OutputVariant::StarStar
    }
}

/// Python wrapper for the Rust generator
///
/// # Example (from Python)
///
/// ```python
/// from xoshiro256_core_rs import Xoshiro256
///
/// rng = Xoshiro256.new(42)
/// workers = []
/// for _ in range(4):
///     workers.append(rng.copy())
///     rng.jump()
/// print(workers[0].uniform(0.0, 1.0))
/// ```
#[pyclass(name = "Xoshiro256")]
pub struct PyXoshiro256 {
    inner: Xoshiro256,
}

#[pymethods]
impl PyXoshiro256 {
    /// Create a generator by expanding one seed
    #[staticmethod]
    #[pyo3(signature = (seed, plus = false))]
    fn new(seed: u64, plus: bool) -> Self {
        PyXoshiro256 {
            inner: Xoshiro256::from_seed_with_variant(seed, variant(plus)),
        }
    }

    /// Create a generator from four explicit state words
    ///
    /// Raises ValueError if all four words are zero.
    #[staticmethod]
    #[pyo3(signature = (s0, s1, s2, s3, plus = false))]
    fn from_words(s0: u64, s1: u64, s2: u64, s3: u64, plus: bool) -> PyResult<Self> {
        let inner = Xoshiro256::with_variant([s0, s1, s2, s3], variant(plus)).map_err(to_py_err)?;
        Ok(PyXoshiro256 { inner })
    }

    /// Next raw 64-bit output
    fn next(&mut self) -> u64 {
        self.inner.next()
    }

    fn uniform(&mut self, low: f64, high: f64) -> PyResult<f64> {
        self.inner.uniform(low, high).map_err(to_py_err)
    }

    fn exponential(&mut self, mean: f64) -> PyResult<f64> {
        self.inner.exponential(mean).map_err(to_py_err)
    }

    fn geometric(&mut self, success: f64) -> PyResult<u64> {
        self.inner.geometric(success).map_err(to_py_err)
    }

    fn jump(&mut self) {
        self.inner.jump();
    }

    fn long_jump(&mut self) {
        self.inner.long_jump();
    }

    /// Independent copy with identical state
    fn copy(&self) -> Self {
        PyXoshiro256 {
            inner: self.inner.clone(),
        }
    }

    /// State words as a tuple (s0, s1, s2, s3)
    fn state(&self) -> (u64, u64, u64, u64) {
        let [s0, s1, s2, s3] = self.inner.words();
        (s0, s1, s2, s3)
    }

    fn __repr__(&self) -> String {
        format!("Xoshiro256({})", self.inner)
    }
}
