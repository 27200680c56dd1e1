//! Xoshiro256 Core - Rust Engine
//!
//! Deterministic 256-bit pseudo-random number engine with stream partitioning.
//!
//! # Architecture
//!
//! - **rng**: SplitMix64 seed expansion, the 256-bit state, the two output
//!   variants (xoshiro256** and xoshiro256+) and jump/long-jump
//! - **sampling**: Uniform, exponential and geometric samplers
//! - **streams**: Non-overlapping generators for parallel workers
//! - **config**: Serde-driven generator configuration
//! - **entropy**: Time-derived seeds for non-reproducible runs
//! - **debug**: Binary formatting and human-readable state dumps
//!
//! # Critical Invariants
//!
//! 1. The state is never all-zero (rejected at construction)
//! 2. Same state + same variant → same sequence, on every platform
//! 3. All integer arithmetic wraps modulo 2^64
//! 4. The core never reads the clock; only `entropy` does

// Module declarations
pub mod config;
pub mod debug;
pub mod entropy;
pub mod rng;
pub mod sampling;
pub mod streams;

// Re-exports for convenience
pub use config::{ConfigError, GeneratorConfig, SeedSource};
pub use debug::{format_binary, StateDump};
pub use rng::{CoreState, JumpKind, OutputVariant, RngError, SplitMix64, Xoshiro256};
pub use streams::StreamAllocator;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

/// Render a u64 as its 64-digit binary string.
#[cfg(feature = "pyo3")]
#[pyfunction]
#[pyo3(name = "format_binary")]
fn py_format_binary(x: u64) -> String {
    debug::format_binary(x)
}

#[cfg(feature = "pyo3")]
#[pymodule]
fn xoshiro256_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyXoshiro256>()?;
    m.add_function(wrap_pyfunction!(py_format_binary, m)?)?;
    Ok(())
}
