//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the generator to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only the generator and its samplers cross over
//! 2. **Simple types**: Integers and floats at the boundary
//! 3. **Safe errors**: Every Rust error becomes a Python `ValueError`
//! 4. **No references**: Python gets copies of state, never references

pub mod generator;
