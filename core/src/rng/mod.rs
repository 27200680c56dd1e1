//! Deterministic random number generation
//!
//! Uses xoshiro256** (default) or xoshiro256+ over a 256-bit state, seeded
//! through SplitMix64.
//! CRITICAL: Every output and every jump is a pure function of the state.

mod jump;
mod splitmix;
mod state;
mod xoshiro;

pub use jump::JumpKind;
pub use splitmix::SplitMix64;
pub use state::CoreState;
pub use xoshiro::{OutputVariant, Xoshiro256};

use thiserror::Error;

/// Errors reported by generator construction and the samplers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RngError {
    #[error("State words are all zero; the generator would only ever return zero")]
    ZeroState,

    #[error("Invalid interval ({low}, {high}): no value lies strictly between the bounds")]
    InvalidInterval { low: f64, high: f64 },

    #[error("Exponential mean must be finite and positive, got {0}")]
    InvalidMean(f64),

    #[error("Success probability must lie in (0, 1), got {0}")]
    InvalidSuccessProbability(f64),

    #[error("Geometric draw with success probability {success} exceeds u64::MAX failures")]
    GeometricOverflow { success: f64 },
}
