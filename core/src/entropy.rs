//! Time-derived seeds for non-reproducible runs.
//!
//! The only place in the crate that reads the clock. Everything else takes an
//! explicit seed or state.

use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;

use crate::rng::{OutputVariant, Xoshiro256};

/// Nanoseconds since the Unix epoch, truncated to 64 bits
///
/// Falls back to 0 (still a valid SplitMix64 seed) if the clock reads before
/// the epoch.
pub fn time_seed() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_nanos() as u64,
        Err(err) => {
            warn!("System clock is before the Unix epoch ({}); seeding with 0", err);
            0
        }
    }
}

/// Generator seeded from the current time
pub fn from_time(variant: OutputVariant) -> Xoshiro256 {
    Xoshiro256::from_seed_with_variant(time_seed(), variant)
}
