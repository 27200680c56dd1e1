//! Distribution samplers built on the raw 64-bit stream.
//!
//! All samplers draw through [`Xoshiro256::next`], so they consume whichever
//! output variant the generator was built with. Parameters are validated up
//! front and out-of-domain values are reported as [`RngError`] instead of
//! producing NaN.
//!
//! # Example
//!
//! ```
//! use xoshiro256_core_rs::Xoshiro256;
//!
//! let mut rng = Xoshiro256::from_seed_u64(42);
//! let u = rng.uniform(-1.0, 1.0).unwrap();
//! assert!(u > -1.0 && u < 1.0);
//!
//! let wait = rng.exponential(5.0).unwrap();
//! assert!(wait >= 0.0);
//!
//! let failures: u64 = rng.geometric(0.25).unwrap();
//! # let _ = failures;
//! ```

use log::trace;

use crate::rng::{RngError, Xoshiro256};

/// 2^64 - 1 as the divisor that maps a raw draw onto [0, 1]
const RAW_MAX: f64 = u64::MAX as f64;

impl Xoshiro256 {
    /// Uniform f64 in the open interval `(low, high)`
    ///
    /// Raw draws of 0 and 2^64-1 are rejected and redrawn, and so is any
    /// draw that rounds onto a bound, so the result is strictly inside.
    ///
    /// # Errors
    /// `RngError::InvalidInterval` if a bound is not finite, `low >= high`,
    /// the width overflows, or no f64 lies strictly between the bounds.
    pub fn uniform(&mut self, low: f64, high: f64) -> Result<f64, RngError> {
        check_interval(low, high)?;
        let width = high - low;

        loop {
            let n = self.next();
            if n == 0 || n == u64::MAX {
                trace!("uniform: rejected edge draw {:#x}", n);
                continue;
            }

            // Scale to [0, 1] first so wide intervals cannot overflow
            let value = low + width * (n as f64 / RAW_MAX);
            if value > low && value < high {
                return Ok(value);
            }
            trace!("uniform: draw {:#x} rounded onto a bound of ({}, {})", n, low, high);
        }
    }

    /// Exponential variate with the given mean, by inverse CDF
    ///
    /// # Errors
    /// `RngError::InvalidMean` unless `mean` is finite and positive.
    pub fn exponential(&mut self, mean: f64) -> Result<f64, RngError> {
        if !(mean.is_finite() && mean > 0.0) {
            return Err(RngError::InvalidMean(mean));
        }
        let r = self.uniform(0.0, 1.0)?;
        Ok(-mean * (-r).ln_1p())
    }

    /// Number of failures before the first success, each trial succeeding
    /// with probability `success`
    ///
    /// # Errors
    /// `RngError::InvalidSuccessProbability` unless `0 < success < 1`.
    /// `RngError::GeometricOverflow` if the drawn count does not fit in a
    /// u64, which only happens for `success` below roughly 1e-18.
    pub fn geometric(&mut self, success: f64) -> Result<u64, RngError> {
        if !(success > 0.0 && success < 1.0) {
            return Err(RngError::InvalidSuccessProbability(success));
        }
        let r = self.uniform(0.0, 1.0)?;
        let failures = (-1.0 + (-r).ln_1p() / (-success).ln_1p()).ceil();
        if failures >= u64::MAX as f64 {
            return Err(RngError::GeometricOverflow { success });
        }
        // -1 + ratio rounds to -1 when ratio is below f64 precision
        Ok(failures.max(0.0) as u64)
    }

    /// Uniform f64 in [0.0, 1.0) from the top 53 bits of one draw
    ///
    /// Uses only the high bits, so it suits the xoshiro256+ variant.
    pub fn next_f64(&mut self) -> f64 {
        (self.next() >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }
}

/// Reject intervals the rejection loop could never satisfy
fn check_interval(low: f64, high: f64) -> Result<(), RngError> {
    let width = high - low;
    let mid = low + width / 2.0;
    let valid = low.is_finite()
        && high.is_finite()
        && low < high
        && width.is_finite()
        && mid > low
        && mid < high;

    if valid {
        Ok(())
    } else {
        Err(RngError::InvalidInterval { low, high })
    }
}
