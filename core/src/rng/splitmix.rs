//! SplitMix64 seed expander
//!
//! Expands a single 64-bit seed into a stream of well-mixed 64-bit values.
//! Any seed is acceptable, including zero: the golden-gamma increment is odd,
//! so the internal counter visits all 2^64 residues before repeating.

use rand_core::{impls, Error, RngCore};

/// Golden-gamma increment (odd, so the counter has full period)
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Fixed-increment SplitMix64 generator
///
/// # Example
/// ```
/// use xoshiro256_core_rs::SplitMix64;
///
/// let mut seeder = SplitMix64::new(0);
/// assert_eq!(seeder.next(), 0xe220_a839_7b1d_cdaf);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    x: u64,
}

impl SplitMix64 {
    /// Smallest value `next` can return
    pub const MIN: u64 = 0;

    /// Largest value `next` can return
    pub const MAX: u64 = u64::MAX;

    pub fn new(seed: u64) -> Self {
        Self { x: seed }
    }

    /// Advance the counter and return the mixed value
    pub fn next(&mut self) -> u64 {
        self.x = self.x.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.x;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Four consecutive outputs, in order
    pub fn next_words(&mut self) -> [u64; 4] {
        [self.next(), self.next(), self.next(), self.next()]
    }

    pub fn min(&self) -> u64 {
        Self::MIN
    }

    pub fn max(&self) -> u64 {
        Self::MAX
    }
}

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        (self.next() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
