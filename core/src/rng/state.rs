//! 256-bit generator state and its transition function
//!
//! The transition is shared by both output variants; only the function of the
//! pre-update state that gets returned differs between them.

use super::{RngError, SplitMix64};

/// Four 64-bit state words `(s0, s1, s2, s3)`
///
/// Invariant: never all zero. The all-zero state is a fixed point of the
/// transition and would yield a constant-zero stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoreState {
    s: [u64; 4],
}

impl CoreState {
    /// Create a state from four explicit words
    ///
    /// # Errors
    /// Returns `RngError::ZeroState` if every word is zero.
    ///
    /// # Example
    /// ```
    /// use xoshiro256_core_rs::{CoreState, RngError};
    ///
    /// assert!(CoreState::new([1, 2, 3, 4]).is_ok());
    /// assert_eq!(CoreState::new([0; 4]), Err(RngError::ZeroState));
    /// ```
    pub fn new(words: [u64; 4]) -> Result<Self, RngError> {
        if words == [0; 4] {
            return Err(RngError::ZeroState);
        }
        Ok(Self { s: words })
    }

    /// Expand a single seed through four SplitMix64 calls
    ///
    /// Four consecutive SplitMix64 outputs are never all zero (the mixer is a
    /// bijection of distinct counter values), so this cannot fail.
    pub fn from_seed(seed: u64) -> Self {
        let mut seeder = SplitMix64::new(seed);
        Self {
            s: seeder.next_words(),
        }
    }

    /// Current state words
    pub fn words(&self) -> [u64; 4] {
        self.s
    }

    /// Apply one state transition
    #[inline]
    pub fn advance(&mut self) {
        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;

        self.s[3] = self.s[3].rotate_left(45);
    }

    /// xoshiro256** scrambler: `rotl(s1 * 5, 7) * 9`
    #[inline]
    pub fn star_star(&self) -> u64 {
        self.s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9)
    }

    /// xoshiro256+ scrambler: `s0 + s3`
    #[inline]
    pub fn plus(&self) -> u64 {
        self.s[0].wrapping_add(self.s[3])
    }

    /// XOR another state into this one, word by word
    ///
    /// Used by the jump accumulator, which may legitimately pass through the
    /// zero state before it is complete.
    #[inline]
    pub(crate) fn xor_assign(&mut self, other: &CoreState) {
        for (word, other_word) in self.s.iter_mut().zip(other.s.iter()) {
            *word ^= *other_word;
        }
    }

    /// Empty jump accumulator
    pub(crate) fn accumulator() -> Self {
        Self { s: [0; 4] }
    }
}
