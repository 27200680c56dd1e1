//! xoshiro256** / xoshiro256+ generator
//!
//! One `CoreState` paired with an output variant chosen at construction.
//! Both variants share the state transition; the variant only selects which
//! function of the pre-update state is returned.
//!
//! # Determinism
//!
//! Same words + same variant → same sequence of outputs. Reproducible runs
//! construct from explicit words or a fixed seed; time-seeded construction
//! lives in [`crate::entropy`].

use std::fmt;

use log::debug;
use rand_core::{impls, Error, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{CoreState, RngError};

/// Output transform applied to the pre-update state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputVariant {
    /// xoshiro256**: `rotl(s1 * 5, 7) * 9`, all bits high quality
    #[default]
    StarStar,

    /// xoshiro256+: `s0 + s3`, faster but weak in the lowest three bits.
    /// Intended for floating-point generation from the high bits.
    Plus,
}

impl OutputVariant {
    #[inline]
    fn output(self, state: &CoreState) -> u64 {
        match self {
            OutputVariant::StarStar => state.star_star(),
            OutputVariant::Plus => state.plus(),
        }
    }
}

impl fmt::Display for OutputVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputVariant::StarStar => write!(f, "xoshiro256**"),
            OutputVariant::Plus => write!(f, "xoshiro256+"),
        }
    }
}

/// Deterministic 256-bit generator
///
/// Not safe for concurrent use; parallel work should give each worker its own
/// copy produced by [`crate::StreamAllocator`].
///
/// # Example
/// ```
/// use xoshiro256_core_rs::Xoshiro256;
///
/// let mut rng = Xoshiro256::new([1, 2, 3, 4]).unwrap();
/// assert_eq!(rng.next(), 11520);
/// assert_eq!(rng.next(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro256 {
    state: CoreState,
    variant: OutputVariant,
}

impl Xoshiro256 {
    /// Smallest value `next` can return
    pub const MIN: u64 = 0;

    /// Largest value `next` can return
    pub const MAX: u64 = u64::MAX;

    /// Create a xoshiro256** generator from four explicit state words
    ///
    /// # Errors
    /// Returns `RngError::ZeroState` if every word is zero.
    pub fn new(words: [u64; 4]) -> Result<Self, RngError> {
        Self::with_variant(words, OutputVariant::StarStar)
    }

    /// Create a xoshiro256+ generator from four explicit state words
    ///
    /// # Errors
    /// Returns `RngError::ZeroState` if every word is zero.
    pub fn plus(words: [u64; 4]) -> Result<Self, RngError> {
        Self::with_variant(words, OutputVariant::Plus)
    }

    /// Create a generator with an explicit variant
    ///
    /// # Errors
    /// Returns `RngError::ZeroState` if every word is zero.
    pub fn with_variant(words: [u64; 4], variant: OutputVariant) -> Result<Self, RngError> {
        let state = CoreState::new(words)?;
        debug!("Created {} generator from explicit words", variant);
        Ok(Self { state, variant })
    }

    /// Create a xoshiro256** generator by expanding one seed through SplitMix64
    ///
    /// # Example
    /// ```
    /// use xoshiro256_core_rs::Xoshiro256;
    ///
    /// let mut a = Xoshiro256::from_seed_u64(42);
    /// let mut b = Xoshiro256::from_seed_u64(42);
    /// assert_eq!(a.next(), b.next());
    /// ```
    pub fn from_seed_u64(seed: u64) -> Self {
        Self::from_seed_with_variant(seed, OutputVariant::StarStar)
    }

    /// Expand one seed through SplitMix64 with an explicit variant
    pub fn from_seed_with_variant(seed: u64, variant: OutputVariant) -> Self {
        debug!("Created {} generator from seed {}", variant, seed);
        Self {
            state: CoreState::from_seed(seed),
            variant,
        }
    }

    /// Wrap an existing state
    pub fn from_state(state: CoreState, variant: OutputVariant) -> Self {
        Self { state, variant }
    }

    /// Generate the next u64
    ///
    /// The output is computed from the state before the transition, then the
    /// state advances.
    #[inline]
    pub fn next(&mut self) -> u64 {
        let result = self.variant.output(&self.state);
        self.state.advance();
        result
    }

    pub fn min(&self) -> u64 {
        Self::MIN
    }

    pub fn max(&self) -> u64 {
        Self::MAX
    }

    /// Output variant fixed at construction
    pub fn variant(&self) -> OutputVariant {
        self.variant
    }

    /// Current state (copy)
    pub fn state(&self) -> CoreState {
        self.state
    }

    /// Current state words
    pub fn words(&self) -> [u64; 4] {
        self.state.words()
    }

    pub(crate) fn state_mut(&mut self) -> &mut CoreState {
        &mut self.state
    }
}

impl fmt::Display for Xoshiro256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [s0, s1, s2, s3] = self.words();
        write!(
            f,
            "{} [{:#018x}, {:#018x}, {:#018x}, {:#018x}]",
            self.variant, s0, s1, s2, s3
        )
    }
}

impl RngCore for Xoshiro256 {
    /// Upper 32 bits, which are the strongest for both variants
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

impl SeedableRng for Xoshiro256 {
    type Seed = [u8; 32];

    /// Read the seed as four little-endian words (xoshiro256** variant)
    ///
    /// The trait is infallible, so an all-zero seed falls back to
    /// `seed_from_u64(0)` instead of reporting `ZeroState`.
    fn from_seed(seed: [u8; 32]) -> Self {
        let mut words = [0u64; 4];
        for (word, chunk) in words.iter_mut().zip(seed.chunks_exact(8)) {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            *word = u64::from_le_bytes(bytes);
        }
        match CoreState::new(words) {
            Ok(state) => Self::from_state(state, OutputVariant::StarStar),
            Err(_) => Self::seed_from_u64(0),
        }
    }

    fn seed_from_u64(seed: u64) -> Self {
        Self::from_seed_u64(seed)
    }
}
