//! Parallel stream allocation.
//!
//! A coordinator builds one root generator and derives one independent
//! generator per worker by jumping copies of the root. Each worker then owns
//! its copy outright; no synchronization is needed between workers.
//!
//! # Key Principles
//!
//! 1. **Non-overlap**: consecutive streams are 2^128 (jump) or 2^192
//!    (long-jump) outputs apart
//! 2. **Reproducibility**: stream `i` is always the root jumped `i` times
//! 3. **Ownership**: the root is never mutated; every stream is a fresh copy
//!
//! # Example
//!
//! ```
//! use xoshiro256_core_rs::{JumpKind, StreamAllocator, Xoshiro256};
//!
//! let root = Xoshiro256::from_seed_u64(2024);
//! let workers: Vec<Xoshiro256> = StreamAllocator::new(&root, JumpKind::Jump)
//!     .take(4)
//!     .collect();
//! assert_eq!(workers[0], root);
//! ```

use log::debug;

use crate::rng::{JumpKind, Xoshiro256};

/// Hands out jump-spaced copies of a root generator
#[derive(Debug, Clone)]
pub struct StreamAllocator {
    cursor: Xoshiro256,
    kind: JumpKind,
    allocated: usize,
}

impl StreamAllocator {
    /// Start allocating from a copy of `root`
    pub fn new(root: &Xoshiro256, kind: JumpKind) -> Self {
        Self {
            cursor: root.clone(),
            kind,
            allocated: 0,
        }
    }

    /// Number of streams handed out so far
    pub fn allocated(&self) -> usize {
        self.allocated
    }
}

impl Iterator for StreamAllocator {
    type Item = Xoshiro256;

    fn next(&mut self) -> Option<Self::Item> {
        let stream = self.cursor.clone();
        self.cursor.jump_by(self.kind);
        self.allocated += 1;
        Some(stream)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl Xoshiro256 {
    /// The first `n` jump-spaced generators, starting with a copy of `self`
    pub fn split(&self, n: usize) -> Vec<Xoshiro256> {
        debug!("Splitting {} generator into {} streams", self.variant(), n);
        StreamAllocator::new(self, JumpKind::Jump).take(n).collect()
    }

    /// Subsequence `subsequence` of stream `stream` in the two-level hierarchy
    ///
    /// Long-jumps `stream` times, then jumps `subsequence` times, on a copy.
    pub fn substream(&self, stream: usize, subsequence: usize) -> Xoshiro256 {
        let mut rng = self.clone();
        for _ in 0..stream {
            rng.long_jump();
        }
        for _ in 0..subsequence {
            rng.jump();
        }
        rng
    }
}
