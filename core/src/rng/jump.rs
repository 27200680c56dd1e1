//! Jump and long-jump
//!
//! Advances the state by 2^128 (jump) or 2^192 (long-jump) steps without
//! iterating. The transition is linear over GF(2), so the jumped state is a
//! XOR-combination of the next 256 states selected by a fixed polynomial mask.
//!
//! Long-jump equals 2^64 jumps: long-jump yields 2^64 starting points, and
//! jump splits each of them into 2^64 non-overlapping subsequences.

use log::debug;

use super::{CoreState, Xoshiro256};

const JUMP: [u64; 4] = [
    0x180e_c6d3_3cfd_0aba,
    0xd5a6_1266_f0c9_392c,
    0xa958_2618_e03f_c9aa,
    0x39ab_dc45_29b1_661c,
];

const LONG_JUMP: [u64; 4] = [
    0x76e1_5d3e_fefd_cbbf,
    0xc500_4e44_1c52_2fb3,
    0x7771_0069_854e_e241,
    0x3910_9bb0_2acb_e635,
];

/// Size of a stream-partitioning step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpKind {
    /// 2^128 steps
    Jump,
    /// 2^192 steps
    LongJump,
}

impl JumpKind {
    fn mask(self) -> &'static [u64; 4] {
        match self {
            JumpKind::Jump => &JUMP,
            JumpKind::LongJump => &LONG_JUMP,
        }
    }
}

impl CoreState {
    /// Replace the state with the one `kind` steps ahead
    ///
    /// Walks the 256 mask bits from the first word's least-significant bit.
    /// For each set bit the current state is XORed into the accumulator; the
    /// state advances once per bit regardless.
    pub fn jump_by(&mut self, kind: JumpKind) {
        let mut acc = CoreState::accumulator();
        for &word in kind.mask() {
            for bit in 0..64 {
                if word & (1u64 << bit) != 0 {
                    acc.xor_assign(self);
                }
                self.advance();
            }
        }
        *self = acc;
    }
}

impl Xoshiro256 {
    /// Advance by 2^128 outputs
    ///
    /// # Example
    /// ```
    /// use xoshiro256_core_rs::Xoshiro256;
    ///
    /// let root = Xoshiro256::from_seed_u64(7);
    /// let mut worker = root.clone();
    /// worker.jump();
    /// assert_ne!(worker.words(), root.words());
    /// ```
    pub fn jump(&mut self) {
        self.jump_by(JumpKind::Jump);
    }

    /// Advance by 2^192 outputs
    pub fn long_jump(&mut self) {
        self.jump_by(JumpKind::LongJump);
    }

    /// Advance by the step size named by `kind`
    pub fn jump_by(&mut self, kind: JumpKind) {
        self.state_mut().jump_by(kind);
        debug!("Applied {:?} to {} generator", kind, self.variant());
    }
}
