//! Tests for deterministic generation
//!
//! CRITICAL: Same state + same variant MUST produce the same sequence.

use proptest::prelude::*;
use xoshiro256_core_rs::{CoreState, OutputVariant, RngError, Xoshiro256};

#[test]
fn test_rng_new_with_words() {
    let rng = Xoshiro256::new([12345, 0, 0, 0]).unwrap();
    assert_eq!(rng.words(), [12345, 0, 0, 0]);
}

#[test]
fn test_rng_zero_state_rejected() {
    assert_eq!(Xoshiro256::new([0, 0, 0, 0]), Err(RngError::ZeroState));
}

#[test]
fn test_rng_different_seeds_different_sequences() {
    let mut rng1 = Xoshiro256::from_seed_u64(12345);
    let mut rng2 = Xoshiro256::from_seed_u64(54321);

    assert_ne!(
        rng1.next(),
        rng2.next(),
        "Different seeds should produce different values"
    );
}

#[test]
fn test_rng_state_advances() {
    let mut rng = Xoshiro256::from_seed_u64(12345);
    let initial_state = rng.words();

    rng.next();

    assert_ne!(initial_state, rng.words(), "RNG state should advance");
}

#[test]
fn test_rng_replay_from_state() {
    let mut rng1 = Xoshiro256::from_seed_u64(12345);

    for _ in 0..10 {
        rng1.next();
    }

    let checkpoint = rng1.words();

    let val1_a = rng1.next();
    let val1_b = rng1.next();

    // Create new RNG from checkpoint
    let mut rng2 = Xoshiro256::new(checkpoint).unwrap();

    assert_eq!(val1_a, rng2.next());
    assert_eq!(val1_b, rng2.next());
}

#[test]
fn test_rng_replay_from_core_state() {
    let mut rng1 = Xoshiro256::from_seed_with_variant(8, OutputVariant::Plus);
    rng1.next();
    let mut rng2 = Xoshiro256::from_state(rng1.state(), rng1.variant());

    for _ in 0..100 {
        assert_eq!(rng1.next(), rng2.next());
    }
}

#[test]
fn test_rng_clone_is_independent() {
    let mut original = Xoshiro256::from_seed_u64(7);
    let copy = original.clone();

    original.next();

    assert_ne!(original.words(), copy.words(), "Copies must not alias state");
}

#[test]
fn test_rng_long_sequence_determinism() {
    let mut rng1 = Xoshiro256::from_seed_u64(42);
    let mut rng2 = Xoshiro256::from_seed_u64(42);

    for i in 0..1000 {
        let val1 = rng1.next();
        let val2 = rng2.next();
        assert_eq!(
            val1, val2,
            "Determinism broken at iteration {}: {} != {}",
            i, val1, val2
        );
    }
}

#[test]
fn test_core_state_rejects_only_all_zero() {
    assert!(CoreState::new([0, 0, 0, 1]).is_ok());
    assert_eq!(CoreState::new([0; 4]), Err(RngError::ZeroState));
}

proptest! {
    #[test]
    fn prop_same_seed_same_sequence(seed in any::<u64>()) {
        let mut rng1 = Xoshiro256::from_seed_u64(seed);
        let mut rng2 = Xoshiro256::from_seed_u64(seed);

        for _ in 0..100 {
            prop_assert_eq!(rng1.next(), rng2.next());
        }
    }

    #[test]
    fn prop_nonzero_words_never_collapse(words in any::<[u64; 4]>()) {
        prop_assume!(words != [0; 4]);
        let mut rng = Xoshiro256::new(words).unwrap();

        for _ in 0..100 {
            rng.next();
            prop_assert_ne!(rng.words(), [0; 4]);
        }
    }

    #[test]
    fn prop_variants_advance_identically(words in any::<[u64; 4]>()) {
        prop_assume!(words != [0; 4]);
        let mut star = Xoshiro256::new(words).unwrap();
        let mut plus = Xoshiro256::plus(words).unwrap();

        for _ in 0..20 {
            star.next();
            plus.next();
        }
        prop_assert_eq!(star.words(), plus.words());
    }
}
