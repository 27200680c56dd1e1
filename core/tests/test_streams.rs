//! Tests for parallel stream allocation

use std::collections::HashSet;
use std::thread;

use xoshiro256_core_rs::{JumpKind, StreamAllocator, Xoshiro256};

#[test]
fn test_split_streams_are_distinct() {
    let root = Xoshiro256::from_seed_u64(12345);
    let mut streams = root.split(8);

    let firsts: HashSet<u64> = streams.iter_mut().map(|rng| rng.next()).collect();
    assert_eq!(firsts.len(), 8, "Every stream should start differently");
}

#[test]
fn test_split_leaves_root_untouched() {
    let root = Xoshiro256::from_seed_u64(12345);
    let before = root.words();
    let _ = root.split(4);
    assert_eq!(root.words(), before);
}

#[test]
fn test_allocator_is_reproducible() {
    let root = Xoshiro256::from_seed_u64(777);
    let a: Vec<Xoshiro256> = StreamAllocator::new(&root, JumpKind::LongJump).take(5).collect();
    let b: Vec<Xoshiro256> = StreamAllocator::new(&root, JumpKind::LongJump).take(5).collect();
    assert_eq!(a, b);
}

#[test]
fn test_allocator_counts_streams() {
    let root = Xoshiro256::from_seed_u64(1);
    let mut alloc = StreamAllocator::new(&root, JumpKind::Jump);
    for _ in 0..3 {
        alloc.next();
    }
    assert_eq!(alloc.allocated(), 3);
}

#[test]
fn test_substream_hierarchy() {
    let root = Xoshiro256::from_seed_u64(42);

    let mut expected = root.clone();
    expected.long_jump();
    expected.long_jump();
    expected.jump();
    assert_eq!(root.substream(2, 1), expected);

    // Stream 1 subsequence 0 is the second long-jump stream
    let long_streams: Vec<Xoshiro256> = StreamAllocator::new(&root, JumpKind::LongJump)
        .take(2)
        .collect();
    assert_eq!(root.substream(1, 0), long_streams[1]);
}

#[test]
fn test_streams_keep_root_variant() {
    let root = Xoshiro256::plus([1, 2, 3, 4]).unwrap();
    for rng in root.split(3) {
        assert_eq!(rng.variant(), root.variant());
    }
}

#[test]
fn test_workers_own_their_streams() {
    let root = Xoshiro256::from_seed_u64(99);
    let expected: Vec<u64> = root
        .split(4)
        .into_iter()
        .map(|mut rng| (0..1000).map(|_| rng.next()).fold(0u64, u64::wrapping_add))
        .collect();

    let handles: Vec<_> = root
        .split(4)
        .into_iter()
        .map(|mut rng| {
            thread::spawn(move || (0..1000).map(|_| rng.next()).fold(0u64, u64::wrapping_add))
        })
        .collect();

    let actual: Vec<u64> = handles
        .into_iter()
        .map(|h| h.join().expect("worker panicked"))
        .collect();
    assert_eq!(actual, expected, "Parallel results must match sequential ones");
}
