//! Tests for the deterministic stream

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::stream::{bucket, stream};

#[test]
fn test_determinism() {
    assert_eq!(stream(42, 0).to_bits(), stream(42, 0).to_bits());
    assert_eq!(stream(100, 5).to_bits(), stream(100, 5).to_bits());
    assert_eq!(stream(-7, 3).to_bits(), stream(-7, 3).to_bits());
}

#[test]
fn test_determinism_under_repetition() {
    // The value for a fixed pair never drifts, however often it is drawn.
    let first = stream(42, 0);
    for _ in 0..1000 {
        assert_eq!(stream(42, 0).to_bits(), first.to_bits());
    }
}

#[test]
fn test_range_over_sampled_inputs() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    for _ in 0..10_000 {
        let seed: i64 = rng.random();
        let index: i64 = rng.random_range(-1000..1000);
        let v = stream(seed, index);
        assert!((0.0..1.0).contains(&v), "stream({seed}, {index}) = {v}");
    }
}

#[test]
fn test_range_at_extremes() {
    for seed in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX] {
        for index in [i64::MIN, -1, 0, 1, i64::MAX] {
            let v = stream(seed, index);
            assert!(v.is_finite());
            assert!((0.0..1.0).contains(&v));
        }
    }
}

#[test]
fn test_different_seeds_differ() {
    assert_ne!(stream(1, 0), stream(2, 0));
    assert_ne!(stream(42, 0), stream(43, 0));
}

#[test]
fn test_index_sensitivity_statistical() {
    // Consecutive indices should almost always produce different values.
    // Statistical, not universal: the contract asks for >= 95%.
    let mut rng = ChaChaRng::seed_from_u64(7);
    let mut same = 0;
    let total = 2000;
    for _ in 0..total {
        let seed: i64 = rng.random_range(-1_000_000..1_000_000);
        let i: i64 = rng.random_range(0..1000);
        if stream(seed, i) == stream(seed, i + 1) {
            same += 1;
        }
    }
    assert!(
        (same as f64) < (total as f64) * 0.05,
        "{same}/{total} consecutive draws collided"
    );
}

#[test]
fn test_bucket_bounds() {
    assert_eq!(bucket(0.0, 16), 0);
    assert_eq!(bucket(0.999_999, 16), 15);
    // The 1.0 endpoint is unreachable from `stream`, but the clamp keeps
    // the mapping total anyway.
    assert_eq!(bucket(1.0, 16), 15);
}

#[test]
fn test_bucket_spreads_over_vocabulary() {
    let mut seen = [false; 8];
    for i in 0..200 {
        seen[bucket(stream(i, 0), 8)] = true;
    }
    assert!(seen.iter().all(|&s| s), "200 draws left a bucket empty");
}
