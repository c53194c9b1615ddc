//! Stickiness calculation: deterministic bucketing of identities.

use std::io::Cursor;

/// Computes the bucket an identity falls into for a rollout group.
pub trait StickinessCalculator {
    /// Returns a bucket in `[1, normalizer]` for the given identity and group.
    ///
    /// Must be deterministic: for fixed inputs the result is bit-for-bit identical across
    /// processes, machines, and implementations. Callers guarantee `normalizer >= 1`.
    fn calculate(&self, identity: &str, group_id: &str, normalizer: u32) -> u32;
}

/// The default (and only) calculator: MurmurHash3 x86 32-bit with seed 0.
///
/// The seed string is `groupId:identity` — literal colon, no escaping. This layout and the hash
/// function are the cross-implementation compatibility contract: every client evaluating the same
/// rollout for the same identity must agree on the bucket. Distinct `(groupId, identity)` pairs
/// that concatenate to the same seed collide; that is documented behavior, not a bug to fix.
pub struct MurmurStickiness;

impl StickinessCalculator for MurmurStickiness {
    fn calculate(&self, identity: &str, group_id: &str, normalizer: u32) -> u32 {
        debug_assert!(normalizer >= 1, "normalizer must be a positive integer");
        let seed = format!("{group_id}:{identity}");
        // there are no error paths when reading from an in-memory cursor
        let hash = murmur3::murmur3_32(&mut Cursor::new(&seed), 0)
            .expect("failed to calculate hash");
        hash % normalizer + 1
    }
}

#[cfg(test)]
mod tests {
    use rand::distributions::{Alphanumeric, DistString};
    use rand::prelude::*;

    use super::{MurmurStickiness, StickinessCalculator};

    // Pinned from a reference run of MurmurHash3 x86-32 with seed 0. These values must never
    // change: interoperating clients in other languages assert the same ones.
    #[test]
    fn golden_vectors() {
        let calculator = MurmurStickiness;
        assert_eq!(calculator.calculate("123", "group1", 100), 47);
        assert_eq!(calculator.calculate("123", "gr1", 100), 73);
        assert_eq!(calculator.calculate("user-42", "my-toggle", 100), 80);
        assert_eq!(calculator.calculate("42", "toggleName", 100), 46);
        assert_eq!(calculator.calculate("session-1", "my-toggle", 100), 6);
        assert_eq!(calculator.calculate("user-42", "my-toggle", 10000), 4880);
    }

    #[test]
    fn colliding_seeds_bucket_identically() {
        let calculator = MurmurStickiness;
        // both concatenate to "a:b:c"
        let left = calculator.calculate("c", "a:b", 100);
        let right = calculator.calculate("b:c", "a", 100);
        assert_eq!(left, right);
        assert_eq!(left, 98);
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let calculator = MurmurStickiness;
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let identity = Alphanumeric.sample_string(&mut rng, 12);
            let group_id = Alphanumeric.sample_string(&mut rng, 8);
            let first = calculator.calculate(&identity, &group_id, 100);
            assert_eq!(first, calculator.calculate(&identity, &group_id, 100));
        }
    }

    #[test]
    fn buckets_stay_within_range() {
        let calculator = MurmurStickiness;
        let mut rng = StdRng::seed_from_u64(42);
        for normalizer in [1, 2, 7, 100, 1000] {
            for _ in 0..100 {
                let identity = Alphanumeric.sample_string(&mut rng, 16);
                let bucket = calculator.calculate(&identity, "group", normalizer);
                assert!(
                    (1..=normalizer).contains(&bucket),
                    "bucket {bucket} out of [1, {normalizer}]"
                );
            }
        }
    }

    #[test]
    fn normalizer_of_one_always_buckets_to_one() {
        let calculator = MurmurStickiness;
        assert_eq!(calculator.calculate("user-42", "my-toggle", 1), 1);
        assert_eq!(calculator.calculate("123", "group1", 1), 1);
    }

    #[test]
    fn identity_with_multibyte_characters_hashes_over_utf8_bytes() {
        let calculator = MurmurStickiness;
        let bucket = calculator.calculate("användare-å", "grupp", 100);
        assert_eq!(bucket, calculator.calculate("användare-å", "grupp", 100));
        assert!((1..=100).contains(&bucket));
    }
}
