//! Deterministic key-to-shard routing.
//!
//! Maps any `Hash`able key to a shard index in `[0, shards)` using a
//! caller-supplied [`BuildHasher`]. A key's shard depends only on its hash,
//! so the mapping is stable for the lifetime of the router: capacity
//! rebalancing never restripes keys across shards.
//!
//! Properties
//! ──────────
//! • Deterministic: same (key, hasher, shards) always yields the same shard
//! • Uniform: keys spread evenly across shards, given a good `Hash` impl
//! • Cross-shard collisions are impossible by construction; within a shard,
//!   the index's own equality resolves them

use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

/// Routes keys to shards via `hash(key) % shards`.
#[derive(Debug, Clone)]
pub struct ShardRouter<H = FxBuildHasher> {
    shards: usize,
    hasher: H,
}

impl ShardRouter<FxBuildHasher> {
    /// Creates a router for `shards` shards with the default hasher.
    ///
    /// The shard count is clamped to at least 1.
    pub fn new(shards: usize) -> Self {
        Self::with_hasher(shards, FxBuildHasher)
    }
}

impl<H: BuildHasher> ShardRouter<H> {
    /// Creates a router for `shards` shards with a custom hasher.
    ///
    /// The shard count is clamped to at least 1.
    pub fn with_hasher(shards: usize, hasher: H) -> Self {
        Self {
            shards: shards.max(1),
            hasher,
        }
    }

    /// Returns the number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards
    }

    /// Maps a key to a shard index in `[0, shards)`.
    pub fn shard_for_key<K: Hash + ?Sized>(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) as usize) % self.shards
    }
}

impl Default for ShardRouter<FxBuildHasher> {
    /// Creates a single-shard router.
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_is_deterministic() {
        let router = ShardRouter::new(8);

        let a = router.shard_for_key("key");
        let b = router.shard_for_key("key");
        assert_eq!(a, b);
        assert!(a < router.shard_count());
    }

    #[test]
    fn zero_shards_clamps_to_one() {
        let router = ShardRouter::new(0);
        assert_eq!(router.shard_count(), 1);
        assert_eq!(router.shard_for_key(&42u64), 0);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: same key always returns the same shard.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_deterministic_mapping(
            shard_count in 1usize..64,
            key in any::<u32>()
        ) {
            let router = ShardRouter::new(shard_count);

            let shard1 = router.shard_for_key(&key);
            let shard2 = router.shard_for_key(&key);

            prop_assert_eq!(shard1, shard2);
        }

        /// Property: shard index is always in range.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_shard_in_range(
            shard_count in 1usize..128,
            keys in prop::collection::vec(any::<u64>(), 0..100)
        ) {
            let router = ShardRouter::new(shard_count);

            for key in keys {
                prop_assert!(router.shard_for_key(&key) < shard_count);
            }
        }

        /// Property: a single shard receives every key.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_single_shard_returns_zero(
            keys in prop::collection::vec(any::<u32>(), 0..50)
        ) {
            let router = ShardRouter::new(1);

            for key in keys {
                prop_assert_eq!(router.shard_for_key(&key), 0);
            }
        }

        /// Property: with enough distinct keys, more than one shard is used.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_keys_spread_across_shards(shard_count in 2usize..16) {
            let router = ShardRouter::new(shard_count);

            let mut used = vec![false; shard_count];
            for key in 0u64..(shard_count as u64 * 32) {
                used[router.shard_for_key(&key)] = true;
            }

            prop_assert!(used.iter().filter(|u| **u).count() > 1);
        }
    }
}
