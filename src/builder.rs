//! Builder for the cache variants.
//!
//! Collects the configuration knobs — total size, shard count, hasher —
//! and produces whichever variant the call site needs, validating the
//! budget once in one place.
//!
//! ## Example
//!
//! ```
//! use shardlru::builder::CacheBuilder;
//!
//! let cache = CacheBuilder::new(1024)
//!     .shard_count(8)
//!     .build::<u64, String>()
//!     .unwrap();
//!
//! cache.insert(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some("hello".to_string()));
//! ```

use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::cache::{LruCache, DEFAULT_SHARD_COUNT};
use crate::error::ConfigError;
use crate::recycle::{
    ProjectedRecycleLruCache, RecycleLruCache, RecyclePayload, SharedRecycleQueue,
};

/// Configures and constructs a cache.
#[derive(Debug, Clone)]
pub struct CacheBuilder<H = FxBuildHasher> {
    max_size: usize,
    shard_count: usize,
    hasher: H,
}

impl CacheBuilder<FxBuildHasher> {
    /// Starts a builder for a cache bounded by roughly `max_size` entries.
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            shard_count: DEFAULT_SHARD_COUNT,
            hasher: FxBuildHasher,
        }
    }
}

impl<H> CacheBuilder<H>
where
    H: BuildHasher + Clone,
{
    /// Sets the shard count (clamped to at least 1 at build time).
    pub fn shard_count(mut self, shards: usize) -> Self {
        self.shard_count = shards;
        self
    }

    /// Swaps in a custom hasher; it drives both routing and the per-shard
    /// indexes.
    pub fn hasher<H2>(self, hasher: H2) -> CacheBuilder<H2>
    where
        H2: BuildHasher + Clone,
    {
        CacheBuilder {
            max_size: self.max_size,
            shard_count: self.shard_count,
            hasher,
        }
    }

    /// Builds the simple variant.
    pub fn build<K, V>(self) -> Result<LruCache<K, V, H>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        LruCache::with_shards_and_hasher(self.max_size, self.shard_count, self.hasher)
    }

    /// Builds the variant that recycles displaced values into `queue`.
    pub fn build_recycle<K, V>(
        self,
        queue: SharedRecycleQueue<V>,
    ) -> Result<RecycleLruCache<K, V, H>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        RecycleLruCache::with_shards_and_hasher(self.max_size, self.shard_count, self.hasher, queue)
    }

    /// Builds the variant that recycles a projection of displaced values
    /// into `queue`.
    pub fn build_projected<K, V>(
        self,
        queue: SharedRecycleQueue<V::Payload>,
    ) -> Result<ProjectedRecycleLruCache<K, V, H>, ConfigError>
    where
        K: Eq + Hash + Clone,
        V: RecyclePayload,
    {
        ProjectedRecycleLruCache::with_shards_and_hasher(
            self.max_size,
            self.shard_count,
            self.hasher,
            queue,
        )
    }
}
