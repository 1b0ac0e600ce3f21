//! Sharded concurrent LRU cache.
//!
//! Composes a [`ShardedMap`] — S independently locked
//! `(index, recency list)` shards — behind the small surface of a bounded
//! associative cache. Each operation touches exactly one shard, and each
//! shard serializes its own operations, so threads working on different
//! keys mostly proceed in parallel.
//!
//! ## Capacity model
//!
//! The total bound is approximate: every shard enforces
//! `max_size / shard_count` entries exactly, so the cache as a whole holds
//! at most `shard_count · ⌈max_size / shard_count⌉`. With one shard the
//! bound is exact; more shards trade capacity precision for parallelism.
//!
//! ## Operations
//!
//! | operation         | effect                                            |
//! |-------------------|---------------------------------------------------|
//! | `exists`          | membership probe, does not promote                |
//! | `get` / `get_with`| copy/borrow the value, splice entry to MRU        |
//! | `insert`          | upsert at MRU; evicts the shard's LRU when full   |
//! | `clear`           | empty every shard, one lock at a time             |
//! | `reserve`         | preallocate ≈ 1.1·n entries across shards         |
//! | `set_cache_size`  | rebudget shards; no eager eviction                |
//! | `size`            | sum of per-shard sizes, not globally linearized   |
//!
//! `get` mutates recency even though it reads: treat it as a write for
//! synchronization reasoning.
//!
//! ## Single-threaded profile
//!
//! [`UnsyncLruCache`] instantiates the lock parameter with
//! [`RawUnsyncLock`](crate::sync::RawUnsyncLock) and a single shard: no
//! locking cost, exact capacity, and `!Sync` so it cannot leak across
//! threads.

use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::sync::atomic::{AtomicUsize, Ordering};

use lock_api::RawMutex;
use rustc_hash::FxBuildHasher;

use crate::ds::ShardedMap;
use crate::error::ConfigError;
use crate::sync::{RawShardLock, RawUnsyncLock};

/// Shard count used by [`LruCache::new`].
pub const DEFAULT_SHARD_COUNT: usize = 16;

/// Smallest per-shard entry budget a cache accepts.
///
/// Below three entries per shard the interplay of promote-on-get and
/// evict-on-insert stops giving useful ordering guarantees, so construction
/// rejects such budgets outright.
pub const MIN_SHARD_CAPACITY: usize = 3;

/// Splits a total budget across shards, rejecting budgets that leave a
/// shard with fewer than [`MIN_SHARD_CAPACITY`] entries.
pub(crate) fn per_shard_budget(max_size: usize, shards: usize) -> Result<usize, ConfigError> {
    let per_shard = max_size / shards;
    if per_shard < MIN_SHARD_CAPACITY {
        return Err(ConfigError::ShardBudgetTooSmall {
            max_size,
            shards,
            per_shard,
        });
    }
    Ok(per_shard)
}

/// Bounded, sharded, least-recently-used cache.
///
/// # Example
///
/// ```
/// use shardlru::cache::LruCache;
///
/// let cache: LruCache<u64, String> = LruCache::new(4096).unwrap();
/// cache.insert(1, "one".to_string());
///
/// assert!(cache.exists(&1));
/// assert_eq!(cache.get(&1), Some("one".to_string()));
/// assert_eq!(cache.get(&2), None);
/// ```
pub struct LruCache<K, V, H = FxBuildHasher, R = RawShardLock>
where
    R: RawMutex,
{
    map: ShardedMap<K, V, H, R>,
    shard_max: AtomicUsize,
}

/// Single-threaded profile: one shard, no-op lock, exact `max_size` bound.
///
/// # Example
///
/// ```
/// use shardlru::cache::UnsyncLruCache;
///
/// let cache: UnsyncLruCache<u64, u64> = UnsyncLruCache::with_capacity(3).unwrap();
/// cache.insert(1, 10);
/// cache.insert(2, 20);
/// cache.insert(3, 30);
/// cache.insert(4, 40);
///
/// // Exactly one entry was evicted: the least recently used.
/// assert_eq!(cache.size(), 3);
/// assert!(!cache.exists(&1));
/// ```
pub type UnsyncLruCache<K, V, H = FxBuildHasher> = LruCache<K, V, H, RawUnsyncLock>;

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache bounded by roughly `max_size` entries, spread over
    /// [`DEFAULT_SHARD_COUNT`] shards.
    ///
    /// Fails if `max_size` leaves a shard with fewer than
    /// [`MIN_SHARD_CAPACITY`] entries.
    pub fn new(max_size: usize) -> Result<Self, ConfigError> {
        Self::with_shards(max_size, DEFAULT_SHARD_COUNT)
    }
}

impl<K, V> LruCache<K, V, FxBuildHasher, RawUnsyncLock>
where
    K: Eq + Hash + Clone,
{
    /// Creates a single-shard, single-threaded cache holding exactly
    /// `max_size` entries.
    pub fn with_capacity(max_size: usize) -> Result<Self, ConfigError> {
        Self::with_shards(max_size, 1)
    }
}

impl<K, V, H, R> LruCache<K, V, H, R>
where
    K: Eq + Hash + Clone,
    H: BuildHasher + Clone,
    R: RawMutex,
{
    /// Creates a cache with an explicit shard count (clamped to at least 1).
    pub fn with_shards(max_size: usize, shards: usize) -> Result<Self, ConfigError>
    where
        H: Default,
    {
        Self::with_shards_and_hasher(max_size, shards, H::default())
    }

    /// Creates a cache with an explicit shard count and hasher.
    ///
    /// The hasher drives both shard routing and the per-shard indexes.
    pub fn with_shards_and_hasher(
        max_size: usize,
        shards: usize,
        hasher: H,
    ) -> Result<Self, ConfigError> {
        let shards = shards.max(1);
        let shard_max = per_shard_budget(max_size, shards)?;
        let cache = Self {
            map: ShardedMap::new(shards, hasher),
            shard_max: AtomicUsize::new(shard_max),
        };
        cache.reserve(max_size);
        Ok(cache)
    }

    /// Returns whether `key` is cached. Does not promote.
    pub fn exists(&self, key: &K) -> bool {
        self.map.visit(key, |_| ()).is_some()
    }

    /// Returns a copy of the cached value and promotes the entry to MRU.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.map.visit(key, |mut entry| {
            entry.promote();
            entry.value().clone()
        })
    }

    /// Runs `f` on the cached value under the shard lock and promotes the
    /// entry to MRU. The callback form serves values that are not `Clone`
    /// or too large to copy out.
    pub fn get_with<T>(&self, key: &K, f: impl FnOnce(&V) -> T) -> Option<T> {
        self.map.visit(key, |mut entry| {
            entry.promote();
            f(entry.value())
        })
    }

    /// Inserts or overwrites `key`, leaving it at the MRU position.
    ///
    /// When the insert grows a shard past its budget, that shard's LRU
    /// entry is evicted in the same critical section.
    pub fn insert(&self, key: K, value: V) {
        let cap = self.shard_max.load(Ordering::Relaxed);
        self.map.upsert_with(
            key,
            value,
            |value, mut entry| {
                entry.replace_value(value);
                entry.promote();
            },
            |value, slot, list| {
                let id = list.push_front(slot.key().clone(), value);
                slot.publish(id);
                if list.len() > cap {
                    list.pop_back().map(|(victim, _)| victim)
                } else {
                    None
                }
            },
        );
    }

    /// Empties every shard, each under its own lock.
    pub fn clear(&self) {
        self.map.clear();
    }

    /// Preallocates room for about `1.1 · entries` entries.
    pub fn reserve(&self, entries: usize) {
        self.map.reserve(entries + entries / 10);
    }

    /// Rebudgets every shard to `max_size / shard_count` entries.
    ///
    /// Shards holding more than the new budget are not trimmed eagerly:
    /// each insert past the budget evicts one tail entry, so an over-budget
    /// shard stops growing but keeps its current size until cleared.
    pub fn set_cache_size(&self, max_size: usize) {
        let per_shard = max_size / self.map.shard_count();
        debug_assert!(
            per_shard >= MIN_SHARD_CAPACITY,
            "cache size {max_size} leaves {per_shard} entries per shard"
        );
        self.shard_max.store(per_shard, Ordering::Relaxed);
    }

    /// Sum of shard sizes. Each shard is counted atomically, but the sum is
    /// not a single-instant snapshot of the whole cache.
    pub fn size(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if every shard is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of shards.
    pub fn shard_count(&self) -> usize {
        self.map.shard_count()
    }

    /// Returns the entry budget each shard enforces.
    pub fn per_shard_capacity(&self) -> usize {
        self.shard_max.load(Ordering::Relaxed)
    }
}

impl<K, V, H, R> fmt::Debug for LruCache<K, V, H, R>
where
    K: Eq + Hash + Clone,
    H: BuildHasher + Clone,
    R: RawMutex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("size", &self.size())
            .field("shards", &self.shard_count())
            .field("per_shard_capacity", &self.per_shard_capacity())
            .finish_non_exhaustive()
    }
}
