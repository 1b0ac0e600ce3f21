//! Shared operation surface across the cache variants.
//!
//! All three cache types — [`LruCache`], [`RecycleLruCache`], and
//! [`ProjectedRecycleLruCache`] — expose the same core surface; the recycle
//! variants merely add tagged inserts on top. [`CacheOps`] captures that
//! surface once so generic code (and the cross-variant integration tests)
//! can treat them interchangeably.
//!
//! | Method            | Contract                                          |
//! |-------------------|---------------------------------------------------|
//! | `exists`          | membership probe, never promotes                  |
//! | `get`             | copy value out, promote entry to MRU              |
//! | `insert`          | upsert at MRU, evict shard tail when over budget  |
//! | `clear`           | empty every shard                                 |
//! | `reserve`         | preallocate for ≈ n entries                       |
//! | `set_cache_size`  | rebudget shards, no eager eviction                |
//! | `size`            | per-shard-atomic total                            |
//!
//! [`CacheOps::get`] requires `V: Clone` because it hands out an owned
//! copy; the concrete types additionally offer `get_with` callbacks for
//! values that cannot or should not be cloned.
//!
//! [`LruCache`]: crate::cache::LruCache
//! [`RecycleLruCache`]: crate::recycle::RecycleLruCache
//! [`ProjectedRecycleLruCache`]: crate::recycle::ProjectedRecycleLruCache

use std::hash::{BuildHasher, Hash};

use lock_api::RawMutex;

use crate::cache::LruCache;
use crate::recycle::{ProjectedRecycleLruCache, RecycleLruCache, RecyclePayload};

/// Core operations common to every cache variant.
pub trait CacheOps<K, V> {
    /// Returns whether `key` is cached, without promoting it.
    fn exists(&self, key: &K) -> bool;

    /// Returns a copy of the cached value, promoting the entry to MRU.
    fn get(&self, key: &K) -> Option<V>
    where
        V: Clone;

    /// Inserts or overwrites `key`, leaving it at the MRU position.
    fn insert(&self, key: K, value: V);

    /// Empties every shard.
    fn clear(&self);

    /// Preallocates room for about `entries` entries.
    fn reserve(&self, entries: usize);

    /// Rebudgets every shard to `max_size / shard_count` entries.
    fn set_cache_size(&self, max_size: usize);

    /// Returns the total entry count across shards.
    fn size(&self) -> usize;

    /// Returns `true` if no shard holds an entry.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<K, V, H, R> CacheOps<K, V> for LruCache<K, V, H, R>
where
    K: Eq + Hash + Clone,
    H: BuildHasher + Clone,
    R: RawMutex,
{
    fn exists(&self, key: &K) -> bool {
        LruCache::exists(self, key)
    }

    fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        LruCache::get(self, key)
    }

    fn insert(&self, key: K, value: V) {
        LruCache::insert(self, key, value);
    }

    fn clear(&self) {
        LruCache::clear(self);
    }

    fn reserve(&self, entries: usize) {
        LruCache::reserve(self, entries);
    }

    fn set_cache_size(&self, max_size: usize) {
        LruCache::set_cache_size(self, max_size);
    }

    fn size(&self) -> usize {
        LruCache::size(self)
    }
}

impl<K, V, H, R> CacheOps<K, V> for RecycleLruCache<K, V, H, R>
where
    K: Eq + Hash + Clone,
    H: BuildHasher + Clone,
    R: RawMutex,
{
    fn exists(&self, key: &K) -> bool {
        RecycleLruCache::exists(self, key)
    }

    fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        RecycleLruCache::get(self, key)
    }

    fn insert(&self, key: K, value: V) {
        RecycleLruCache::insert(self, key, value);
    }

    fn clear(&self) {
        RecycleLruCache::clear(self);
    }

    fn reserve(&self, entries: usize) {
        RecycleLruCache::reserve(self, entries);
    }

    fn set_cache_size(&self, max_size: usize) {
        RecycleLruCache::set_cache_size(self, max_size);
    }

    fn size(&self) -> usize {
        RecycleLruCache::size(self)
    }
}

impl<K, V, H, R> CacheOps<K, V> for ProjectedRecycleLruCache<K, V, H, R>
where
    K: Eq + Hash + Clone,
    V: RecyclePayload,
    H: BuildHasher + Clone,
    R: RawMutex,
{
    fn exists(&self, key: &K) -> bool {
        ProjectedRecycleLruCache::exists(self, key)
    }

    fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        ProjectedRecycleLruCache::get(self, key)
    }

    fn insert(&self, key: K, value: V) {
        ProjectedRecycleLruCache::insert(self, key, value);
    }

    fn clear(&self) {
        ProjectedRecycleLruCache::clear(self);
    }

    fn reserve(&self, entries: usize) {
        ProjectedRecycleLruCache::reserve(self, entries);
    }

    fn set_cache_size(&self, max_size: usize) {
        ProjectedRecycleLruCache::set_cache_size(self, max_size);
    }

    fn size(&self) -> usize {
        ProjectedRecycleLruCache::size(self)
    }
}

/// Marker for caches that are safe to share across threads.
pub trait ConcurrentCache: Send + Sync {}

impl<K, V, H, R> ConcurrentCache for LruCache<K, V, H, R>
where
    R: RawMutex,
    Self: Send + Sync,
{
}

impl<K, V, H, R> ConcurrentCache for RecycleLruCache<K, V, H, R>
where
    R: RawMutex,
    Self: Send + Sync,
{
}

impl<K, V, H, R> ConcurrentCache for ProjectedRecycleLruCache<K, V, H, R>
where
    V: RecyclePayload,
    R: RawMutex,
    Self: Send + Sync,
{
}
