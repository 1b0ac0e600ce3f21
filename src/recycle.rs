//! Delayed-recycle queue and the cache variants that feed it.
//!
//! Displaced values — overwritten in place or evicted from a shard's tail —
//! often need more than a drop: returning a buffer to a pool, closing a
//! handle, deferring destruction past concurrent readers. The recycle
//! variants carry those values out of the shard critical section into a
//! bounded lock-free MPMC ring that any external consumer drains at its own
//! pace.
//!
//! ## Flow
//!
//! ```text
//!   insert(k, v, tag)
//!        │ shard lock held
//!        ▼
//!   ┌───────────────────────────────────────────────────────────────┐
//!   │ key present → old value displaced ──┐                         │
//!   │ key absent + shard full → tail      ├─► queue.push(tag, p)    │
//!   │   entry evicted, value displaced ───┘      │                  │
//!   │                                            ▼                  │
//!   │                                   full? drop p in place       │
//!   └───────────────────────────────────────────────────────────────┘
//!        │
//!        ▼                          consumer thread (external):
//!   lock released                   while let Some(e) = queue.pop() { … }
//! ```
//!
//! The push is best-effort: a full ring refuses the entry and the cache
//! drops the payload on the spot. Lost entries are a policy loss only — the
//! ring itself never corrupts, and the cache's own state is unaffected.
//!
//! Two variants:
//! - [`RecycleLruCache`]: the queue receives the displaced value itself.
//! - [`ProjectedRecycleLruCache`]: the queue receives one component
//!   projected out of the value via [`RecyclePayload`] — for values where
//!   only a single field needs asynchronous reclamation.

use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crossbeam_queue::ArrayQueue;
use lock_api::RawMutex;
use rustc_hash::FxBuildHasher;

use crate::cache::{per_shard_budget, DEFAULT_SHARD_COUNT};
use crate::ds::ShardedMap;
use crate::error::ConfigError;
use crate::sync::RawShardLock;

/// One displaced item: the caller's expiry tag plus the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecycleEntry<P> {
    pub expiry: u32,
    pub payload: P,
}

/// Bounded lock-free MPMC ring of [`RecycleEntry`] items.
///
/// Producers (cache shards) push without blocking; a full ring refuses the
/// push. Consumers pop owned entries. Safe for any number of concurrent
/// producers and consumers.
pub struct RecycleQueue<P> {
    ring: ArrayQueue<RecycleEntry<P>>,
}

/// Shared handle to a [`RecycleQueue`]; one queue may feed several caches.
pub type SharedRecycleQueue<P> = Arc<RecycleQueue<P>>;

impl<P> RecycleQueue<P> {
    /// Creates a queue holding at most `capacity` entries.
    ///
    /// Fails with [`ConfigError::ZeroQueueCapacity`] when `capacity` is
    /// zero: a queue that can hold nothing would silently drop every
    /// displaced value.
    pub fn with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroQueueCapacity);
        }
        Ok(Self {
            ring: ArrayQueue::new(capacity),
        })
    }

    /// Creates a shared queue handle directly.
    pub fn shared(capacity: usize) -> Result<SharedRecycleQueue<P>, ConfigError> {
        Self::with_capacity(capacity).map(Arc::new)
    }

    /// Attempts to enqueue a payload. Returns `false` if the ring is full,
    /// in which case the payload is dropped before this returns.
    pub fn push(&self, expiry: u32, payload: P) -> bool {
        self.ring.push(RecycleEntry { expiry, payload }).is_ok()
    }

    /// Dequeues the oldest entry, if any.
    pub fn pop(&self) -> Option<RecycleEntry<P>> {
        self.ring.pop()
    }

    /// Returns the number of queued entries.
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns `true` if no entries are queued.
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns `true` if a push would currently be refused.
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }
}

impl<P> fmt::Debug for RecycleQueue<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecycleQueue")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

/// Projects the queue payload out of a cached value.
///
/// Implemented by value types used with [`ProjectedRecycleLruCache`]. The
/// projection runs inside the shard critical section and its result may be
/// dropped undelivered when the queue is full, so it must be cheap to build
/// and cheap to drop.
pub trait RecyclePayload {
    type Payload;

    fn recycle_payload(&self) -> Self::Payload;
}

/// Sharded LRU cache that routes displaced values into a shared
/// [`RecycleQueue`].
///
/// # Example
///
/// ```
/// use shardlru::recycle::{RecycleLruCache, RecycleQueue};
///
/// let queue = RecycleQueue::shared(8).unwrap();
/// let cache: RecycleLruCache<u64, String> =
///     RecycleLruCache::new(4096, queue.clone()).unwrap();
///
/// cache.insert(1, "first".to_string());
/// cache.insert_with_tag(1, "second".to_string(), 7);
///
/// // The overwrite pushed the displaced value with the caller's tag.
/// let entry = queue.pop().unwrap();
/// assert_eq!(entry.expiry, 7);
/// assert_eq!(entry.payload, "first");
/// ```
pub struct RecycleLruCache<K, V, H = FxBuildHasher, R = RawShardLock>
where
    R: RawMutex,
{
    map: ShardedMap<K, V, H, R>,
    shard_max: AtomicUsize,
    queue: SharedRecycleQueue<V>,
}

impl<K, V> RecycleLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache over [`DEFAULT_SHARD_COUNT`] shards feeding `queue`.
    pub fn new(max_size: usize, queue: SharedRecycleQueue<V>) -> Result<Self, ConfigError> {
        Self::with_shards(max_size, DEFAULT_SHARD_COUNT, queue)
    }
}

impl<K, V, H, R> RecycleLruCache<K, V, H, R>
where
    K: Eq + Hash + Clone,
    H: BuildHasher + Clone,
    R: RawMutex,
{
    /// Creates a cache with an explicit shard count (clamped to at least 1).
    pub fn with_shards(
        max_size: usize,
        shards: usize,
        queue: SharedRecycleQueue<V>,
    ) -> Result<Self, ConfigError>
    where
        H: Default,
    {
        Self::with_shards_and_hasher(max_size, shards, H::default(), queue)
    }

    /// Creates a cache with an explicit shard count and hasher.
    pub fn with_shards_and_hasher(
        max_size: usize,
        shards: usize,
        hasher: H,
        queue: SharedRecycleQueue<V>,
    ) -> Result<Self, ConfigError> {
        let shards = shards.max(1);
        let shard_max = per_shard_budget(max_size, shards)?;
        let cache = Self {
            map: ShardedMap::new(shards, hasher),
            shard_max: AtomicUsize::new(shard_max),
            queue,
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
    /// entry to MRU.
    pub fn get_with<T>(&self, key: &K, f: impl FnOnce(&V) -> T) -> Option<T> {
        self.map.visit(key, |mut entry| {
            entry.promote();
            f(entry.value())
        })
    }

    /// Inserts with an expiry tag of zero. See [`insert_with_tag`].
    ///
    /// [`insert_with_tag`]: RecycleLruCache::insert_with_tag
    pub fn insert(&self, key: K, value: V) {
        self.insert_with_tag(key, value, 0);
    }

    /// Inserts or overwrites `key`, leaving it at the MRU position.
    ///
    /// A displaced value — the old value on overwrite, or the evicted tail
    /// entry's value when the insert grows a shard past its budget — is
    /// pushed onto the recycle queue with `expiry` before the shard lock is
    /// released. If the queue is full the value is dropped instead.
    pub fn insert_with_tag(&self, key: K, value: V, expiry: u32) {
        let cap = self.shard_max.load(Ordering::Relaxed);
        let queue = &self.queue;
        self.map.upsert_with(
            key,
            value,
            |value, mut entry| {
                let displaced = entry.replace_value(value);
                queue.push(expiry, displaced);
                entry.promote();
            },
            |value, slot, list| {
                let id = list.push_front(slot.key().clone(), value);
                slot.publish(id);
                if list.len() > cap {
                    list.pop_back().map(|(victim, displaced)| {
                        queue.push(expiry, displaced);
                        victim
                    })
                } else {
                    None
                }
            },
        );
    }

    /// Empties every shard, each under its own lock. Cleared values are not
    /// recycled.
    pub fn clear(&self) {
        self.map.clear();
    }

    /// Preallocates room for about `1.1 · entries` entries.
    pub fn reserve(&self, entries: usize) {
        self.map.reserve(entries + entries / 10);
    }

    /// Rebudgets every shard to `max_size / shard_count` entries; no eager
    /// eviction.
    pub fn set_cache_size(&self, max_size: usize) {
        let per_shard = max_size / self.map.shard_count();
        debug_assert!(
            per_shard >= crate::cache::MIN_SHARD_CAPACITY,
            "cache size {max_size} leaves {per_shard} entries per shard"
        );
        self.shard_max.store(per_shard, Ordering::Relaxed);
    }

    /// Sum of per-shard sizes; not a single-instant snapshot.
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

    /// Returns the shared queue handle.
    pub fn queue(&self) -> &SharedRecycleQueue<V> {
        &self.queue
    }
}

impl<K, V, H, R> fmt::Debug for RecycleLruCache<K, V, H, R>
where
    K: Eq + Hash + Clone,
    H: BuildHasher + Clone,
    R: RawMutex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecycleLruCache")
            .field("size", &self.size())
            .field("shards", &self.shard_count())
            .field("queued", &self.queue.len())
            .finish_non_exhaustive()
    }
}

/// Sharded LRU cache that recycles a projection of the displaced value.
///
/// The queue carries `V::Payload` rather than `V`: when a value is
/// overwritten, the projection is taken from the old value before it is
/// replaced; when a tail entry is evicted, the projection is taken from the
/// evicted value before it is dropped.
///
/// # Example
///
/// ```
/// use shardlru::recycle::{ProjectedRecycleLruCache, RecyclePayload, RecycleQueue};
///
/// // Only the file handle of a cached entry needs deferred cleanup.
/// #[derive(Clone)]
/// struct CachedFile {
///     size: u64,
///     fd: i32,
/// }
///
/// impl RecyclePayload for CachedFile {
///     type Payload = i32;
///
///     fn recycle_payload(&self) -> i32 {
///         self.fd
///     }
/// }
///
/// let queue = RecycleQueue::shared(8).unwrap();
/// let cache: ProjectedRecycleLruCache<u64, CachedFile> =
///     ProjectedRecycleLruCache::new(4096, queue.clone()).unwrap();
///
/// cache.insert(1, CachedFile { size: 100, fd: 3 });
/// cache.insert(1, CachedFile { size: 200, fd: 4 });
///
/// assert_eq!(queue.pop().unwrap().payload, 3);
/// ```
pub struct ProjectedRecycleLruCache<K, V, H = FxBuildHasher, R = RawShardLock>
where
    V: RecyclePayload,
    R: RawMutex,
{
    map: ShardedMap<K, V, H, R>,
    shard_max: AtomicUsize,
    queue: SharedRecycleQueue<V::Payload>,
}

impl<K, V> ProjectedRecycleLruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: RecyclePayload,
{
    /// Creates a cache over [`DEFAULT_SHARD_COUNT`] shards feeding `queue`.
    pub fn new(
        max_size: usize,
        queue: SharedRecycleQueue<V::Payload>,
    ) -> Result<Self, ConfigError> {
        Self::with_shards(max_size, DEFAULT_SHARD_COUNT, queue)
    }
}

impl<K, V, H, R> ProjectedRecycleLruCache<K, V, H, R>
where
    K: Eq + Hash + Clone,
    V: RecyclePayload,
    H: BuildHasher + Clone,
    R: RawMutex,
{
    /// Creates a cache with an explicit shard count (clamped to at least 1).
    pub fn with_shards(
        max_size: usize,
        shards: usize,
        queue: SharedRecycleQueue<V::Payload>,
    ) -> Result<Self, ConfigError>
    where
        H: Default,
    {
        Self::with_shards_and_hasher(max_size, shards, H::default(), queue)
    }

    /// Creates a cache with an explicit shard count and hasher.
    pub fn with_shards_and_hasher(
        max_size: usize,
        shards: usize,
        hasher: H,
        queue: SharedRecycleQueue<V::Payload>,
    ) -> Result<Self, ConfigError> {
        let shards = shards.max(1);
        let shard_max = per_shard_budget(max_size, shards)?;
        let cache = Self {
            map: ShardedMap::new(shards, hasher),
            shard_max: AtomicUsize::new(shard_max),
            queue,
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
    /// entry to MRU.
    pub fn get_with<T>(&self, key: &K, f: impl FnOnce(&V) -> T) -> Option<T> {
        self.map.visit(key, |mut entry| {
            entry.promote();
            f(entry.value())
        })
    }

    /// Inserts with an expiry tag of zero. See [`insert_with_tag`].
    ///
    /// [`insert_with_tag`]: ProjectedRecycleLruCache::insert_with_tag
    pub fn insert(&self, key: K, value: V) {
        self.insert_with_tag(key, value, 0);
    }

    /// Inserts or overwrites `key`, leaving it at the MRU position.
    ///
    /// The payload projected from a displaced value is pushed onto the
    /// recycle queue with `expiry` before the shard lock is released. If
    /// the queue is full the projection is dropped undelivered.
    pub fn insert_with_tag(&self, key: K, value: V, expiry: u32) {
        let cap = self.shard_max.load(Ordering::Relaxed);
        let queue = &self.queue;
        self.map.upsert_with(
            key,
            value,
            |value, mut entry| {
                let payload = entry.value().recycle_payload();
                queue.push(expiry, payload);
                entry.replace_value(value);
                entry.promote();
            },
            |value, slot, list| {
                let id = list.push_front(slot.key().clone(), value);
                slot.publish(id);
                if list.len() > cap {
                    list.pop_back().map(|(victim, displaced)| {
                        queue.push(expiry, displaced.recycle_payload());
                        victim
                    })
                } else {
                    None
                }
            },
        );
    }

    /// Empties every shard, each under its own lock. Cleared values are not
    /// recycled.
    pub fn clear(&self) {
        self.map.clear();
    }

    /// Preallocates room for about `1.1 · entries` entries.
    pub fn reserve(&self, entries: usize) {
        self.map.reserve(entries + entries / 10);
    }

    /// Rebudgets every shard to `max_size / shard_count` entries; no eager
    /// eviction.
    pub fn set_cache_size(&self, max_size: usize) {
        let per_shard = max_size / self.map.shard_count();
        debug_assert!(
            per_shard >= crate::cache::MIN_SHARD_CAPACITY,
            "cache size {max_size} leaves {per_shard} entries per shard"
        );
        self.shard_max.store(per_shard, Ordering::Relaxed);
    }

    /// Sum of per-shard sizes; not a single-instant snapshot.
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

    /// Returns the shared queue handle.
    pub fn queue(&self) -> &SharedRecycleQueue<V::Payload> {
        &self.queue
    }
}

impl<K, V, H, R> fmt::Debug for ProjectedRecycleLruCache<K, V, H, R>
where
    K: Eq + Hash + Clone,
    V: RecyclePayload,
    H: BuildHasher + Clone,
    R: RawMutex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectedRecycleLruCache")
            .field("size", &self.size())
            .field("shards", &self.shard_count())
            .field("queued", &self.queue.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod queue {
        use super::*;

        #[test]
        fn push_pop_round_trips() {
            let queue: RecycleQueue<u64> = RecycleQueue::with_capacity(4).unwrap();
            assert!(queue.push(1, 10));
            assert!(queue.push(2, 20));

            assert_eq!(queue.len(), 2);
            let first = queue.pop().unwrap();
            assert_eq!((first.expiry, first.payload), (1, 10));
            let second = queue.pop().unwrap();
            assert_eq!((second.expiry, second.payload), (2, 20));
            assert!(queue.pop().is_none());
        }

        #[test]
        fn full_queue_refuses_push() {
            let queue: RecycleQueue<u64> = RecycleQueue::with_capacity(2).unwrap();
            assert!(queue.push(0, 1));
            assert!(queue.push(0, 2));
            assert!(queue.is_full());
            assert!(!queue.push(0, 3));
            assert_eq!(queue.len(), 2);

            // Popping frees a slot again.
            queue.pop();
            assert!(queue.push(0, 3));
        }

        #[test]
        fn capacity_is_fixed() {
            let queue: RecycleQueue<u64> = RecycleQueue::with_capacity(8).unwrap();
            assert_eq!(queue.capacity(), 8);
            assert!(queue.is_empty());
        }

        #[test]
        fn zero_capacity_is_rejected() {
            let err = RecycleQueue::<u64>::with_capacity(0).unwrap_err();
            assert_eq!(err, ConfigError::ZeroQueueCapacity);
            assert!(RecycleQueue::<u64>::shared(0).is_err());
        }
    }

    mod simple_recycle {
        use super::*;

        fn single_shard(
            max_size: usize,
            queue_cap: usize,
        ) -> (RecycleLruCache<u64, u64>, SharedRecycleQueue<u64>) {
            let queue = RecycleQueue::shared(queue_cap).unwrap();
            let cache = RecycleLruCache::with_shards(max_size, 1, queue.clone()).unwrap();
            (cache, queue)
        }

        #[test]
        fn overwrite_recycles_old_value() {
            let (cache, queue) = single_shard(4, 8);
            cache.insert(1, 10);
            cache.insert_with_tag(1, 11, 99);

            let entry = queue.pop().unwrap();
            assert_eq!(entry.expiry, 99);
            assert_eq!(entry.payload, 10);
            assert_eq!(cache.get(&1), Some(11));
            assert_eq!(cache.size(), 1);
        }

        #[test]
        fn eviction_recycles_displaced_value() {
            let (cache, queue) = single_shard(3, 8);
            cache.insert(1, 10);
            cache.insert(2, 20);
            cache.insert(3, 30);
            cache.insert(4, 40);

            let entry = queue.pop().unwrap();
            assert_eq!(entry.expiry, 0);
            assert_eq!(entry.payload, 10);
            assert!(queue.is_empty());
            assert!(!cache.exists(&1));
        }

        #[test]
        fn full_queue_drops_silently() {
            let (cache, queue) = single_shard(3, 2);
            for key in 1..=6u64 {
                cache.insert(key, key * 10);
            }

            // Three evictions happened but only two fit the queue.
            assert_eq!(queue.len(), 2);
            assert_eq!(queue.pop().unwrap().payload, 10);
            assert_eq!(queue.pop().unwrap().payload, 20);
            assert!(queue.pop().is_none());

            // The cache itself is unaffected by the dropped push.
            assert_eq!(cache.size(), 3);
            for key in 4..=6u64 {
                assert!(cache.exists(&key));
            }
        }

        #[test]
        fn misses_and_probes_recycle_nothing() {
            let (cache, queue) = single_shard(3, 8);
            cache.insert(1, 10);
            cache.get(&1);
            cache.get(&2);
            cache.exists(&1);

            assert!(queue.is_empty());
        }

        #[test]
        fn queue_can_feed_two_caches() {
            let queue = RecycleQueue::shared(8).unwrap();
            let a: RecycleLruCache<u64, u64> =
                RecycleLruCache::with_shards(3, 1, queue.clone()).unwrap();
            let b: RecycleLruCache<u64, u64> =
                RecycleLruCache::with_shards(3, 1, queue.clone()).unwrap();

            a.insert(1, 10);
            a.insert(1, 11);
            b.insert(1, 100);
            b.insert(1, 101);

            let mut payloads = vec![queue.pop().unwrap().payload, queue.pop().unwrap().payload];
            payloads.sort_unstable();
            assert_eq!(payloads, vec![10, 100]);
        }

        #[test]
        fn clear_does_not_recycle() {
            let (cache, queue) = single_shard(3, 8);
            cache.insert(1, 10);
            cache.insert(2, 20);
            cache.clear();

            assert!(queue.is_empty());
            assert_eq!(cache.size(), 0);
        }
    }

    mod projected_recycle {
        use super::*;

        #[derive(Debug, Clone, PartialEq)]
        struct Slotted {
            meta: &'static str,
            slot: u32,
        }

        impl RecyclePayload for Slotted {
            type Payload = u32;

            fn recycle_payload(&self) -> u32 {
                self.slot
            }
        }

        fn single_shard(
            max_size: usize,
            queue_cap: usize,
        ) -> (
            ProjectedRecycleLruCache<u64, Slotted>,
            SharedRecycleQueue<u32>,
        ) {
            let queue = RecycleQueue::shared(queue_cap).unwrap();
            let cache =
                ProjectedRecycleLruCache::with_shards(max_size, 1, queue.clone()).unwrap();
            (cache, queue)
        }

        #[test]
        fn overwrite_recycles_projection_only() {
            let (cache, queue) = single_shard(4, 8);
            cache.insert(1, Slotted { meta: "a", slot: 7 });
            cache.insert_with_tag(1, Slotted { meta: "b", slot: 8 }, 5);

            let entry = queue.pop().unwrap();
            assert_eq!(entry.expiry, 5);
            assert_eq!(entry.payload, 7);
            assert_eq!(cache.get(&1), Some(Slotted { meta: "b", slot: 8 }));
        }

        #[test]
        fn eviction_recycles_projection() {
            let (cache, queue) = single_shard(3, 8);
            for slot in 1..=4u32 {
                cache.insert(slot as u64, Slotted { meta: "x", slot });
            }

            assert_eq!(queue.pop().unwrap().payload, 1);
            assert!(queue.is_empty());
            assert_eq!(cache.size(), 3);
        }

        #[test]
        fn full_queue_drops_projection() {
            let (cache, queue) = single_shard(3, 1);
            for slot in 1..=5u32 {
                cache.insert(slot as u64, Slotted { meta: "x", slot });
            }

            assert_eq!(queue.len(), 1);
            assert_eq!(queue.pop().unwrap().payload, 1);
            assert_eq!(cache.size(), 3);
        }
    }
}
