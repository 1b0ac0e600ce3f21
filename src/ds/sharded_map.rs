//! Sharded index + recency list under per-shard locks.
//!
//! The structural core of the cache: S independent shards, each holding a
//! hash index from key to [`EntryId`] and the [`RecencyList`] those handles
//! point into, both guarded by a single lock. Callers never see a shard
//! directly — lookups and upserts hand a callback a view of the located
//! entry and the shard's list *while the lock is held*, so the probe result
//! stays valid for the mutation that follows it.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                     ShardedMap<K, V, H, R>                       │
//!   │                                                                  │
//!   │   ShardRouter ── hash(k) % S ──► shard index                     │
//!   │                                                                  │
//!   │   shards[i]: Mutex<R, ─────────────────────────────────┐         │
//!   │     ┌───────────────────────────┬─────────────────────┐│         │
//!   │     │ index: HashMap<K,EntryId> │ list: RecencyList   ││         │
//!   │     │                           │                     ││         │
//!   │     │  "a" ─► id_2              │ head ─►[id_2]◄──►…  ││         │
//!   │     │  "b" ─► id_0              │        (MRU)  (LRU) ││         │
//!   │     └───────────────────────────┴─────────────────────┘│         │
//!   │                                              ◄─────────┘         │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Critical-section protocol
//!
//! - `visit`: one index probe under the shard lock; the visitor receives an
//!   [`EntryRef`] that can promote the entry to MRU, read the value, or
//!   replace it in place. The handle never changes, so the index entry is
//!   not rewritten.
//! - `upsert_with`: one probe via the map entry API. On a hit the update
//!   callback runs against an [`EntryRef`]. On a miss the insert callback
//!   prepends the new node, publishes its handle through a single-use
//!   [`VacantSlot`], and may hand back a victim key; the map erases that
//!   key from the index before the lock is released, which is what keeps
//!   index and list in sync across an eviction.
//!
//! Index size equals list length in every shard at every lock release.

use std::collections::hash_map::Entry as IndexEntry;
use std::collections::hash_map::VacantEntry;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use lock_api::{Mutex, RawMutex};
use rustc_hash::FxBuildHasher;

use crate::ds::recency_list::{EntryId, RecencyList};
use crate::ds::shard::ShardRouter;
use crate::sync::RawShardLock;

/// View of a located entry inside its shard's critical section.
///
/// Borrowing the whole recency list (rather than one node) is what lets
/// `promote` splice the entry while the visitor still holds it.
pub struct EntryRef<'a, K, V> {
    id: EntryId,
    list: &'a mut RecencyList<K, V>,
}

impl<K, V> EntryRef<'_, K, V> {
    /// Splices the entry to the front (MRU) of its shard's list.
    pub fn promote(&mut self) {
        self.list.move_to_front(self.id);
    }

    /// Returns the entry's value.
    pub fn value(&self) -> &V {
        self.list.value(self.id).expect("index handle names a dead entry")
    }

    /// Swaps the entry's value in place, returning the displaced one.
    pub fn replace_value(&mut self, value: V) -> V {
        self.list
            .replace_value(self.id, value)
            .expect("index handle names a dead entry")
    }
}

/// Single-use constructor that publishes a new entry's handle into the
/// index. Consuming it is the "insert" half of an upsert; dropping it
/// without publishing leaves the index untouched.
pub struct VacantSlot<'a, K> {
    inner: VacantEntry<'a, K, EntryId>,
}

impl<K> VacantSlot<'_, K> {
    /// Returns the key being inserted.
    pub fn key(&self) -> &K {
        self.inner.key()
    }

    /// Publishes `id` as the index entry for the key.
    pub fn publish(self, id: EntryId) {
        self.inner.insert(id);
    }
}

struct MapShard<K, V, H> {
    index: HashMap<K, EntryId, H>,
    list: RecencyList<K, V>,
}

/// S independently locked `(index, recency list)` shards behind a router.
pub struct ShardedMap<K, V, H = FxBuildHasher, R = RawShardLock>
where
    R: RawMutex,
{
    shards: Box<[Mutex<R, MapShard<K, V, H>>]>,
    router: ShardRouter<H>,
}

impl<K, V, H, R> ShardedMap<K, V, H, R>
where
    K: Eq + Hash,
    H: BuildHasher + Clone,
    R: RawMutex,
{
    /// Creates a map with `shards` shards (clamped to at least 1) sharing
    /// one hasher for routing and per-shard indexing.
    pub fn new(shards: usize, hasher: H) -> Self {
        let router = ShardRouter::with_hasher(shards, hasher.clone());
        let shards = (0..router.shard_count())
            .map(|_| {
                Mutex::new(MapShard {
                    index: HashMap::with_hasher(hasher.clone()),
                    list: RecencyList::new(),
                })
            })
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self { shards, router }
    }

    /// Returns the number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Probes for `key` under its shard's lock and, if present, runs the
    /// visitor against the located entry. Returns `None` on a miss.
    ///
    /// A no-op visitor turns this into a pure membership probe.
    pub fn visit<T>(&self, key: &K, f: impl FnOnce(EntryRef<'_, K, V>) -> T) -> Option<T> {
        let shard = &self.shards[self.router.shard_for_key(key)];
        let mut guard = shard.lock();
        let MapShard { index, list } = &mut *guard;
        let id = *index.get(key)?;
        Some(f(EntryRef { id, list }))
    }

    /// Updates or inserts `key` in one lock acquisition.
    ///
    /// `value` is handed to exactly one of the callbacks. `on_update` runs
    /// when the key is present. `on_insert` runs when it is absent: it must
    /// create the list node and publish its handle through the slot, and
    /// may return a victim key to erase from the index in the same critical
    /// section (the insert-then-evict transaction).
    pub fn upsert_with<F, G>(&self, key: K, value: V, on_update: F, on_insert: G)
    where
        F: FnOnce(V, EntryRef<'_, K, V>),
        G: FnOnce(V, VacantSlot<'_, K>, &mut RecencyList<K, V>) -> Option<K>,
    {
        let shard = &self.shards[self.router.shard_for_key(&key)];
        let mut guard = shard.lock();
        let MapShard { index, list } = &mut *guard;

        let victim = match index.entry(key) {
            IndexEntry::Occupied(entry) => {
                let id = *entry.get();
                on_update(value, EntryRef { id, list: &mut *list });
                None
            }
            IndexEntry::Vacant(vacant) => {
                on_insert(value, VacantSlot { inner: vacant }, &mut *list)
            }
        };

        if let Some(victim) = victim {
            index.remove(&victim);
        }

        debug_assert_eq!(index.len(), list.len());
    }

    /// Sum of shard sizes. Each shard is read under its own lock, so the
    /// total is not a single-instant snapshot.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().index.len()).sum()
    }

    /// Returns `true` if every shard is empty.
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.lock().index.is_empty())
    }

    /// Empties every shard, each under its own lock.
    pub fn clear(&self) {
        for shard in self.shards.iter() {
            let mut guard = shard.lock();
            guard.index.clear();
            guard.list.clear();
        }
    }

    /// Preallocates room for about `entries` entries spread across shards.
    pub fn reserve(&self, entries: usize) {
        let per_shard = entries.div_ceil(self.shards.len());
        for shard in self.shards.iter() {
            let mut guard = shard.lock();
            guard.index.reserve(per_shard);
            guard.list.reserve(per_shard);
        }
    }
}

impl<K, V, H, R> std::fmt::Debug for ShardedMap<K, V, H, R>
where
    K: Eq + Hash,
    H: BuildHasher + Clone,
    R: RawMutex,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShardedMap")
            .field("shards", &self.shard_count())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
