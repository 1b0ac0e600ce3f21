// ==============================================
// SINGLE-SHARD END-TO-END SCENARIOS (integration)
// ==============================================
//
// With one shard the capacity bound is exact and eviction order is fully
// determined, so these scenarios pin down the observable LRU contract for
// every cache variant through the shared `CacheOps` surface.

use shardlru::cache::{LruCache, UnsyncLruCache};
use shardlru::recycle::{RecycleLruCache, RecycleQueue};
use shardlru::traits::CacheOps;

fn plain(max_size: usize) -> LruCache<&'static str, i32> {
    LruCache::with_shards(max_size, 1).unwrap()
}

fn recycling(max_size: usize, queue_cap: usize) -> RecycleLruCache<&'static str, i32> {
    RecycleLruCache::with_shards(max_size, 1, RecycleQueue::shared(queue_cap).unwrap()).unwrap()
}

// ==============================================
// Shared scenario suite
// ==============================================

fn fill_holds_every_entry<C: CacheOps<&'static str, i32>>(cache: &C) {
    cache.insert("a", 1);
    cache.insert("b", 2);
    cache.insert("c", 3);

    assert_eq!(cache.size(), 3);
    assert_eq!(cache.get(&"a"), Some(1));
    assert_eq!(cache.get(&"b"), Some(2));
    assert_eq!(cache.get(&"c"), Some(3));
}

fn overflow_evicts_oldest<C: CacheOps<&'static str, i32>>(cache: &C) {
    cache.insert("a", 1);
    cache.insert("b", 2);
    cache.insert("c", 3);
    cache.insert("d", 4);

    assert_eq!(cache.size(), 3);
    assert!(!cache.exists(&"a"));
    assert_eq!(cache.get(&"b"), Some(2));
    assert_eq!(cache.get(&"c"), Some(3));
    assert_eq!(cache.get(&"d"), Some(4));
}

fn get_shields_entry_from_eviction<C: CacheOps<&'static str, i32>>(cache: &C) {
    cache.insert("a", 1);
    cache.insert("b", 2);
    cache.insert("c", 3);

    // Reading the oldest entry makes the second-oldest the victim.
    assert_eq!(cache.get(&"a"), Some(1));
    cache.insert("d", 4);

    assert!(!cache.exists(&"b"));
    assert!(cache.exists(&"a"));
    assert!(cache.exists(&"c"));
    assert!(cache.exists(&"d"));
}

fn overwrite_does_not_grow<C: CacheOps<&'static str, i32>>(cache: &C) {
    cache.insert("a", 1);
    cache.insert("a", 2);

    assert_eq!(cache.size(), 1);
    assert_eq!(cache.get(&"a"), Some(2));
}

fn clear_twice_stays_empty<C: CacheOps<&'static str, i32>>(cache: &C) {
    cache.insert("a", 1);
    cache.insert("b", 2);

    cache.clear();
    cache.clear();
    assert_eq!(cache.size(), 0);
    assert!(cache.is_empty());
}

mod plain_variant {
    use super::*;

    #[test]
    fn fill_holds_every_entry() {
        super::fill_holds_every_entry(&plain(3));
    }

    #[test]
    fn overflow_evicts_oldest() {
        super::overflow_evicts_oldest(&plain(3));
    }

    #[test]
    fn get_shields_entry_from_eviction() {
        super::get_shields_entry_from_eviction(&plain(3));
    }

    #[test]
    fn overwrite_does_not_grow() {
        super::overwrite_does_not_grow(&plain(3));
    }

    #[test]
    fn clear_twice_stays_empty() {
        super::clear_twice_stays_empty(&plain(3));
    }
}

mod unsync_variant {
    use super::*;

    #[test]
    fn behaves_identically_on_one_thread() {
        let cache: UnsyncLruCache<&'static str, i32> =
            UnsyncLruCache::with_capacity(3).unwrap();

        super::fill_holds_every_entry(&cache);
        cache.clear();
        super::overflow_evicts_oldest(&cache);
        cache.clear();
        super::get_shields_entry_from_eviction(&cache);
    }
}

mod recycle_variant {
    use super::*;

    #[test]
    fn scenarios_hold_with_a_queue_attached() {
        let cache = recycling(3, 64);

        super::fill_holds_every_entry(&cache);
        cache.clear();
        super::overflow_evicts_oldest(&cache);
        cache.clear();
        super::get_shields_entry_from_eviction(&cache);
        cache.clear();
        super::overwrite_does_not_grow(&cache);
    }

    #[test]
    fn evicted_values_land_in_the_queue_until_it_fills() {
        let cache = recycling(3, 2);
        let queue = cache.queue().clone();

        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("c", 3);
        cache.insert("d", 4); // evicts "a" → 1 queued
        cache.insert("e", 5); // evicts "b" → 2 queued, queue now full
        cache.insert("f", 6); // evicts "c" → 3 dropped on push failure

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop().unwrap().payload, 1);
        assert_eq!(queue.pop().unwrap().payload, 2);
        assert!(queue.pop().is_none());

        assert_eq!(cache.size(), 3);
        for key in ["d", "e", "f"] {
            assert!(cache.exists(&key));
        }
    }

    #[test]
    fn recycle_accounting_matches_displacements() {
        let cache = recycling(3, 64);
        let queue = cache.queue().clone();

        // 8 inserts on distinct keys: 3 grow the shard, 5 displace a value.
        for (i, key) in ["a", "b", "c", "d", "e", "f", "g", "h"]
            .into_iter()
            .enumerate()
        {
            cache.insert(key, i as i32);
        }
        // 2 overwrites displace one value each.
        cache.insert("g", 100);
        cache.insert("h", 101);

        assert_eq!(queue.len(), 10 - cache.size());
    }
}
