#![no_main]

use libfuzzer_sys::fuzz_target;
use shardlru::cache::LruCache;

// Fuzz arbitrary operation sequences on a single-shard LruCache
//
// With one shard the capacity bound is exact, so random sequences of
// insert, get, exists, clear, and set_cache_size can be checked against
// hard postconditions after every step. The per-shard index/list sync
// assertion inside the map fires under fuzzing as well.
//
// `bound` tracks the loosest size the cache may legally reach: an insert
// never grows the cache past max(current size, budget), a rebudget moves
// only the budget, and a clear starts the bound over from the budget.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    // Budget from the first byte, kept above the constructor's minimum
    let capacity = ((data[0] as usize) % 29) + 3;
    let cache: LruCache<u32, u32> = match LruCache::with_shards(capacity, 1) {
        Ok(cache) => cache,
        Err(_) => return,
    };
    let mut bound = capacity;

    let mut idx = 1;
    while idx + 2 < data.len() {
        let op = data[idx] % 5;
        let key = u32::from(data[idx + 1]);
        let value = u32::from(data[idx + 2]);

        match op {
            0 => {
                // insert: the key is present afterwards with this value
                cache.insert(key, value);

                assert!(cache.exists(&key));
                assert_eq!(cache.get(&key), Some(value));
            }
            1 => {
                // get: hit and membership agree
                let hit = cache.get(&key);
                assert_eq!(hit.is_some(), cache.exists(&key));
            }
            2 => {
                // exists (read-only)
                let _ = cache.exists(&key);
            }
            3 => {
                // clear
                cache.clear();
                bound = cache.per_shard_capacity();

                assert_eq!(cache.size(), 0);
                assert!(cache.is_empty());
                assert!(!cache.exists(&key));
            }
            4 => {
                // rebudget: no eager eviction, size is untouched
                let new_capacity = ((value as usize) % 29) + 3;
                let old_size = cache.size();
                cache.set_cache_size(new_capacity);
                bound = bound.max(new_capacity);

                assert_eq!(cache.per_shard_capacity(), new_capacity);
                assert_eq!(cache.size(), old_size);
            }
            _ => unreachable!(),
        }

        assert!(cache.size() <= bound);

        if cache.is_empty() {
            assert_eq!(cache.size(), 0);
        } else {
            assert!(cache.size() > 0);
        }

        idx += 3;
    }
});
