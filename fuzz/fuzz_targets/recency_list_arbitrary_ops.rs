#![no_main]

use libfuzzer_sys::fuzz_target;
use shardlru::ds::RecencyList;

// Fuzz arbitrary operation sequences on RecencyList
//
// Tests random sequences of push_front, move_to_front, pop_back,
// replace_value, reads, and clear to find edge cases in link management,
// slot reuse, and handle stability.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut list: RecencyList<u32, u32> = RecencyList::new();
    let mut all_ids = Vec::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 7;
        let value = u32::from(data[idx + 1]);

        match op {
            0 => {
                // push_front: the new entry becomes the MRU entry
                let id = list.push_front(value, value);
                all_ids.push(id);

                assert_eq!(list.front(), Some((&value, &value)));
                assert!(list.contains(id));
                assert_eq!(list.value(id), Some(&value));
                assert_eq!(list.key(id), Some(&value));
            }
            1 => {
                // move_to_front: a live handle splices to MRU, a stale
                // handle is refused
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];

                    let was_moved = list.move_to_front(id);
                    assert_eq!(was_moved, list.contains(id));
                    if was_moved {
                        assert_eq!(list.front().map(|(k, _)| k), list.key(id));
                    }
                }
            }
            2 => {
                // pop_back
                let old_len = list.len();
                let popped = list.pop_back();

                if popped.is_some() {
                    assert_eq!(list.len(), old_len - 1);
                } else {
                    assert_eq!(list.len(), 0);
                }
            }
            3 => {
                // replace_value leaves the entry in place
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    let old_len = list.len();

                    if list.replace_value(id, value).is_some() {
                        assert_eq!(list.value(id), Some(&value));
                        assert_eq!(list.len(), old_len);
                    } else {
                        assert!(!list.contains(id));
                    }
                }
            }
            4 => {
                // reads on an arbitrary (possibly stale) handle
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    assert_eq!(list.key(id).is_some(), list.contains(id));
                    assert_eq!(list.value(id).is_some(), list.contains(id));
                }
            }
            5 => {
                // clear
                list.clear();
                all_ids.clear();

                assert!(list.is_empty());
                assert_eq!(list.front(), None);
                assert_eq!(list.back(), None);
                assert_eq!(list.pop_back(), None);
            }
            6 => {
                // front/back consistency
                if list.is_empty() {
                    assert_eq!(list.len(), 0);
                    assert_eq!(list.front(), None);
                    assert_eq!(list.back(), None);
                } else {
                    assert!(list.front().is_some());
                    assert!(list.back().is_some());
                }
            }
            _ => unreachable!(),
        }

        // Validate link structure and slot accounting after each operation
        list.debug_validate_invariants();

        // Iteration agrees with len
        assert_eq!(list.iter().count(), list.len());

        idx += 2;
    }
});
