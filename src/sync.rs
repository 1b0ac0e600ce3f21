//! Lock plumbing for the sharded containers.
//!
//! Shards are generic over a [`lock_api::RawMutex`] so the same cache code
//! serves two profiles:
//!
//! - [`RawShardLock`] (the default): a real `parking_lot` mutex for
//!   concurrent use.
//! - [`RawUnsyncLock`]: a no-op lock for single-threaded use. It is
//!   deliberately `!Sync`, so a cache built on it cannot be shared across
//!   threads — the compiler rejects the misuse instead of the runtime
//!   racing.

use std::cell::Cell;
use std::marker::PhantomData;

/// Default raw mutex for the concurrent cache types.
pub type RawShardLock = parking_lot::RawMutex;

/// Raw mutex that performs no synchronization.
///
/// `lock`/`unlock` are no-ops and `try_lock` always succeeds. The
/// `PhantomData<Cell<()>>` marker keeps the type `!Sync`, which in turn
/// keeps any `lock_api::Mutex` built on it out of shared-across-threads
/// positions.
///
/// Re-entering a structure guarded by this lock from inside one of its own
/// callbacks is not allowed; the default lock deadlocks there, this one
/// aliases.
pub struct RawUnsyncLock {
    _not_sync: PhantomData<Cell<()>>,
}

unsafe impl lock_api::RawMutex for RawUnsyncLock {
    const INIT: Self = RawUnsyncLock {
        _not_sync: PhantomData,
    };

    type GuardMarker = lock_api::GuardNoSend;

    #[inline]
    fn lock(&self) {}

    #[inline]
    fn try_lock(&self) -> bool {
        true
    }

    #[inline]
    unsafe fn unlock(&self) {}
}
