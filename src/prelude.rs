pub use crate::builder::CacheBuilder;
pub use crate::cache::{LruCache, UnsyncLruCache};
pub use crate::ds::{EntryId, RecencyList, ShardRouter, ShardedMap};
pub use crate::error::ConfigError;
pub use crate::recycle::{
    ProjectedRecycleLruCache, RecycleEntry, RecycleLruCache, RecyclePayload, RecycleQueue,
    SharedRecycleQueue,
};
pub use crate::sync::{RawShardLock, RawUnsyncLock};
pub use crate::traits::{CacheOps, ConcurrentCache};
