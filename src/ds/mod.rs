pub mod recency_list;
pub mod shard;
pub mod sharded_map;

pub use recency_list::{EntryId, RecencyList};
pub use shard::ShardRouter;
pub use sharded_map::{EntryRef, ShardedMap, VacantSlot};
