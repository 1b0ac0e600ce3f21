//! shardlru: sharded concurrent LRU caching with delayed recycling.
//!
//! One logical cache, physically split into independently locked shards so
//! concurrent lookups and inserts on different keys rarely contend. The
//! recycle variants route displaced values into a bounded lock-free queue
//! for asynchronous handling off the hot path.

pub mod ds;

pub mod builder;
pub mod cache;
pub mod error;
pub mod prelude;
pub mod recycle;
pub mod sync;
pub mod traits;
