//! Counter store implementations.
//!
//! `redis` speaks the real wire protocol; `memory` backs the integration
//! tests and storeless local runs.

pub mod memory;
pub mod redis;

pub use self::memory::MemoryCounterStore;
pub use self::redis::RedisCounterStore;
