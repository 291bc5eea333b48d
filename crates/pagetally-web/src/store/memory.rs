//! In-process counter store.
//!
//! Backs the HTTP integration tests and storeless local runs. Linearization
//! comes from the per-key entry lock in `DashMap`.

use async_trait::async_trait;
use dashmap::DashMap;

use pagetally_core::{CounterStore, HitCount, Result, TallyError};

#[derive(Default)]
pub struct MemoryCounterStore {
    counters: DashMap<String, i64>,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn increment(&self, key: &str) -> Result<HitCount> {
        if key.is_empty() {
            return Err(TallyError::Internal("counter key must not be empty".into()));
        }
        let mut entry = self.counters.entry(key.to_string()).or_insert(0);
        *entry += 1;
        Ok(HitCount(*entry))
    }
}
