//! Redis-backed counter store.
//!
//! One client per process; a multiplexed connection is obtained per call, so
//! a store outage fails the request at hand and nothing else. Every client
//! error surfaces as `ConnectionFailure` without retry.

use async_trait::async_trait;
use redis::AsyncCommands;

use pagetally_core::{CounterStore, HitCount, Result, TallyError};

use crate::config::WebConfig;

pub struct RedisCounterStore {
    client: redis::Client,
}

impl RedisCounterStore {
    /// Build a store client for the configured host. Does not connect yet;
    /// the first increment does.
    pub fn from_config(cfg: &WebConfig) -> Result<Self> {
        Self::from_url(&cfg.redis_url())
    }

    /// Build a store client from a full `redis://` URL.
    pub fn from_url(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| TallyError::InvalidConfig(format!("bad store url {url:?}: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn increment(&self, key: &str) -> Result<HitCount> {
        if key.is_empty() {
            return Err(TallyError::Internal("counter key must not be empty".into()));
        }
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| TallyError::ConnectionFailure(e.to_string()))?;
        let value: i64 = conn
            .incr(key, 1)
            .await
            .map_err(|e| TallyError::ConnectionFailure(e.to_string()))?;
        Ok(HitCount(value))
    }
}
