//! Counter contract shared by all store implementations.

use async_trait::async_trait;

use crate::error::Result;

/// Fixed key the visit counter lives under in the store.
pub const HIT_COUNTER_KEY: &str = "page_hits";

/// Post-increment counter value as returned by the store.
///
/// The store tracks a signed 64-bit integer created implicitly on first
/// increment, so the first visit yields 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HitCount(pub i64);

impl HitCount {
    /// Plain-text body rendered for a successful visit.
    pub fn greeting(self) -> String {
        format!("Hello! You've visited this page {} times.\n", self.0)
    }
}

/// Atomic counter operations against a backing store.
///
/// Implementations must linearize concurrent increments on the same key: no
/// two callers may observe the same returned value.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Atomically increment `key` and return the post-increment value.
    ///
    /// `key` must be non-empty. Fails with `ConnectionFailure` when the store
    /// is unreachable; the counter is not advanced on failure.
    async fn increment(&self, key: &str) -> Result<HitCount>;
}
