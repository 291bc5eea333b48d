//! pagetally core: store-agnostic counter contracts and error types.
//!
//! This crate defines the counter store contract and the error surface shared
//! by the web front end and its store implementations. It intentionally
//! carries no transport or runtime dependencies so it can be reused in
//! multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TallyError`/`Result` so the serving
//! process does not crash on a failed store operation.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;

pub use counter::{CounterStore, HitCount, HIT_COUNTER_KEY};
pub use error::{Result, TallyError};
