//! pagetally web front end.
//!
//! Wires config, shared state, the router, and the counter store
//! implementations into the serving stack consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod router;
pub mod routes;
pub mod store;
