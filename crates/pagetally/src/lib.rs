//! Top-level facade crate for pagetally.
//!
//! Re-exports core types and the web front end so users can depend on a
//! single crate.

pub mod core {
    pub use pagetally_core::*;
}

pub mod web {
    pub use pagetally_web::*;
}
