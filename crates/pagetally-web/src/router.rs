//! Axum router wiring.
//!
//! Exposes the single `/` visit route; any other path falls through to the
//! framework's default not-found handling.

use axum::{routing::get, Router};

use crate::{app_state::AppState, routes};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::hit))
        .with_state(state)
}
