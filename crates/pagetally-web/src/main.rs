//! pagetally web front end.
//!
//! Stateless visit counter over an external Redis-compatible store:
//! - `GET /` increments `page_hits` and greets with the new count
//! - store unreachable -> fixed 500 body, process keeps serving
//! - `REDIS_HOST` picks the store host (default `localhost`)

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use pagetally_web::{app_state::AppState, config, router, store::RedisCounterStore};

#[tokio::main]
async fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    let cfg = config::WebConfig::from_env();
    cfg.validate().expect("invalid REDIS_HOST");

    let store = RedisCounterStore::from_config(&cfg).expect("store client init failed");
    let state = AppState::new(cfg, Arc::new(store));
    let app = router::build_router(state);

    tracing::info!(listen = config::LISTEN_ADDR, "pagetally-web starting");
    let listener = tokio::net::TcpListener::bind(config::LISTEN_ADDR)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
