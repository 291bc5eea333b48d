//! End-to-end visit flow against the real router.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use pagetally_core::CounterStore;
use pagetally_web::{
    app_state::AppState,
    config::WebConfig,
    router,
    store::{MemoryCounterStore, RedisCounterStore},
};

async fn start_app(store: Arc<dyn CounterStore>) -> String {
    let cfg = WebConfig {
        redis_host: "localhost".into(),
    };
    let state = AppState::new(cfg, store);
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind test listener");
    let addr: SocketAddr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("test server error: {e}");
        }
    });
    format!("http://{addr}")
}

/// Reserve a port with nothing listening on it.
async fn closed_port() -> u16 {
    let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind probe listener");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    port
}

#[tokio::test]
async fn consecutive_visits_count_up() {
    let base = start_app(Arc::new(MemoryCounterStore::new())).await;
    let client = reqwest::Client::new();

    for expected in 1..=3 {
        let res = client.get(&base).send().await.expect("request");
        assert_eq!(res.status(), reqwest::StatusCode::OK);
        let body = res.text().await.expect("body");
        assert_eq!(
            body,
            format!("Hello! You've visited this page {expected} times.\n")
        );
    }
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let base = start_app(Arc::new(MemoryCounterStore::new())).await;
    let res = reqwest::get(format!("{base}/nope")).await.expect("request");
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unreachable_store_returns_fixed_500() {
    let port = closed_port().await;
    let store =
        RedisCounterStore::from_url(&format!("redis://127.0.0.1:{port}")).expect("store client");
    let base = start_app(Arc::new(store)).await;
    let client = reqwest::Client::new();

    // Repeated failures stay byte-identical; the counter never advances.
    for _ in 0..2 {
        let res = client.get(&base).send().await.expect("request");
        assert_eq!(res.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(res.text().await.expect("body"), "Could not connect to Redis");
    }
}
