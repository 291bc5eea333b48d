//! Shared application state for the web front end.
//!
//! The store client is constructed once at startup and injected here instead
//! of living in a module-level global.

use std::sync::Arc;

use pagetally_core::CounterStore;

use crate::config::WebConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: WebConfig,
    store: Arc<dyn CounterStore>,
}

impl AppState {
    pub fn new(cfg: WebConfig, store: Arc<dyn CounterStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, store }),
        }
    }

    pub fn cfg(&self) -> &WebConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> Arc<dyn CounterStore> {
        Arc::clone(&self.inner.store)
    }
}
