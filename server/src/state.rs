//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server holds no per-user data; it only carries the catalog settings the
//! browser needs.

use std::sync::Arc;

use client::net::types::ClientConfig;

/// Clone is required by Axum; the config is shared behind an `Arc`.
#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: Arc<ClientConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: ClientConfig) -> Self {
        Self { catalog: Arc::new(catalog) }
    }
}
