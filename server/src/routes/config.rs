//! Public client configuration route.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use axum::extract::State;
use axum::response::Json;
use client::net::types::ClientConfig;

use crate::state::AppState;

/// `GET /api/config` — catalog settings for the browser.
pub async fn client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(state.catalog.as_ref().clone())
}
