//! REST helpers for the app's own server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `CatalogError::Unavailable` since the
//! endpoint is only fetched from the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::catalog::CatalogError;
use super::types::ClientConfig;

pub const CONFIG_ENDPOINT: &str = "/api/config";

#[cfg(any(test, feature = "hydrate"))]
fn config_request_failed(status: u16) -> CatalogError {
    CatalogError::Network(format!("config request failed: {status}"))
}

/// Fetch the catalog configuration from `GET /api/config`.
///
/// # Errors
///
/// Returns a `CatalogError` when the request fails, the server answers with
/// a non-OK status, or the body is not a `ClientConfig`.
pub async fn fetch_client_config() -> Result<ClientConfig, CatalogError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONFIG_ENDPOINT)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(config_request_failed(resp.status()));
        }
        resp.json::<ClientConfig>().await.map_err(|e| CatalogError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(CatalogError::Unavailable)
    }
}
