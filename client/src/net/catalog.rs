//! Video-catalog REST client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: fetches report `CatalogError::Unavailable`;
//! URL building and body parsing are plain functions usable anywhere.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (transport, HTTP status, catalog error payload, body
//! decode) maps to `CatalogError` so views can render a single "failed"
//! state with a retry action.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::types::{Channel, ClientConfig, CommentThread, Page, SearchResult, Video};

pub const FEED_PAGE_SIZE: u32 = 50;
pub const RECOMMENDED_PAGE_SIZE: u32 = 45;
pub const SEARCH_PAGE_SIZE: u32 = 50;
pub const COMMENT_PAGE_SIZE: u32 = 50;

/// Errors produced by catalog requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status without a readable error payload.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The catalog reported an error payload.
    #[error("{message}")]
    Api { code: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// A single-item lookup returned no items.
    #[error("{0} not found")]
    NotFound(String),

    /// Fetching is only possible in the browser.
    #[error("catalog not available on server")]
    Unavailable,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListEnvelope<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
    next_page_token: Option<String>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

// =============================================================
// URL building
// =============================================================

fn endpoint(cfg: &ClientConfig, resource: &str, params: &[(&str, &str)]) -> String {
    let query = params
        .iter()
        .chain(std::iter::once(&("key", cfg.api_key.as_str())))
        .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}/{resource}?{query}", cfg.base_url.trim_end_matches('/'))
}

/// Most-popular chart for a category.
pub fn popular_videos_url(cfg: &ClientConfig, category_id: &str, max_results: u32, page_token: Option<&str>) -> String {
    let max = max_results.to_string();
    let mut params = vec![
        ("part", "snippet,contentDetails,statistics"),
        ("chart", "mostPopular"),
        ("regionCode", cfg.region_code.as_str()),
        ("videoCategoryId", category_id),
        ("maxResults", max.as_str()),
    ];
    if let Some(token) = page_token {
        params.push(("pageToken", token));
    }
    endpoint(cfg, "videos", &params)
}

/// Details for one video.
pub fn video_details_url(cfg: &ClientConfig, video_id: &str) -> String {
    endpoint(cfg, "videos", &[("part", "snippet,contentDetails,statistics"), ("id", video_id)])
}

/// Batched channel lookup; ids are joined with commas.
pub fn channels_url(cfg: &ClientConfig, channel_ids: &[String]) -> String {
    let ids = channel_ids.join(",");
    endpoint(cfg, "channels", &[("part", "snippet,statistics"), ("id", ids.as_str())])
}

/// Top-level comment threads for a video.
pub fn comment_threads_url(cfg: &ClientConfig, video_id: &str, max_results: u32) -> String {
    let max = max_results.to_string();
    endpoint(
        cfg,
        "commentThreads",
        &[("part", "snippet,replies"), ("maxResults", max.as_str()), ("videoId", video_id)],
    )
}

/// Video search.
pub fn search_url(cfg: &ClientConfig, query: &str, max_results: u32, page_token: Option<&str>) -> String {
    let max = max_results.to_string();
    let mut params = vec![("part", "snippet"), ("maxResults", max.as_str()), ("q", query), ("type", "video")];
    if let Some(token) = page_token {
        params.push(("pageToken", token));
    }
    endpoint(cfg, "search", &params)
}

/// Unique channel ids in first-seen order.
pub fn unique_channel_ids(results: &[SearchResult]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for result in results {
        let id = &result.snippet.channel_id;
        if !id.is_empty() && !ids.contains(id) {
            ids.push(id.clone());
        }
    }
    ids
}

// =============================================================
// Body parsing
// =============================================================

/// Parse a successful list response body.
///
/// # Errors
///
/// Returns `CatalogError::Api` when the body carries an error payload and
/// `CatalogError::Decode` when it does not match the list shape.
pub fn parse_list_body<T: DeserializeOwned>(raw: &str) -> Result<Page<T>, CatalogError> {
    let envelope: ListEnvelope<T> = serde_json::from_str(raw).map_err(|e| CatalogError::Decode(e.to_string()))?;
    if let Some(error) = envelope.error {
        return Err(CatalogError::Api { code: error.code, message: error.message });
    }
    Ok(Page { items: envelope.items, next_page_token: envelope.next_page_token })
}

/// Map a non-success response to an error, preferring the catalog message.
pub fn error_from_status(status: u16, raw: &str) -> CatalogError {
    match serde_json::from_str::<ErrorEnvelope>(raw) {
        Ok(envelope) if !envelope.error.message.is_empty() => {
            CatalogError::Api { code: envelope.error.code, message: envelope.error.message }
        }
        _ => CatalogError::Status(status),
    }
}

fn first_item<T>(page: Page<T>, what: &str) -> Result<T, CatalogError> {
    page.items.into_iter().next().ok_or_else(|| CatalogError::NotFound(what.to_owned()))
}

// =============================================================
// Fetching
// =============================================================

async fn fetch_list<T: DeserializeOwned>(url: &str) -> Result<Page<T>, CatalogError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| CatalogError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_status(status, &body));
        }
        parse_list_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(CatalogError::Unavailable)
    }
}

/// Most-popular videos for `category_id`.
///
/// # Errors
///
/// Returns a `CatalogError` on any request or decode failure.
pub async fn popular_videos(
    cfg: &ClientConfig,
    category_id: &str,
    max_results: u32,
    page_token: Option<&str>,
) -> Result<Page<Video>, CatalogError> {
    fetch_list(&popular_videos_url(cfg, category_id, max_results, page_token)).await
}

/// Details for a single video.
///
/// # Errors
///
/// Returns `CatalogError::NotFound` when the catalog has no such video.
pub async fn video_details(cfg: &ClientConfig, video_id: &str) -> Result<Video, CatalogError> {
    let page = fetch_list(&video_details_url(cfg, video_id)).await?;
    first_item(page, "video")
}

/// Details for a single channel.
///
/// # Errors
///
/// Returns `CatalogError::NotFound` when the catalog has no such channel.
pub async fn channel_details(cfg: &ClientConfig, channel_id: &str) -> Result<Channel, CatalogError> {
    let page = fetch_list(&channels_url(cfg, &[channel_id.to_owned()])).await?;
    first_item(page, "channel")
}

/// Batched channel lookup.
///
/// # Errors
///
/// Returns a `CatalogError` on any request or decode failure.
pub async fn channels(cfg: &ClientConfig, channel_ids: &[String]) -> Result<Vec<Channel>, CatalogError> {
    if channel_ids.is_empty() {
        return Ok(Vec::new());
    }
    Ok(fetch_list(&channels_url(cfg, channel_ids)).await?.items)
}

/// Top-level comments for a video.
///
/// # Errors
///
/// Returns a `CatalogError` on any request or decode failure.
pub async fn comment_threads(cfg: &ClientConfig, video_id: &str) -> Result<Vec<CommentThread>, CatalogError> {
    Ok(fetch_list(&comment_threads_url(cfg, video_id, COMMENT_PAGE_SIZE)).await?.items)
}

/// Video search.
///
/// # Errors
///
/// Returns a `CatalogError` on any request or decode failure.
pub async fn search_videos(
    cfg: &ClientConfig,
    query: &str,
    page_token: Option<&str>,
) -> Result<Page<SearchResult>, CatalogError> {
    fetch_list(&search_url(cfg, query, SEARCH_PAGE_SIZE, page_token)).await
}
