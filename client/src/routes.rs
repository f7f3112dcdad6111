//! Route paths and route-parameter validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links are built here so every view agrees on the URL shape the router in
//! `app` matches. Parameter validation returns `RouteError`, which pages hand
//! to the top-level error boundary.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::UNKNOWN_CATEGORY_ID;

pub const HOME_PATH: &str = "/";
pub const HISTORY_PATH: &str = "/history";
pub const LIKED_PATH: &str = "/liked";
pub const SUBSCRIPTIONS_PATH: &str = "/subscriptions";

/// Route parameters that cannot identify a page.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("missing route parameter `{0}`")]
    Missing(&'static str),

    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Player route for a video in a category.
pub fn video_path(category_id: &str, video_id: &str) -> String {
    let category_id = if category_id.is_empty() { UNKNOWN_CATEGORY_ID } else { category_id };
    format!(
        "/video/{}/{}",
        urlencoding::encode(category_id),
        urlencoding::encode(video_id)
    )
}

/// Search route for an already-trimmed query.
pub fn search_path(query: &str) -> String {
    format!("/search/{}", urlencoding::encode(query))
}

/// Validated `/video/:category_id/:video_id` parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoParams {
    pub category_id: String,
    pub video_id: String,
}

/// Validate the player route parameters.
///
/// # Errors
///
/// Returns `RouteError` when the video id is missing or not a plausible id.
/// A missing category falls back to the unknown category.
pub fn video_params(category_id: Option<String>, video_id: Option<String>) -> Result<VideoParams, RouteError> {
    let video_id = video_id.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
    let video_id = video_id.ok_or(RouteError::Missing("video_id"))?;
    if !is_plain_id(&video_id) {
        return Err(RouteError::Invalid { name: "video id", value: video_id });
    }
    let category_id = category_id
        .map(|c| c.trim().to_owned())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| UNKNOWN_CATEGORY_ID.to_owned());
    if !is_plain_id(&category_id) {
        return Err(RouteError::Invalid { name: "category id", value: category_id });
    }
    Ok(VideoParams { category_id, video_id })
}

/// Validate the search route parameter.
///
/// # Errors
///
/// Returns `RouteError::Missing` when the query is absent or blank.
pub fn search_query(raw: Option<String>) -> Result<String, RouteError> {
    raw.map(|q| q.trim().to_owned())
        .filter(|q| !q.is_empty())
        .ok_or(RouteError::Missing("query"))
}

fn is_plain_id(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
