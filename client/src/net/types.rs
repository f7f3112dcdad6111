//! Video-catalog response DTOs and the public client configuration.
//!
//! DESIGN
//! ======
//! Only the fields the views consume are modeled; everything else in the
//! catalog payloads is ignored. Snippets default missing fields so a sparse
//! item still renders. Counters arrive as decimal strings from the catalog
//! (and as numbers in a few places) and are normalized to `u64`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::state::personalization::{ChannelRef, VideoRef};

/// Category id used when a result does not say which category it is in.
pub const UNKNOWN_CATEGORY_ID: &str = "0";

/// Public configuration served by `GET /api/config`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Catalog API key, sent as the `key` query parameter.
    pub api_key: String,
    /// Region used for popular-video charts.
    pub region_code: String,
    /// Catalog base URL without a trailing slash.
    pub base_url: String,
}

// =============================================================
// Thumbnails
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

/// Thumbnail variants keyed by size name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub standard: Option<Thumbnail>,
    pub maxres: Option<Thumbnail>,
}

impl Thumbnails {
    /// Largest available variant for cards and players.
    pub fn best_url(&self) -> Option<&str> {
        [&self.maxres, &self.high, &self.medium, &self.default]
            .into_iter()
            .find_map(|t| t.as_ref().map(|t| t.url.as_str()))
    }

    /// Smallest available variant for avatars.
    pub fn avatar_url(&self) -> Option<&str> {
        [&self.default, &self.medium, &self.high]
            .into_iter()
            .find_map(|t| t.as_ref().map(|t| t.url.as_str()))
    }
}

// =============================================================
// Videos
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoSnippet {
    pub title: String,
    pub channel_id: String,
    pub channel_title: String,
    pub published_at: Option<String>,
    pub description: String,
    pub category_id: Option<String>,
    pub thumbnails: Thumbnails,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(deserialize_with = "deserialize_count")]
    pub view_count: Option<u64>,
    #[serde(deserialize_with = "deserialize_count")]
    pub like_count: Option<u64>,
    #[serde(deserialize_with = "deserialize_count")]
    pub comment_count: Option<u64>,
}

/// A `videos` list item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Video {
    pub id: String,
    #[serde(default)]
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub statistics: VideoStatistics,
}

impl Video {
    pub fn category_id(&self) -> &str {
        self.snippet.category_id.as_deref().unwrap_or(UNKNOWN_CATEGORY_ID)
    }

    pub fn thumbnail_url(&self) -> &str {
        self.snippet.thumbnails.best_url().unwrap_or_default()
    }

    /// Snapshot for watch history and likes.
    pub fn to_video_ref(&self) -> VideoRef {
        snapshot(&self.id, &self.snippet)
    }

    /// Channel snapshot from the video alone, for subscribing before the
    /// channel lookup has answered.
    pub fn channel_ref(&self) -> ChannelRef {
        ChannelRef {
            id: self.snippet.channel_id.clone(),
            title: self.snippet.channel_title.clone(),
            thumbnail: String::new(),
            subscriber_count: "0".to_owned(),
        }
    }
}

/// Identifier of a `search` result; only video hits carry `videoId`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResultId {
    pub kind: String,
    pub video_id: Option<String>,
}

/// A `search` list item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub id: SearchResultId,
    #[serde(default)]
    pub snippet: VideoSnippet,
}

impl SearchResult {
    pub fn video_id(&self) -> Option<&str> {
        self.id.video_id.as_deref()
    }

    pub fn category_id(&self) -> &str {
        self.snippet.category_id.as_deref().unwrap_or(UNKNOWN_CATEGORY_ID)
    }

    pub fn to_video_ref(&self) -> Option<VideoRef> {
        self.video_id().map(|id| snapshot(id, &self.snippet))
    }
}

fn snapshot(id: &str, snippet: &VideoSnippet) -> VideoRef {
    VideoRef {
        id: id.to_owned(),
        title: snippet.title.clone(),
        thumbnail: snippet.thumbnails.best_url().unwrap_or_default().to_owned(),
        channel_title: snippet.channel_title.clone(),
        published_at: snippet.published_at.clone(),
    }
}

// =============================================================
// Channels
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChannelSnippet {
    pub title: String,
    pub thumbnails: Thumbnails,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(deserialize_with = "deserialize_count")]
    pub subscriber_count: Option<u64>,
}

/// A `channels` list item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub snippet: ChannelSnippet,
    #[serde(default)]
    pub statistics: ChannelStatistics,
}

impl Channel {
    pub fn avatar_url(&self) -> &str {
        self.snippet.thumbnails.avatar_url().unwrap_or_default()
    }

    /// Snapshot for the subscriptions list.
    pub fn to_channel_ref(&self) -> ChannelRef {
        ChannelRef {
            id: self.id.clone(),
            title: self.snippet.title.clone(),
            thumbnail: self.avatar_url().to_owned(),
            subscriber_count: self.statistics.subscriber_count.unwrap_or(0).to_string(),
        }
    }
}

// =============================================================
// Comments
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentSnippet {
    pub author_display_name: String,
    pub author_profile_image_url: String,
    pub text_display: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub like_count: Option<u64>,
    pub published_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub snippet: CommentSnippet,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: Comment,
}

/// A `commentThreads` list item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CommentThread {
    pub id: String,
    #[serde(default)]
    pub snippet: CommentThreadSnippet,
}

impl CommentThread {
    pub fn comment(&self) -> &CommentSnippet {
        &self.snippet.top_level_comment.snippet
    }
}

// =============================================================
// Paging
// =============================================================

/// One page of list results plus the opaque continuation token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

/// Accept a counter as a decimal string, an integer, or null.
fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => number
            .as_u64()
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected non-negative integer count")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid count string '{raw}'"))),
        _ => Err(D::Error::custom("expected count as string or number")),
    }
}
