//! Personalization store: the per-session source of truth for user state.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `PersonalizationStore` is constructed by the root `App` component and
//! shared with every page through `RwSignal<PersonalizationStore>` context.
//! Views read through the query methods and mutate through the commands;
//! nothing else holds a copy of these collections.
//!
//! PERSISTENCE
//! ===========
//! Five fields are persisted as independent JSON values under fixed keys.
//! `load()` hydrates each key on its own so one bad entry never blocks the
//! others. Every command writes back only the field it touched. Adapter or
//! codec failures are logged and swallowed: the in-memory value always wins.

#[cfg(test)]
#[path = "personalization_test.rs"]
mod personalization_test;

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::collections::{RecentList, ToggleSet};
use super::storage::{KeyValueStore, StorageError};

pub const DARK_MODE_KEY: &str = "darkMode";
pub const SEARCH_HISTORY_KEY: &str = "searchHistory";
pub const WATCH_HISTORY_KEY: &str = "watchHistory";
pub const LIKED_VIDEOS_KEY: &str = "likedVideos";
pub const SUBSCRIBED_CHANNELS_KEY: &str = "subscribedChannels";

pub const SEARCH_HISTORY_LIMIT: usize = 10;
pub const WATCH_HISTORY_LIMIT: usize = 50;

// =============================================================
// Snapshots
// =============================================================

/// Snapshot of a video taken when it was watched or liked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRef {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub channel_title: String,
    /// RFC 3339 publish timestamp, when the catalog supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

/// Snapshot of a channel taken when it was subscribed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRef {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    /// Catalog subscriber count; older entries stored it as a JSON number.
    #[serde(deserialize_with = "deserialize_count_string")]
    pub subscriber_count: String,
}

fn deserialize_count_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected subscriber count as string or number")),
    }
}

fn video_key(video: &VideoRef) -> &str {
    &video.id
}

fn channel_key(channel: &ChannelRef) -> &str {
    &channel.id
}

#[allow(clippy::ptr_arg)]
fn term_key(term: &String) -> &str {
    term
}

// =============================================================
// State
// =============================================================

/// Readable snapshot of everything the store owns.
#[derive(Clone, Debug, PartialEq)]
pub struct PersonalizationState {
    pub is_dark_mode: bool,
    pub search_history: RecentList<String>,
    pub watch_history: RecentList<VideoRef>,
    pub liked_videos: ToggleSet<VideoRef>,
    pub subscribed_channels: ToggleSet<ChannelRef>,
    /// In-flight catalog fetch indicator. Never persisted.
    pub is_loading: bool,
}

impl Default for PersonalizationState {
    fn default() -> Self {
        Self {
            is_dark_mode: false,
            search_history: RecentList::new(SEARCH_HISTORY_LIMIT, term_key),
            watch_history: RecentList::new(WATCH_HISTORY_LIMIT, video_key),
            liked_videos: ToggleSet::new(video_key),
            subscribed_channels: ToggleSet::new(channel_key),
            is_loading: false,
        }
    }
}

// =============================================================
// Store
// =============================================================

/// Session-wide personalization state with write-through persistence.
#[derive(Clone)]
pub struct PersonalizationStore {
    state: PersonalizationState,
    storage: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for PersonalizationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonalizationStore").field("state", &self.state).finish_non_exhaustive()
    }
}

impl PersonalizationStore {
    /// Create an empty store over `storage`. Call `load()` to hydrate.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { state: PersonalizationState::default(), storage }
    }

    /// Hydrate every persisted field from storage.
    ///
    /// Absent, unreadable, or corrupt keys fall back to that field's default.
    /// Corrupt entries are removed so they do not resurface next session.
    /// The loading flag is left untouched.
    pub fn load(&mut self) {
        let is_dark_mode = self.read_field::<bool>(DARK_MODE_KEY).unwrap_or(false);
        let search_history = RecentList::from_items(
            self.read_field::<Vec<String>>(SEARCH_HISTORY_KEY).unwrap_or_default(),
            SEARCH_HISTORY_LIMIT,
            term_key,
        );
        let watch_history = RecentList::from_items(
            self.read_field::<Vec<VideoRef>>(WATCH_HISTORY_KEY).unwrap_or_default(),
            WATCH_HISTORY_LIMIT,
            video_key,
        );
        let liked_videos =
            ToggleSet::from_items(self.read_field::<Vec<VideoRef>>(LIKED_VIDEOS_KEY).unwrap_or_default(), video_key);
        let subscribed_channels = ToggleSet::from_items(
            self.read_field::<Vec<ChannelRef>>(SUBSCRIBED_CHANNELS_KEY).unwrap_or_default(),
            channel_key,
        );

        let state = &mut self.state;
        state.is_dark_mode = is_dark_mode;
        state.search_history = search_history;
        state.watch_history = watch_history;
        state.liked_videos = liked_videos;
        state.subscribed_channels = subscribed_channels;

        log::debug!(
            "personalization hydrated: {} searches, {} watched, {} liked, {} subscriptions",
            state.search_history.len(),
            state.watch_history.len(),
            state.liked_videos.len(),
            state.subscribed_channels.len()
        );
    }

    // ---------------------------------------------------------
    // Commands
    // ---------------------------------------------------------

    pub fn toggle_dark_mode(&mut self) {
        self.state.is_dark_mode = !self.state.is_dark_mode;
        self.write_field(DARK_MODE_KEY, &self.state.is_dark_mode);
    }

    /// Record a search term.
    ///
    /// Surrounding whitespace is trimmed. Blank terms and terms already in
    /// the history (exact, case-sensitive) are ignored without reordering.
    /// Returns whether the history changed.
    pub fn add_search_term(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() || !self.state.search_history.insert_if_absent(term.to_owned()) {
            return false;
        }
        self.write_field(SEARCH_HISTORY_KEY, self.state.search_history.as_slice());
        true
    }

    pub fn clear_search_history(&mut self) {
        self.state.search_history.clear();
        self.write_field(SEARCH_HISTORY_KEY, self.state.search_history.as_slice());
    }

    /// Move `video` to the front of the watch history. The latest snapshot
    /// replaces any earlier entry with the same id.
    pub fn add_watched_video(&mut self, video: VideoRef) {
        self.state.watch_history.promote(video);
        self.write_field(WATCH_HISTORY_KEY, self.state.watch_history.as_slice());
    }

    pub fn clear_watch_history(&mut self) {
        self.state.watch_history.clear();
        self.write_field(WATCH_HISTORY_KEY, self.state.watch_history.as_slice());
    }

    /// Flip liked membership for `video.id`. Returns whether it is now liked.
    pub fn toggle_liked(&mut self, video: VideoRef) -> bool {
        let liked = self.state.liked_videos.toggle(video);
        self.write_field(LIKED_VIDEOS_KEY, self.state.liked_videos.as_slice());
        liked
    }

    /// Flip subscription for `channel.id`. Returns whether it is now subscribed.
    pub fn toggle_subscribed(&mut self, channel: ChannelRef) -> bool {
        let subscribed = self.state.subscribed_channels.toggle(channel);
        self.write_field(SUBSCRIBED_CHANNELS_KEY, self.state.subscribed_channels.as_slice());
        subscribed
    }

    /// Set the ephemeral loading flag. Never touches storage.
    pub fn set_loading(&mut self, loading: bool) {
        self.state.is_loading = loading;
    }

    // ---------------------------------------------------------
    // Queries
    // ---------------------------------------------------------

    pub fn state(&self) -> &PersonalizationState {
        &self.state
    }

    pub fn is_dark_mode(&self) -> bool {
        self.state.is_dark_mode
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn is_liked(&self, video_id: &str) -> bool {
        self.state.liked_videos.contains(video_id)
    }

    pub fn is_subscribed(&self, channel_id: &str) -> bool {
        self.state.subscribed_channels.contains(channel_id)
    }

    pub fn search_history(&self) -> &[String] {
        self.state.search_history.as_slice()
    }

    pub fn watch_history(&self) -> &[VideoRef] {
        self.state.watch_history.as_slice()
    }

    pub fn liked_videos(&self) -> &[VideoRef] {
        self.state.liked_videos.as_slice()
    }

    pub fn subscribed_channels(&self) -> &[ChannelRef] {
        self.state.subscribed_channels.as_slice()
    }

    // ---------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------

    fn read_field<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                log::warn!("personalization: {err}; using default");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(source) => {
                let err = StorageError::Codec { key: key.to_owned(), source };
                log::warn!("personalization: {err}; discarding stored value");
                if let Err(err) = self.storage.remove(key) {
                    log::warn!("personalization: {err}");
                }
                None
            }
        }
    }

    fn write_field<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(|source| StorageError::Codec { key: key.to_owned(), source })
            .and_then(|raw| self.storage.set(key, &raw));
        if let Err(err) = result {
            log::warn!("personalization: {err}; keeping in-memory value only");
        }
    }
}
