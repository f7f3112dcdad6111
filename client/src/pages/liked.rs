//! Liked videos grid with a count.

use leptos::prelude::*;

use crate::app::StoreSignal;
use crate::components::status_panel::EmptyState;
use crate::components::video_card::VideoCard;
use crate::net::types::UNKNOWN_CATEGORY_ID;
use crate::routes::{HOME_PATH, video_path};
use crate::util::format::{now_unix_secs, pluralize, relative_time_or_empty};

#[component]
pub fn LikedPage() -> impl IntoView {
    let store = expect_context::<StoreSignal>();

    move || {
        let videos = store.with(|s| s.liked_videos().to_vec());
        if videos.is_empty() {
            return view! {
                <div class="liked-page">
                    <EmptyState
                        icon="👍"
                        title="No liked videos"
                        body="Videos you like will appear here"
                        link=(HOME_PATH, "Discover videos")
                    />
                </div>
            }
            .into_any();
        }

        let now = now_unix_secs();
        let count = pluralize(videos.len(), "video");
        view! {
            <div class="liked-page">
                <div class="page-header">
                    <h1>"Liked Videos"</h1>
                    <p>{count}</p>
                </div>
                <div class="feed">
                    {videos
                        .into_iter()
                        .map(|video| {
                            let meta = relative_time_or_empty(video.published_at.as_deref(), now);
                            view! {
                                <VideoCard
                                    href=video_path(UNKNOWN_CATEGORY_ID, &video.id)
                                    thumbnail=video.thumbnail
                                    title=video.title
                                    channel_title=video.channel_title
                                    meta
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any()
    }
}
