//! Watch history, most recent first, with a "clear all" action.

use leptos::prelude::*;

use crate::app::StoreSignal;
use crate::components::status_panel::EmptyState;
use crate::net::types::UNKNOWN_CATEGORY_ID;
use crate::routes::{HOME_PATH, video_path};
use crate::state::personalization::PersonalizationStore;
use crate::util::format::{now_unix_secs, relative_time_or_empty};

#[component]
pub fn HistoryPage() -> impl IntoView {
    let store = expect_context::<StoreSignal>();

    move || {
        let videos = store.with(|s| s.watch_history().to_vec());
        if videos.is_empty() {
            return view! {
                <div class="history-page">
                    <EmptyState
                        icon="📺"
                        title="No watch history"
                        body="Videos you watch will appear here"
                        link=(HOME_PATH, "Start watching")
                    />
                </div>
            }
            .into_any();
        }

        let now = now_unix_secs();
        view! {
            <div class="history-page">
                <div class="page-header">
                    <h1>"Watch History"</h1>
                    <button
                        class="btn btn--secondary"
                        on:click=move |_| store.update(PersonalizationStore::clear_watch_history)
                    >
                        "Clear all watch history"
                    </button>
                </div>
                <div class="history-list">
                    {videos
                        .into_iter()
                        .map(|video| {
                            let published = relative_time_or_empty(video.published_at.as_deref(), now);
                            let alt = video.title.clone();
                            view! {
                                <a class="history-item" href=video_path(UNKNOWN_CATEGORY_ID, &video.id)>
                                    <img class="history-item__thumbnail" src=video.thumbnail alt=alt/>
                                    <div class="history-item__info">
                                        <h3>{video.title}</h3>
                                        <p>{video.channel_title}</p>
                                        <p>{published}</p>
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any()
    }
}
