//! Popular-video grid for the selected sidebar category.
//!
//! SYSTEM CONTEXT
//! ==============
//! Refetches whenever the category changes, the catalog configuration
//! arrives, or the user retries. The store's loading flag brackets each
//! request so the navbar loading bar tracks it.

use leptos::prelude::*;

use crate::app::{ConfigSignal, StoreSignal, retry_catalog};
use crate::components::status_panel::{EmptyState, ErrorPanel};
use crate::components::video_card::{CardSkeletons, VideoCard};
use crate::net::catalog::{self, FEED_PAGE_SIZE};
use crate::net::types::Video;
use crate::routes::video_path;
use crate::state::fetch::{FetchState, RequestSeq, gated, spawn_fetch};
use crate::state::ui::UiState;
use crate::util::format::{now_unix_secs, views_and_age};

#[component]
pub fn Feed() -> impl IntoView {
    let store = expect_context::<StoreSignal>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<ConfigSignal>();

    let category = Memo::new(move |_| ui.with(|u| u.category));
    let videos = RwSignal::new(FetchState::<Vec<Video>>::Idle);
    let attempt = RwSignal::new(0_u32);
    let seq = RequestSeq::new();

    Effect::new(move || {
        attempt.track();
        let category_id = category.get().id();
        let Some(cfg) = config.with(|c| c.loaded().cloned()) else {
            return;
        };
        store.update(|s| s.set_loading(true));
        spawn_fetch(videos, &seq, async move {
            let result = catalog::popular_videos(&cfg, category_id, FEED_PAGE_SIZE, None).await;
            let _ = store.try_update(|s| s.set_loading(false));
            result.map(|page| page.items)
        });
    });

    let on_retry = Callback::new(move |()| retry_catalog(config, attempt));

    move || match config.with(|c| videos.with(|v| gated(c, v))) {
        FetchState::Idle | FetchState::Loading => view! {
            <div class="feed">
                <CardSkeletons/>
            </div>
        }
        .into_any(),
        FetchState::Failed(message) => view! { <ErrorPanel message on_retry/> }.into_any(),
        FetchState::Loaded(items) if items.is_empty() => view! {
            <EmptyState icon="📺" title="No videos found" body="Try selecting a different category"/>
        }
        .into_any(),
        FetchState::Loaded(items) => {
            let now = now_unix_secs();
            view! {
                <div class="feed">
                    {items
                        .into_iter()
                        .map(|video| {
                            let meta = views_and_age(
                                video.statistics.view_count,
                                video.snippet.published_at.as_deref(),
                                now,
                            );
                            view! {
                                <VideoCard
                                    href=video_path(video.category_id(), &video.id)
                                    thumbnail=video.thumbnail_url().to_owned()
                                    title=video.snippet.title.clone()
                                    channel_title=video.snippet.channel_title.clone()
                                    meta
                                />
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
    }
}
