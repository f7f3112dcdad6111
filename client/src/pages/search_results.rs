//! Search results for `/search/:query`, with channel icons looked up in one
//! batched request after the results arrive.

#[cfg(test)]
#[path = "search_results_test.rs"]
mod search_results_test;

use std::collections::HashMap;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::{ConfigSignal, StoreSignal, retry_catalog};
use crate::components::status_panel::{EmptyState, ErrorPanel};
use crate::components::video_card::{CardSkeletons, VideoCard};
use crate::net::catalog::{self, unique_channel_ids};
use crate::net::types::{Channel, SearchResult};
use crate::routes::{HOME_PATH, RouteError, search_query, video_path};
use crate::state::fetch::{FetchState, RequestSeq, gated, spawn_fetch};
use crate::util::format::{now_unix_secs, relative_time_or_empty};

/// Channel id to avatar URL.
pub fn channel_icons(channels: &[Channel]) -> HashMap<String, String> {
    channels
        .iter()
        .filter(|c| !c.avatar_url().is_empty())
        .map(|c| (c.id.clone(), c.avatar_url().to_owned()))
        .collect()
}

#[component]
pub fn SearchResultsPage() -> impl IntoView {
    let store = expect_context::<StoreSignal>();
    let config = expect_context::<ConfigSignal>();
    let params = use_params_map();

    let query = Memo::new(move |_| params.with(|p| search_query(p.get("query"))));
    let results = RwSignal::new(FetchState::<Vec<SearchResult>>::Idle);
    let icons = RwSignal::new(FetchState::<HashMap<String, String>>::Idle);
    let attempt = RwSignal::new(0_u32);
    let results_seq = RequestSeq::new();
    let icons_seq = RequestSeq::new();

    let stale_icons = icons_seq.clone();
    Effect::new(move || {
        attempt.track();
        let Ok(term) = query.get() else {
            return;
        };
        let Some(cfg) = config.with(|c| c.loaded().cloned()) else {
            return;
        };
        stale_icons.invalidate();
        icons.set(FetchState::Idle);
        store.update(|s| s.set_loading(true));
        spawn_fetch(results, &results_seq, async move {
            let result = catalog::search_videos(&cfg, &term, None).await;
            let _ = store.try_update(|s| s.set_loading(false));
            result.map(|page| page.items)
        });
    });

    Effect::new(move || {
        let Some(ids) = results.with(|r| r.loaded().map(|items| unique_channel_ids(items))) else {
            return;
        };
        let Some(cfg) = config.with_untracked(|c| c.loaded().cloned()) else {
            return;
        };
        spawn_fetch(icons, &icons_seq, async move { catalog::channels(&cfg, &ids).await.map(|c| channel_icons(&c)) });
    });

    let on_retry = Callback::new(move |()| retry_catalog(config, attempt));

    let body = move || match config.with(|c| results.with(|r| gated(c, r))) {
        FetchState::Idle | FetchState::Loading => view! {
            <div class="search-results">
                <CardSkeletons/>
            </div>
        }
        .into_any(),
        FetchState::Failed(message) => view! { <ErrorPanel message on_retry/> }.into_any(),
        FetchState::Loaded(items) if items.is_empty() => view! {
            <EmptyState
                icon="🔍"
                title="No results"
                body="Try a different search term"
                link=(HOME_PATH, "Back to home")
            />
        }
        .into_any(),
        FetchState::Loaded(items) => {
            let now = now_unix_secs();
            view! {
                <div class="search-results">
                    {items
                        .into_iter()
                        .filter_map(|item| {
                            let snapshot = item.to_video_ref()?;
                            let channel_id = item.snippet.channel_id.clone();
                            let icon = move || icons.with(|i| i.loaded().and_then(|m| m.get(&channel_id).cloned()));
                            Some(view! {
                                <VideoCard
                                    href=video_path(item.category_id(), &snapshot.id)
                                    thumbnail=snapshot.thumbnail
                                    title=snapshot.title
                                    channel_title=snapshot.channel_title
                                    meta=relative_time_or_empty(snapshot.published_at.as_deref(), now)
                                    channel_icon=Signal::derive(icon)
                                />
                            })
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
    };

    let valid = Memo::new(move |_| query.with(|q| q.as_ref().map(|_| ()).map_err(RouteError::clone)));
    move || valid.get().map(|()| body)
}
