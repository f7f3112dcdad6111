//! Side list of popular videos from the playing video's category.

#[cfg(test)]
#[path = "recommended_test.rs"]
mod recommended_test;

use leptos::prelude::*;

use crate::app::{ConfigSignal, retry_catalog};
use crate::components::status_panel::ErrorPanel;
use crate::net::catalog::{self, RECOMMENDED_PAGE_SIZE};
use crate::net::types::Video;
use crate::routes::video_path;
use crate::state::fetch::{FetchState, RequestSeq, gated, spawn_fetch};
use crate::util::format::compact_count_opt;

/// Recommendations for `category_id`, never including `current_id`.
pub fn recommendations(mut videos: Vec<Video>, current_id: &str) -> Vec<Video> {
    videos.retain(|v| v.id != current_id);
    videos
}

#[component]
pub fn Recommended(
    #[prop(into)] category_id: Signal<String>,
    #[prop(into)] current_id: Signal<String>,
) -> impl IntoView {
    let config = expect_context::<ConfigSignal>();
    let videos = RwSignal::new(FetchState::<Vec<Video>>::Idle);
    let attempt = RwSignal::new(0_u32);
    let seq = RequestSeq::new();

    Effect::new(move || {
        attempt.track();
        let category_id = category_id.get();
        let Some(cfg) = config.with(|c| c.loaded().cloned()) else {
            return;
        };
        spawn_fetch(videos, &seq, async move {
            catalog::popular_videos(&cfg, &category_id, RECOMMENDED_PAGE_SIZE, None)
                .await
                .map(|page| page.items)
        });
    });

    let on_retry = Callback::new(move |()| retry_catalog(config, attempt));

    view! {
        <div class="recommended">
            {move || match config.with(|c| videos.with(|v| gated(c, v))) {
                FetchState::Idle | FetchState::Loading => view! {
                    <p class="recommended__status">"Loading recommendations..."</p>
                }
                .into_any(),
                FetchState::Failed(message) => view! { <ErrorPanel message on_retry/> }.into_any(),
                FetchState::Loaded(items) => recommendations(items, &current_id.get())
                    .into_iter()
                    .map(|video| {
                        let views = format!("{} Views", compact_count_opt(video.statistics.view_count));
                        view! {
                            <a class="recommended__item" href=video_path(video.category_id(), &video.id)>
                                <img src=video.thumbnail_url().to_owned() alt="" loading="lazy"/>
                                <div class="recommended__info">
                                    <h4>{video.snippet.title.clone()}</h4>
                                    <p>{video.snippet.channel_title.clone()}</p>
                                    <p>{views}</p>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
