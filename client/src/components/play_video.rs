//! Video player with details, like/subscribe actions, and comments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Details load first; once they land the video is recorded in watch
//! history and the channel and comment lookups start in parallel. A failed
//! channel or comment lookup only hides that section.
//! Details that arrive for a video the route has already moved past are
//! neither shown nor recorded.

#[cfg(test)]
#[path = "play_video_test.rs"]
mod play_video_test;

use leptos::prelude::*;

use crate::app::{ConfigSignal, StoreSignal, retry_catalog};
use crate::components::status_panel::ErrorPanel;
use crate::net::catalog;
use crate::net::types::{Channel, CommentThread, Video};
use crate::state::personalization::ChannelRef;
use crate::state::fetch::{FetchState, RequestSeq, gated, spawn_fetch};
use crate::util::format::{
    compact_count_opt, now_unix_secs, relative_time_or_empty, truncate_chars, views_and_age,
};

/// Characters of the description shown under the player.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 250;

pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}?autoplay=1", urlencoding::encode(video_id))
}

/// The loaded video, if it is the one `video_id` names.
pub fn current_video(details: &FetchState<Video>, video_id: &str) -> Option<Video> {
    details.loaded().filter(|video| video.id == video_id).cloned()
}

/// Channel snapshot to store on subscribe.
///
/// `None` while the channel lookup is pending. A failed lookup falls back to
/// the details taken from the video.
pub fn subscription_snapshot(channel: &FetchState<Channel>, video: &Video) -> Option<ChannelRef> {
    match channel {
        FetchState::Idle | FetchState::Loading => None,
        FetchState::Loaded(channel) => Some(channel.to_channel_ref()),
        FetchState::Failed(_) => Some(video.channel_ref()),
    }
}

#[component]
pub fn PlayVideo(#[prop(into)] video_id: Signal<String>) -> impl IntoView {
    let store = expect_context::<StoreSignal>();
    let config = expect_context::<ConfigSignal>();

    let details = RwSignal::new(FetchState::<Video>::Idle);
    let channel = RwSignal::new(FetchState::<Channel>::Idle);
    let comments = RwSignal::new(FetchState::<Vec<CommentThread>>::Idle);
    let show_comments = RwSignal::new(false);
    let attempt = RwSignal::new(0_u32);
    let details_seq = RequestSeq::new();
    let channel_seq = RequestSeq::new();
    let comments_seq = RequestSeq::new();

    let (stale_channel, stale_comments) = (channel_seq.clone(), comments_seq.clone());
    Effect::new(move || {
        attempt.track();
        let id = video_id.get();
        let Some(cfg) = config.with(|c| c.loaded().cloned()) else {
            return;
        };
        stale_channel.invalidate();
        stale_comments.invalidate();
        channel.set(FetchState::Idle);
        comments.set(FetchState::Idle);
        show_comments.set(false);
        store.update(|s| s.set_loading(true));
        spawn_fetch(details, &details_seq, async move {
            let result = catalog::video_details(&cfg, &id).await;
            let _ = store.try_update(|s| s.set_loading(false));
            result
        });
    });

    Effect::new(move || {
        let Some(video) = details.with(|d| current_video(d, &video_id.get_untracked())) else {
            return;
        };
        let Some(cfg) = config.with_untracked(|c| c.loaded().cloned()) else {
            return;
        };
        store.update(|s| s.add_watched_video(video.to_video_ref()));

        let channel_cfg = cfg.clone();
        let channel_id = video.snippet.channel_id.clone();
        spawn_fetch(channel, &channel_seq, async move { catalog::channel_details(&channel_cfg, &channel_id).await });
        let video_id = video.id;
        spawn_fetch(comments, &comments_seq, async move { catalog::comment_threads(&cfg, &video_id).await });
    });

    let on_retry = Callback::new(move |()| retry_catalog(config, attempt));

    let info = move || match config.with(|c| details.with(|d| gated(c, d))) {
        FetchState::Loaded(video) if video.id != video_id.get() => placeholder(),
        FetchState::Idle | FetchState::Loading => placeholder(),
        FetchState::Failed(message) => view! { <ErrorPanel message on_retry/> }.into_any(),
        FetchState::Loaded(video) => view! { <VideoDetails video channel comments show_comments/> }.into_any(),
    };

    view! {
        <div class="play-video">
            <iframe
                class="play-video__frame"
                src=move || embed_url(&video_id.get())
                title=move || {
                    details
                        .with(|d| current_video(d, &video_id.get()))
                        .map_or_else(|| "Video player".to_owned(), |v| v.snippet.title)
                }
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                referrerpolicy="strict-origin-when-cross-origin"
                allowfullscreen=true
            ></iframe>
            {info}
        </div>
    }
}

#[component]
fn VideoDetails(
    video: Video,
    channel: RwSignal<FetchState<Channel>>,
    comments: RwSignal<FetchState<Vec<CommentThread>>>,
    show_comments: RwSignal<bool>,
) -> impl IntoView {
    let store = expect_context::<StoreSignal>();
    let now = now_unix_secs();

    let video_ref = video.to_video_ref();
    let liked_id = video.id.clone();
    let is_liked = move || store.with(|s| s.is_liked(&liked_id));
    let on_like = move |_| {
        let video_ref = video_ref.clone();
        store.update(|s| {
            s.toggle_liked(video_ref);
        });
    };

    let channel_id = video.snippet.channel_id.clone();
    let is_subscribed = move || store.with(|s| s.is_subscribed(&channel_id));
    let subscribe_pending = {
        let is_subscribed = is_subscribed.clone();
        move || !is_subscribed() && channel.with(FetchState::is_pending)
    };
    let subscribe_video = video.clone();
    let on_subscribe = move |_| {
        // Unsubscribing only needs the id, so it never waits on the lookup.
        let snapshot = if store.with_untracked(|s| s.is_subscribed(&subscribe_video.snippet.channel_id)) {
            Some(subscribe_video.channel_ref())
        } else {
            channel.with_untracked(|c| subscription_snapshot(c, &subscribe_video))
        };
        if let Some(snapshot) = snapshot {
            store.update(|s| {
                s.toggle_subscribed(snapshot);
            });
        }
    };

    let avatar = move || channel.with(|c| c.loaded().map(|ch| ch.avatar_url().to_owned())).unwrap_or_default();
    let subscribers = move || {
        channel
            .with(|c| c.loaded().map(|ch| compact_count_opt(ch.statistics.subscriber_count)))
            .map(|count| format!("{count} Subscribers"))
            .unwrap_or_default()
    };

    let meta = views_and_age(video.statistics.view_count, video.snippet.published_at.as_deref(), now);
    let likes = compact_count_opt(video.statistics.like_count);
    let comment_total = compact_count_opt(video.statistics.comment_count);
    let description = truncate_chars(&video.snippet.description, DESCRIPTION_PREVIEW_CHARS);

    view! {
        <h3 class="play-video__title">{video.snippet.title.clone()}</h3>
        <div class="play-video__info">
            <p>{meta}</p>
            <button
                class="btn play-video__like"
                class:play-video__like--active=is_liked.clone()
                on:click=on_like
            >
                {
                    let is_liked = is_liked.clone();
                    move || if is_liked() { "👍 Liked" } else { "👍 Like" }
                }
                " "
                {likes}
            </button>
        </div>
        <hr/>
        <div class="publisher">
            <img class="publisher__avatar" src=avatar alt=""/>
            <div class="publisher__text">
                <p class="publisher__name">{video.snippet.channel_title.clone()}</p>
                <span class="publisher__subscribers">{subscribers}</span>
            </div>
            <button
                class="btn publisher__subscribe"
                class:publisher__subscribe--active=is_subscribed.clone()
                disabled=subscribe_pending
                on:click=on_subscribe
            >
                {
                    let is_subscribed = is_subscribed.clone();
                    move || if is_subscribed() { "Subscribed ✓" } else { "Subscribe" }
                }
            </button>
        </div>
        <div class="play-video__description">
            <p>{description}</p>
            <hr/>
            <button
                class="comments__header"
                aria-expanded=move || show_comments.get().to_string()
                on:click=move |_| show_comments.update(|open| *open = !*open)
            >
                <h4>{comment_total} " Comments"</h4>
                <span class="comments__arrow" class:comments__arrow--open=move || show_comments.get()>"▼"</span>
            </button>
            <Show when=move || show_comments.get()>
                <div class="comments">
                    {move || comment_list(comments, now)}
                </div>
            </Show>
        </div>
    }
}

fn placeholder() -> AnyView {
    view! {
        <div class="play-video__placeholder">
            <div class="skeleton skeleton--title"></div>
            <div class="skeleton skeleton--meta"></div>
        </div>
    }
    .into_any()
}

fn comment_list(comments: RwSignal<FetchState<Vec<CommentThread>>>, now: i64) -> AnyView {
    comments.with(|state| match state {
        FetchState::Idle | FetchState::Loading => view! { <p class="comments__status">"Loading comments..."</p> }.into_any(),
        FetchState::Failed(_) => view! { <p class="comments__status">"Comments are unavailable."</p> }.into_any(),
        FetchState::Loaded(threads) => threads
            .iter()
            .map(|thread| {
                let comment = thread.comment().clone();
                let age = relative_time_or_empty(comment.published_at.as_deref(), now);
                view! {
                    <div class="comment">
                        <img class="comment__avatar" src=comment.author_profile_image_url alt=""/>
                        <div>
                            <h3 class="comment__author">
                                {comment.author_display_name} " " <span>{age}</span>
                            </h3>
                            // textDisplay may carry markup from the catalog; render it as text.
                            <p class="comment__text">{comment.text_display}</p>
                            <div class="comment__actions">
                                "👍 " {compact_count_opt(comment.like_count)}
                            </div>
                        </div>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
    })
}
