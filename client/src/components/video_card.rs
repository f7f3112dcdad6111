//! Video card used by the feed, search, liked, and history grids.

use leptos::prelude::*;

/// Number of placeholder cards shown while a grid loads.
pub const SKELETON_CARDS: usize = 12;

/// A clickable video thumbnail with title and metadata lines.
#[component]
pub fn VideoCard(
    href: String,
    thumbnail: String,
    title: String,
    channel_title: String,
    /// Secondary line, e.g. `12K views • 3 days ago`.
    #[prop(optional, into)]
    meta: String,
    /// Avatar shown next to the channel name; may arrive after the card.
    #[prop(optional, into)]
    channel_icon: MaybeProp<String>,
) -> impl IntoView {
    let alt = title.clone();
    view! {
        <a class="video-card" href=href>
            <img class="video-card__thumbnail" src=thumbnail alt=alt loading="lazy"/>
            <div class="video-card__body">
                <h2 class="video-card__title">{title}</h2>
                <div class="video-card__channel">
                    {move || channel_icon.get().map(|src| view! { <img class="video-card__channel-icon" src=src alt=""/> })}
                    <h3>{channel_title}</h3>
                </div>
                <p class="video-card__meta">{meta}</p>
            </div>
        </a>
    }
}

/// Grey placeholder grid.
#[component]
pub fn CardSkeletons() -> impl IntoView {
    (0..SKELETON_CARDS)
        .map(|_| {
            view! {
                <div class="video-card video-card--skeleton" aria-hidden="true">
                    <div class="skeleton skeleton--thumbnail"></div>
                    <div class="video-card__body">
                        <div class="skeleton skeleton--title"></div>
                        <div class="skeleton skeleton--channel"></div>
                        <div class="skeleton skeleton--meta"></div>
                    </div>
                </div>
            }
        })
        .collect_view()
}
