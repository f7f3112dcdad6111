//! Player page for `/video/:category_id/:video_id`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validates the route parameters and hands bad ones to the top-level error
//! boundary. Navigating between videos keeps the page mounted; the player
//! and recommendations refetch from their signal props.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::play_video::PlayVideo;
use crate::components::recommended::Recommended;
use crate::routes::{RouteError, video_params};

#[component]
pub fn VideoPage() -> impl IntoView {
    let params = use_params_map();
    let route = Memo::new(move |_| params.with(|p| video_params(p.get("category_id"), p.get("video_id"))));

    // Only flips when the route goes from valid to invalid or back.
    let valid = Memo::new(move |_| route.with(|r| r.as_ref().map(|_| ()).map_err(RouteError::clone)));
    let video_id = Signal::derive(move || route.with(|r| r.as_ref().map(|p| p.video_id.clone()).unwrap_or_default()));
    let category_id =
        Signal::derive(move || route.with(|r| r.as_ref().map(|p| p.category_id.clone()).unwrap_or_default()));

    move || {
        valid.get().map(|()| {
            view! {
                <div class="video-page">
                    <PlayVideo video_id/>
                    <Recommended category_id current_id=video_id/>
                </div>
            }
        })
    }
}
