//! Home page: category sidebar beside the popular-video feed.

use leptos::prelude::*;

use crate::components::feed::Feed;
use crate::components::sidebar::Sidebar;
use crate::state::ui::UiState;

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Sidebar/>
        <div class="home-page" class:home-page--wide=move || !ui.with(|u| u.sidebar_expanded)>
            <Feed/>
        </div>
    }
}
