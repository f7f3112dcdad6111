//! Collapsible category sidebar for the home feed.

use leptos::prelude::*;

use crate::state::ui::{Category, UiState};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let collapsed = move || !ui.with(|u| u.sidebar_expanded);

    view! {
        <aside class="sidebar" class:sidebar--collapsed=collapsed>
            <div class="sidebar__links">
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        let active = move || ui.with(|u| u.category == category);
                        view! {
                            <button
                                class="sidebar__link"
                                class:sidebar__link--active=active
                                title=category.label()
                                on:click=move |_| ui.update(|u| u.category = category)
                            >
                                <span class="sidebar__icon" aria-hidden="true">{category_icon(category)}</span>
                                <span class="sidebar__label">{category.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </aside>
    }
}

fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Home => "🏠",
        Category::Gaming => "🎮",
        Category::Automobiles => "🚗",
        Category::Sports => "⚽",
        Category::Entertainment => "🎬",
        Category::Technology => "💻",
        Category::Music => "🎵",
        Category::Blogs => "📝",
        Category::News => "📰",
    }
}
