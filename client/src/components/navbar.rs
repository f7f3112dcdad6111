//! Top navigation bar: sidebar toggle, search with recent terms, page links,
//! dark-mode toggle, and the global loading bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above the routes. Submitting a search records the term in
//! the personalization store before navigating, so the dropdown reflects it
//! immediately on the results page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::StoreSignal;
use crate::routes::{HISTORY_PATH, HOME_PATH, LIKED_PATH, SUBSCRIPTIONS_PATH, search_path, search_query};
use crate::state::personalization::PersonalizationStore;
use crate::state::ui::UiState;

#[component]
pub fn Navbar() -> impl IntoView {
    let store = expect_context::<StoreSignal>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let query = RwSignal::new(String::new());
    let show_recent = RwSignal::new(false);

    let run_search = move |raw: String| {
        let Ok(term) = search_query(Some(raw)) else {
            return;
        };
        store.update(|s| {
            s.add_search_term(&term);
        });
        query.set(term.clone());
        show_recent.set(false);
        navigate(&search_path(&term), NavigateOptions::default());
    };
    let run_search_key = run_search.clone();
    let run_search_click = run_search.clone();

    let recent_terms = move || store.with(|s| s.search_history().to_vec());
    let has_recent = move || store.with(|s| !s.search_history().is_empty());

    view! {
        <nav class="navbar">
            <Show when=move || store.with(PersonalizationStore::is_loading)>
                <div class="navbar__loading-bar" role="progressbar" aria-label="Loading"></div>
            </Show>

            <div class="navbar__left">
                <button
                    class="navbar__menu"
                    title="Toggle sidebar"
                    aria-label="Toggle sidebar"
                    on:click=move |_| ui.update(|u| u.sidebar_expanded = !u.sidebar_expanded)
                >
                    "☰"
                </button>
                <a class="navbar__logo" href=HOME_PATH>"TubeView"</a>
            </div>

            <div class="navbar__middle">
                <div class="navbar__search">
                    <input
                        type="text"
                        placeholder="Search"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                        on:focus=move |_| show_recent.set(true)
                        on:blur=move |_| show_recent.set(false)
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                run_search_key(query.get_untracked());
                            }
                        }
                    />
                    <button
                        class="navbar__search-button"
                        title="Search"
                        aria-label="Search"
                        on:click=move |_| run_search_click(query.get_untracked())
                    >
                        "🔍"
                    </button>

                    <Show when=move || show_recent.get() && has_recent()>
                        <div class="navbar__recent">
                            <div class="navbar__recent-header">
                                <span>"Recent searches"</span>
                                // mousedown fires before the input's blur hides the list
                                <button
                                    class="navbar__recent-clear"
                                    on:mousedown=move |ev: leptos::ev::MouseEvent| {
                                        ev.prevent_default();
                                        store.update(PersonalizationStore::clear_search_history);
                                    }
                                >
                                    "Clear"
                                </button>
                            </div>
                            {
                                let run_search = run_search.clone();
                                move || {
                                    recent_terms()
                                        .into_iter()
                                        .map(|term| {
                                            let run_search = run_search.clone();
                                            let label = term.clone();
                                            view! {
                                                <button
                                                    class="navbar__recent-item"
                                                    on:mousedown=move |ev: leptos::ev::MouseEvent| {
                                                        ev.prevent_default();
                                                        run_search(term.clone());
                                                    }
                                                >
                                                    {label}
                                                </button>
                                            }
                                        })
                                        .collect_view()
                                }
                            }
                        </div>
                    </Show>
                </div>
            </div>

            <div class="navbar__right">
                <a class="navbar__link" href=HISTORY_PATH>"History"</a>
                <a class="navbar__link" href=LIKED_PATH>"Liked"</a>
                <a class="navbar__link" href=SUBSCRIPTIONS_PATH>"Subscriptions"</a>
                <button
                    class="btn navbar__dark-toggle"
                    title="Toggle dark mode"
                    on:click=move |_| store.update(PersonalizationStore::toggle_dark_mode)
                >
                    {move || if store.with(PersonalizationStore::is_dark_mode) { "☀" } else { "☾" }}
                </button>
            </div>
        </nav>
    }
}
