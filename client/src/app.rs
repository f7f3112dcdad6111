//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::status_panel::{EmptyState, ErrorFallback};
use crate::net::api::fetch_client_config;
use crate::net::types::ClientConfig;
use crate::pages::{
    history::HistoryPage, home::HomePage, liked::LikedPage, search_results::SearchResultsPage,
    subscriptions::SubscriptionsPage, video::VideoPage,
};
use crate::routes::HOME_PATH;
use crate::state::fetch::{FetchState, RequestSeq, spawn_fetch};
use crate::state::personalization::PersonalizationStore;
use crate::state::storage::{KeyValueStore, LocalStorage, MemoryStorage};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Context handle for the personalization store.
pub type StoreSignal = RwSignal<PersonalizationStore>;

/// Context handle for the catalog configuration served by `/api/config`.
pub type ConfigSignal = RwSignal<FetchState<ClientConfig>>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the store, UI state, and catalog configuration contexts, then
/// sets up client-side routing under a single error boundary.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store: StoreSignal = RwSignal::new(PersonalizationStore::new(browser_storage()));
    let ui = RwSignal::new(UiState::default());
    let config: ConfigSignal = RwSignal::new(FetchState::Idle);

    provide_context(store);
    provide_context(ui);
    provide_context(config);

    // Effects only run in the browser, so hydration and the config request
    // never happen during SSR.
    Effect::new(move || store.update(PersonalizationStore::load));
    Effect::new(move || reload_config(config));
    Effect::new(move || dark_mode::apply(store.with(PersonalizationStore::is_dark_mode)));

    let sidebar_collapsed = move || !ui.with(|u| u.sidebar_expanded);

    view! {
        <Stylesheet id="leptos" href="/pkg/tubeview.css"/>
        <Title text="TubeView"/>

        <Router>
            <Navbar/>
            <main class="app-main" class:app-main--sidebar-collapsed=sidebar_collapsed>
                <ErrorBoundary fallback=|errors| view! { <ErrorFallback errors/> }>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route
                            path=(StaticSegment("video"), ParamSegment("category_id"), ParamSegment("video_id"))
                            view=VideoPage
                        />
                        <Route path=(StaticSegment("search"), ParamSegment("query")) view=SearchResultsPage/>
                        <Route path=StaticSegment("history") view=HistoryPage/>
                        <Route path=StaticSegment("liked") view=LikedPage/>
                        <Route path=StaticSegment("subscriptions") view=SubscriptionsPage/>
                    </Routes>
                </ErrorBoundary>
            </main>
        </Router>
    }
}

/// (Re)request the catalog configuration.
pub fn reload_config(config: ConfigSignal) {
    spawn_fetch(config, &RequestSeq::new(), fetch_client_config());
}

/// Retry action for catalog views: refetch the config when that is what
/// failed, otherwise bump the view's attempt counter.
pub fn retry_catalog(config: ConfigSignal, attempt: RwSignal<u32>) {
    if config.with_untracked(|c| c.error().is_some()) {
        reload_config(config);
    } else {
        attempt.update(|n| *n += 1);
    }
}

/// `localStorage` when the browser exposes it, otherwise an in-memory map
/// that lasts for the session.
fn browser_storage() -> Arc<dyn KeyValueStore> {
    if LocalStorage::is_available() {
        Arc::new(LocalStorage)
    } else {
        #[cfg(feature = "hydrate")]
        log::warn!("localStorage unavailable; personalization will not persist");
        Arc::new(MemoryStorage::new())
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <EmptyState
            icon="🔍"
            title="Page not found"
            body="The page you are looking for does not exist."
            link=(HOME_PATH, "Back to home")
        />
    }
}
