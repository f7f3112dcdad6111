//! Shared error, empty, and boundary-fallback panels.
//!
//! DESIGN
//! ======
//! Every view renders failures and empty collections through these so the
//! retry and "go somewhere else" affordances look the same everywhere.

use leptos::prelude::*;

/// Failed fetch with a "Try again" action.
#[component]
pub fn ErrorPanel(#[prop(into)] message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="status-panel status-panel--error">
            <div class="status-panel__icon" aria-hidden="true">"⚠️"</div>
            <h3>"Something went wrong"</h3>
            <p class="status-panel__message">{message}</p>
            <button class="btn btn--primary" on:click=move |_| on_retry.run(())>
                "Try again"
            </button>
        </div>
    }
}

/// Empty collection with an optional call-to-action link.
#[component]
pub fn EmptyState(
    icon: &'static str,
    title: &'static str,
    body: &'static str,
    #[prop(optional)] link: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="status-panel status-panel--empty">
            <div class="status-panel__icon" aria-hidden="true">{icon}</div>
            <h2>{title}</h2>
            <p>{body}</p>
            {link.map(|(href, label)| view! { <a class="btn btn--primary" href=href>{label}</a> })}
        </div>
    }
}

/// Fallback for the top-level error boundary: lists the captured errors and
/// offers a full reload.
#[component]
pub fn ErrorFallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let messages = move || {
        errors
            .get()
            .into_iter()
            .map(|(_, err)| view! { <li>{err.to_string()}</li> })
            .collect_view()
    };

    view! {
        <div class="status-panel status-panel--fatal">
            <div class="status-panel__icon" aria-hidden="true">"💥"</div>
            <h2>"Oops! Something went wrong"</h2>
            <p>"We're sorry, but something unexpected happened."</p>
            <ul class="status-panel__details">{messages}</ul>
            <button class="btn btn--primary" on:click=move |_| reload_page()>
                "Reload page"
            </button>
        </div>
    }
}

fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("page reload failed: {e:?}");
            }
        }
    }
}
