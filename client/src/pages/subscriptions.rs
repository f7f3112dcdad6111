//! Subscribed channels grid with a count and unsubscribe buttons.

use leptos::prelude::*;

use crate::app::StoreSignal;
use crate::components::status_panel::EmptyState;
use crate::routes::HOME_PATH;
use crate::util::format::{compact_count_str, initial, pluralize};

#[component]
pub fn SubscriptionsPage() -> impl IntoView {
    let store = expect_context::<StoreSignal>();

    move || {
        let channels = store.with(|s| s.subscribed_channels().to_vec());
        if channels.is_empty() {
            return view! {
                <div class="subscriptions-page">
                    <EmptyState
                        icon="📋"
                        title="No subscriptions"
                        body="Channels you subscribe to will appear here"
                        link=(HOME_PATH, "Discover channels")
                    />
                </div>
            }
            .into_any();
        }

        let count = pluralize(channels.len(), "channel");
        view! {
            <div class="subscriptions-page">
                <div class="page-header">
                    <h1>"Subscriptions"</h1>
                    <p>{count}</p>
                </div>
                <div class="subscriptions-grid">
                    {channels
                        .into_iter()
                        .map(|channel| {
                            let subscribers = format!("{} subscribers", compact_count_str(&channel.subscriber_count));
                            let title = channel.title.clone();
                            let avatar = if channel.thumbnail.is_empty() {
                                view! {
                                    <div class="subscription-card__avatar subscription-card__avatar--initial">
                                        {initial(&title)}
                                    </div>
                                }
                                .into_any()
                            } else {
                                let alt = title.clone();
                                view! { <img class="subscription-card__avatar" src=channel.thumbnail.clone() alt=alt/> }
                                    .into_any()
                            };
                            view! {
                                <div class="subscription-card">
                                    {avatar}
                                    <div class="subscription-card__info">
                                        <h3>{title}</h3>
                                        <p>{subscribers}</p>
                                        <button
                                            class="btn subscription-card__unsubscribe"
                                            title="Unsubscribe"
                                            on:click=move |_| {
                                                let channel = channel.clone();
                                                store.update(|s| {
                                                    s.toggle_subscribed(channel);
                                                });
                                            }
                                        >
                                            "Subscribed ✓"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any()
    }
}
