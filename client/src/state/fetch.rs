//! Per-view remote fetch lifecycle.
//!
//! DESIGN
//! ======
//! Every page that talks to the catalog owns one `FetchState` signal and a
//! `RequestSeq` for it. Views are not coordinated with each other. Within a
//! view only the most recently started request may store its outcome, and a
//! completion for an unmounted view is dropped with the disposed signal.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

/// Lifecycle of one remote fetch owned by a view.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Request succeeded.
    Loaded(T),
    /// Request failed with a user-facing message.
    Failed(String),
}

impl<T> FetchState<T> {
    /// Fold a fetch result into a terminal state.
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    /// True while idle or loading, i.e. no outcome to show yet.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Map the loaded value, keeping the other states.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            Self::Idle => FetchState::Idle,
            Self::Loading => FetchState::Loading,
            Self::Loaded(value) => FetchState::Loaded(f(value)),
            Self::Failed(message) => FetchState::Failed(message),
        }
    }
}

/// Fold the shared config fetch into a view's own fetch state.
///
/// A config failure is reported as the view's failure, and while the config
/// is still pending the view is pending too.
pub fn gated<C, T: Clone>(config: &FetchState<C>, view: &FetchState<T>) -> FetchState<T> {
    match config {
        FetchState::Failed(message) => FetchState::Failed(message.clone()),
        FetchState::Idle | FetchState::Loading => FetchState::Loading,
        FetchState::Loaded(_) => view.clone(),
    }
}

/// Monotonic request counter for one view.
///
/// Each request takes a ticket with `begin`; only the holder of the latest
/// ticket is current.
#[derive(Clone, Debug, Default)]
pub struct RequestSeq(Arc<AtomicU64>);

impl RequestSeq {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding every earlier ticket.
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Supersede outstanding requests without starting a new one.
    pub fn invalidate(&self) {
        self.begin();
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::Relaxed) == ticket
    }
}

/// Store a finished request's outcome if `ticket` is still current.
///
/// Returns whether the outcome was stored.
pub fn settle<T, E>(target: RwSignal<FetchState<T>>, seq: &RequestSeq, ticket: u64, result: Result<T, E>) -> bool
where
    T: Send + Sync + 'static,
    E: Display,
{
    if let Err(err) = &result {
        log::warn!("catalog request failed: {err}");
    }
    if !seq.is_current(ticket) {
        log::debug!("dropping superseded response (ticket {ticket})");
        return false;
    }
    target.try_set(FetchState::from_result(result)).is_none()
}

/// Mark `target` loading, then run `request` in the background and store its
/// outcome. Outside the browser the request is dropped unpolled and the
/// target stays `Loading`.
///
/// Starting a request supersedes any earlier one on the same `seq`, so a slow
/// response for a previous route never overwrites a newer one. The
/// completion uses `try_set`, so a view that unmounted mid-flight simply
/// discards the result.
pub fn spawn_fetch<T, E, F>(target: RwSignal<FetchState<T>>, seq: &RequestSeq, request: F)
where
    T: Send + Sync + 'static,
    E: Display + 'static,
    F: Future<Output = Result<T, E>> + 'static,
{
    let ticket = seq.begin();
    target.set(FetchState::Loading);
    #[cfg(feature = "hydrate")]
    {
        let seq = seq.clone();
        leptos::task::spawn_local(async move {
            let result = request.await;
            settle(target, &seq, ticket, result);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ticket;
        drop(request);
    }
}
