//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages map router paths to composed feature views and own their fetch
//! lifecycles; the personalization pages render straight from the store.

pub mod history;
pub mod home;
pub mod liked;
pub mod search_results;
pub mod subscriptions;
pub mod video;
