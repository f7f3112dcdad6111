//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation chrome and the catalog-backed views while
//! reading/writing shared state from Leptos context providers.

pub mod feed;
pub mod navbar;
pub mod play_video;
pub mod recommended;
pub mod sidebar;
pub mod status_panel;
pub mod video_card;
