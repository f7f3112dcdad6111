//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `personalization` is the persisted per-session store; `storage` is the
//! adapter it writes through. `fetch` and `ui` are transient view state that
//! never reaches storage.

pub mod collections;
pub mod fetch;
pub mod personalization;
pub mod storage;
pub mod ui;
