//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the app's own server, `catalog` calls the external video
//! catalog directly from the browser, and `types` defines both wire schemas.

pub mod api;
pub mod catalog;
pub mod types;
