//! Core types for hoalog.
//!
//! This crate holds everything the server and the CLI share:
//! - `Event` and `EventStore` for the read-only timeline data
//! - `query` for filtering and ordering the timeline
//! - `timeline`, `carousel`, `detail` and `modal` for view state
//! - `scroll_lock` for the page scroll lock held by an open modal

pub mod carousel;
pub mod detail;
pub mod error;
pub mod event;
pub mod modal;
pub mod presentation;
pub mod query;
pub mod scroll_lock;
pub mod site_config;
pub mod store;
pub mod timeline;

// Re-export event types at crate root for convenience
pub use event::*;
