//! # Travelog Core
//!
//! Core library for Travelog - a personal travel log.
//!
//! This crate holds the domain model and the state logic shared by every
//! front-end, independent of how trips are displayed.
//!
//! ## Architecture
//!
//! - **storage**: Data model and the key-value mirror the collection is persisted to
//! - **store**: The entry store (CRUD, ordering, change signalling)
//! - **notify**: Store events and auto-dismissing toasts
//! - **deferred**: Delete-with-undo
//! - **view** / **map**: List/map selection and the located-entries projection
//! - **images**: Photo attachments as data URIs
//! - **duration**: Trip length labels

pub mod deferred;
pub mod duration;
pub mod error;
pub mod fs;
pub mod images;
pub mod map;
pub mod notify;
pub mod storage;
pub mod store;
pub mod view;

pub use error::{Result, TravelogError};
pub use storage::{Coordinates, EntryDraft, EntryId, MirrorStore, TravelEntry};
pub use store::EntryStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
