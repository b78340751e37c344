//! UI primitives for the Travelog CLI.
//!
//! - **Context**: environment detection (TTY, width, color, unicode)
//! - **Mode**: output mode resolution (json, plain, pretty)
//! - **Theme**: badges and text styles
//! - **Render**: tables, headers, receipts, hints
//! - **Progress**: the undo countdown
//! - **Toast**: notifications raised by the store
//! - **Format**: dates, truncation, byte sizes

mod context;
pub mod format;
mod mode;
pub mod progress;
pub mod render;
pub mod theme;
pub mod toast;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, blank_line, header, hint, kv, print, print_error, receipt, simple_table, Column,
};

pub use progress::Countdown;
