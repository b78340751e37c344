//! Output formatting for trips.
//!
//! JSON shapes live in `json`; tables and detail blocks in `text`.

mod json;
mod text;

pub use json::{entries_json, entry_json, map_json};
pub use text::{entry_detail, entry_table, marker_popup, marker_table};
