//! Argument parsing helpers for the CLI.

mod parsing;

pub use parsing::{check_format, parse_coordinates, parse_date, parse_view};
