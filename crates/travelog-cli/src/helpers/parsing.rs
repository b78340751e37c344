//! Parsing helpers for dates, locations, views and output formats.

use chrono::NaiveDate;

use travelog_core::storage::parse_calendar_date;
use travelog_core::view::ViewMode;
use travelog_core::Coordinates;

use crate::cli::LocationArgs;
use crate::errors::CliError;

/// Parse a `--start`/`--end` value.
pub fn parse_date(flag: &str, value: &str) -> anyhow::Result<NaiveDate> {
    parse_calendar_date(value).map_err(|_| {
        CliError::invalid_input(format!("Invalid --{} date: {}", flag, value))
            .with_hint("Dates look like 2024-06-01.")
            .into()
    })
}

/// Coordinates from `--lat`/`--lng`, or `None` when neither was given.
pub fn parse_coordinates(args: &LocationArgs) -> anyhow::Result<Option<Coordinates>> {
    let (lat, lng) = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => (lat, lng),
        (None, None) => return Ok(None),
        _ => {
            return Err(CliError::invalid_input("--lat and --lng must be given together").into())
        }
    };
    let coordinates = Coordinates::new(lat, lng);
    coordinates
        .validate()
        .map_err(|e| CliError::invalid_input(e.to_string()))?;
    Ok(Some(coordinates))
}

pub fn parse_view(value: &str) -> anyhow::Result<ViewMode> {
    value.parse::<ViewMode>().map_err(|_| {
        CliError::invalid_input(format!("Unknown view: {}", value))
            .with_hint("Use `list` or `map`.")
            .into()
    })
}

/// Accept `table` or `plain` for `--format`.
pub fn check_format(value: Option<&str>) -> anyhow::Result<()> {
    match value {
        None | Some("table") | Some("plain") => Ok(()),
        Some(other) => Err(CliError::invalid_input(format!(
            "Invalid format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}
