//! Tables and detail blocks for trips.

use travelog_core::images::decode_data_uri;
use travelog_core::map::MapMarker;
use travelog_core::TravelEntry;

use crate::ui::format::{format_bytes, format_date, format_date_range, single_line, truncate};
use crate::ui::theme::{styled, styles};
use crate::ui::{kv, simple_table, Column, UiContext};

const DESTINATION_MAX: usize = 32;
const NOTES_PREVIEW_MAX: usize = 120;

/// Trips as a table, one row each.
///
/// Plain rows: `id  start  end  duration  destination`.
pub fn entry_table(ui: &UiContext, entries: &[TravelEntry]) -> String {
    if ui.mode.is_pretty() {
        let columns = [
            Column::new("ID"),
            Column::new("DESTINATION"),
            Column::new("DATES"),
            Column::new("LENGTH"),
            Column::new("PHOTOS"),
            Column::new("PIN"),
        ];
        let pin = if ui.unicode { "\u{25CF}" } else { "*" };
        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|entry| {
                vec![
                    entry.id.short().to_string(),
                    truncate(&entry.destination, DESTINATION_MAX),
                    format_date_range(entry.start_date, entry.end_date),
                    entry.duration_label(),
                    photo_count(entry),
                    if entry.has_location() { pin } else { "" }.to_string(),
                ]
            })
            .collect();
        simple_table(ui, &columns, &rows)
    } else {
        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|entry| {
                vec![
                    entry.id.to_string(),
                    entry.start_date.to_string(),
                    entry.end_date.to_string(),
                    entry.duration_label(),
                    entry.destination.clone(),
                ]
            })
            .collect();
        simple_table(ui, &[], &rows)
    }
}

/// Every field of one trip as display lines.
pub fn entry_detail(ui: &UiContext, entry: &TravelEntry) -> Vec<String> {
    let mut lines = Vec::new();
    if ui.mode.is_pretty() {
        lines.push(styled(&entry.destination, styles::accent(), ui.color));
        lines.push(kv(ui, "ID", entry.id.as_str()));
        lines.push(kv(
            ui,
            "Dates",
            &format!(
                "{} ({})",
                format_date_range(entry.start_date, entry.end_date),
                entry.duration_label()
            ),
        ));
        let location = match entry.coordinates {
            Some(c) => format!("{:.4}, {:.4}", c.lat, c.lng),
            None => "Not set".to_string(),
        };
        lines.push(kv(ui, "Location", &location));
        if !entry.images.is_empty() {
            lines.push(kv(
                ui,
                "Photos",
                &format!("{} ({})", entry.images.len(), format_bytes(image_bytes(entry))),
            ));
            for (index, image) in entry.images.iter().enumerate() {
                let mime = decode_data_uri(image)
                    .map(|(mime, _)| mime)
                    .unwrap_or_else(|_| "unreadable".to_string());
                lines.push(format!("  {}. {}", index + 1, mime));
            }
        }
        lines.push(kv(ui, "Added", &format_date(entry.created_at.date_naive())));
        if let Some(updated) = entry.updated_at {
            lines.push(kv(ui, "Updated", &format_date(updated.date_naive())));
        }
        if let Some(notes) = &entry.notes {
            lines.push(String::new());
            lines.extend(notes.lines().map(|line| format!("  {}", line)));
        }
    } else {
        lines.push(kv(ui, "entry_id", entry.id.as_str()));
        lines.push(kv(ui, "destination", &entry.destination));
        lines.push(kv(ui, "start_date", &entry.start_date.to_string()));
        lines.push(kv(ui, "end_date", &entry.end_date.to_string()));
        lines.push(kv(ui, "duration", &entry.duration_label()));
        if let Some(c) = entry.coordinates {
            lines.push(kv(ui, "lat", &c.lat.to_string()));
            lines.push(kv(ui, "lng", &c.lng.to_string()));
        }
        lines.push(kv(ui, "images", &entry.images.len().to_string()));
        if let Some(notes) = &entry.notes {
            lines.push(kv(ui, "notes", &single_line(notes)));
        }
        lines.push(kv(ui, "created_at", &entry.created_at.to_rfc3339()));
        if let Some(updated) = entry.updated_at {
            lines.push(kv(ui, "updated_at", &updated.to_rfc3339()));
        }
    }
    lines
}

/// Pinned trips with their positions.
///
/// Plain rows: `id  lat  lng  destination`.
pub fn marker_table(ui: &UiContext, markers: &[MapMarker<'_>]) -> String {
    if ui.mode.is_pretty() {
        let columns = [
            Column::new("ID"),
            Column::new("DESTINATION"),
            Column::new("LAT"),
            Column::new("LNG"),
            Column::new("DATES"),
        ];
        let rows: Vec<Vec<String>> = markers
            .iter()
            .map(|marker| {
                vec![
                    marker.entry.id.short().to_string(),
                    truncate(&marker.entry.destination, DESTINATION_MAX),
                    format!("{:.4}", marker.position.lat),
                    format!("{:.4}", marker.position.lng),
                    format_date_range(marker.entry.start_date, marker.entry.end_date),
                ]
            })
            .collect();
        simple_table(ui, &columns, &rows)
    } else {
        let rows: Vec<Vec<String>> = markers
            .iter()
            .map(|marker| {
                vec![
                    marker.entry.id.to_string(),
                    marker.position.lat.to_string(),
                    marker.position.lng.to_string(),
                    marker.entry.destination.clone(),
                ]
            })
            .collect();
        simple_table(ui, &[], &rows)
    }
}

/// Summary shown for the selected marker.
pub fn marker_popup(ui: &UiContext, entry: &TravelEntry) -> Vec<String> {
    let mut lines = Vec::new();
    if ui.mode.is_pretty() {
        lines.push(styled(&entry.destination, styles::accent(), ui.color));
        lines.push(format!(
            "  {}",
            format_date_range(entry.start_date, entry.end_date)
        ));
        if let Some(notes) = &entry.notes {
            lines.push(format!(
                "  {}",
                styled(
                    &truncate(&single_line(notes), NOTES_PREVIEW_MAX),
                    styles::dim(),
                    ui.color
                )
            ));
        }
    } else {
        lines.push(kv(ui, "selected", entry.id.as_str()));
        lines.push(kv(ui, "destination", &entry.destination));
        lines.push(kv(
            ui,
            "dates",
            &format!("{}..{}", entry.start_date, entry.end_date),
        ));
        if let Some(notes) = &entry.notes {
            lines.push(kv(ui, "notes", &single_line(notes)));
        }
    }
    lines
}

fn photo_count(entry: &TravelEntry) -> String {
    match entry.images.len() {
        0 => String::new(),
        n => n.to_string(),
    }
}

fn image_bytes(entry: &TravelEntry) -> usize {
    entry
        .images
        .iter()
        .filter_map(|image| decode_data_uri(image).ok())
        .map(|(_, bytes)| bytes.len())
        .sum()
}
