//! JSON output for trips and map markers.

use serde_json::{json, Value};

use travelog_core::map::{MapMarker, DEFAULT_CENTER, DEFAULT_ZOOM};
use travelog_core::TravelEntry;

/// An entry as persisted, plus its duration label.
///
/// Photos are large data URIs; without `include_images` only their count
/// is reported.
pub fn entry_json(entry: &TravelEntry, include_images: bool) -> serde_json::Result<Value> {
    let mut value = serde_json::to_value(entry)?;
    if let Value::Object(map) = &mut value {
        map.insert("durationLabel".into(), json!(entry.duration_label()));
        map.insert("imageCount".into(), json!(entry.images.len()));
        if !include_images {
            map.remove("images");
        }
        if entry.coordinates.is_none() {
            map.insert("coordinates".into(), Value::Null);
        }
    }
    Ok(value)
}

pub fn entries_json(entries: &[TravelEntry]) -> serde_json::Result<Vec<Value>> {
    entries.iter().map(|entry| entry_json(entry, false)).collect()
}

pub fn map_json(
    markers: &[MapMarker<'_>],
    selected: Option<&TravelEntry>,
) -> serde_json::Result<Value> {
    let markers: Vec<Value> = markers
        .iter()
        .map(|marker| {
            json!({
                "id": marker.entry.id,
                "destination": marker.entry.destination,
                "lat": marker.position.lat,
                "lng": marker.position.lng,
                "startDate": marker.entry.start_date.format("%Y-%m-%d").to_string(),
                "endDate": marker.entry.end_date.format("%Y-%m-%d").to_string(),
            })
        })
        .collect();
    let selected = selected.map(|entry| entry_json(entry, false)).transpose()?;
    Ok(json!({
        "center": { "lat": DEFAULT_CENTER.lat, "lng": DEFAULT_CENTER.lng },
        "zoom": DEFAULT_ZOOM,
        "markers": markers,
        "selected": selected,
    }))
}
