//! Core data types for the travel log.
//!
//! These types are also the persisted mirror layout: field names are
//! camelCase on the wire so existing blobs load unchanged.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::{Result, TravelogError};

/// Opaque, unique entry identifier.
///
/// New ids are UUID v4 strings. Any string is accepted on load, so ids
/// written by older clients (e.g. millisecond timestamps) survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, for compact display.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// The `{0,0}` value persisted in place of "no location".
    pub const UNSET: Coordinates = Coordinates { lat: 0.0, lng: 0.0 };

    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether this is the sentinel that means "no location recorded".
    pub fn is_unset(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }

    /// Check that both components are finite and within range.
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(TravelogError::Validation(format!(
                "Latitude out of range (-90..90): {}",
                self.lat
            )));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(TravelogError::Validation(format!(
                "Longitude out of range (-180..180): {}",
                self.lng
            )));
        }
        Ok(())
    }
}

/// One recorded trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelEntry {
    /// Assigned by the store on creation; never changes
    pub id: EntryId,

    /// Display name of the place visited
    pub destination: String,

    #[serde(with = "calendar_date")]
    pub start_date: NaiveDate,

    #[serde(with = "calendar_date")]
    pub end_date: NaiveDate,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub notes: Option<String>,

    /// Data-URI encoded photos, in display order
    #[serde(default)]
    pub images: Vec<String>,

    /// `None` is persisted as the `{0,0}` sentinel
    #[serde(default, with = "sentinel_coordinates")]
    pub coordinates: Option<Coordinates>,

    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TravelEntry {
    pub(crate) fn from_draft(id: EntryId, draft: EntryDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            destination: draft.destination,
            start_date: draft.start_date,
            end_date: draft.end_date,
            notes: draft.notes,
            images: draft.images,
            coordinates: draft.coordinates,
            created_at,
            updated_at: None,
        }
    }

    /// Whether the entry can be placed on the map.
    pub fn has_location(&self) -> bool {
        self.coordinates.is_some()
    }

    /// Human label for the trip length, e.g. "2 Weeks".
    pub fn duration_label(&self) -> String {
        crate::duration::trip_duration_label(self.start_date, self.end_date)
    }

    /// The editable fields of this entry.
    pub fn to_draft(&self) -> EntryDraft {
        EntryDraft {
            destination: self.destination.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            notes: self.notes.clone(),
            images: self.images.clone(),
            coordinates: self.coordinates,
        }
    }

    /// Overwrite the editable fields, keeping identity and timestamps.
    pub fn apply_draft(&mut self, draft: EntryDraft) {
        self.destination = draft.destination;
        self.start_date = draft.start_date;
        self.end_date = draft.end_date;
        self.notes = draft.notes;
        self.images = draft.images;
        self.coordinates = draft.coordinates;
    }
}

/// Builder for a trip that has not been added to the store yet.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: Option<String>,
    pub images: Vec<String>,
    pub coordinates: Option<Coordinates>,
}

impl EntryDraft {
    pub fn new(destination: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            destination: destination.into(),
            start_date,
            end_date,
            notes: None,
            images: Vec::new(),
            coordinates: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.images.push(image.into());
        self
    }

    /// Drop the image at `index`; out-of-range indexes are ignored.
    pub fn without_image(mut self, index: usize) -> Self {
        if index < self.images.len() {
            self.images.remove(index);
        }
        self
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }
}

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps contribute their UTC date.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate> {
    parse_calendar_date_in(value, &Local)
}

/// Parse a calendar date, reading full timestamps as wall-clock dates in `zone`.
///
/// Browser clients stored local midnight as a UTC instant, so the date part
/// has to be taken after shifting back into the user's zone.
pub fn parse_calendar_date_in<Tz: TimeZone>(value: &str, zone: &Tz) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(zone).date_naive());
    }
    Err(TravelogError::InvalidInput(format!(
        "Invalid date (expected YYYY-MM-DD or ISO-8601): {}",
        value
    )))
}

mod calendar_date {
    use super::*;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_calendar_date(&raw).map_err(serde::de::Error::custom)
    }
}

mod sentinel_coordinates {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<Coordinates>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        value.unwrap_or(Coordinates::UNSET).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Option<Coordinates>, D::Error> {
        let raw = Option::<Coordinates>::deserialize(deserializer)?;
        Ok(raw.filter(|coords| !coords.is_unset()))
    }
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.is_empty()))
}
