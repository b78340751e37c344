//! Map projection of the collection.
//!
//! Only entries with a recorded location become markers. The surface keeps
//! the id the user picked so the detail panel can be resolved against the
//! latest collection.

use crate::storage::{Coordinates, EntryId, TravelEntry};

/// Initial map centre as (lat, lng).
pub const DEFAULT_CENTER: Coordinates = Coordinates { lat: 20.0, lng: 0.0 };

/// Initial zoom level, showing the whole world.
pub const DEFAULT_ZOOM: u8 = 2;

/// A located entry ready for plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker<'a> {
    pub entry: &'a TravelEntry,
    pub position: Coordinates,
}

/// Entries with coordinates, in the order given.
pub fn markers(entries: &[TravelEntry]) -> Vec<MapMarker<'_>> {
    entries
        .iter()
        .filter_map(|entry| {
            entry
                .coordinates
                .map(|position| MapMarker { entry, position })
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSurface {
    selected: Option<EntryId>,
}

impl MapSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a marker click.
    pub fn select(&mut self, id: EntryId) {
        self.selected = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&EntryId> {
        self.selected.as_ref()
    }

    /// The selected entry, if it still exists and still has a location.
    pub fn selected_entry<'a>(&self, entries: &'a [TravelEntry]) -> Option<&'a TravelEntry> {
        let id = self.selected.as_ref()?;
        entries
            .iter()
            .find(|entry| &entry.id == id && entry.has_location())
    }
}
