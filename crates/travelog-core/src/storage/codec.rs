//! Blob encoding for the persisted collection.

use crate::error::Result;
use crate::storage::types::TravelEntry;

/// Serialize the whole collection as a JSON array.
pub fn encode_entries(entries: &[TravelEntry]) -> Result<String> {
    Ok(serde_json::to_string(entries)?)
}

/// Parse a JSON array of entries.
///
/// # Errors
///
/// Returns `TravelogError::Persistence` when the blob is not a valid
/// entry array. Callers loading the mirror treat that as empty.
pub fn decode_entries(blob: &str) -> Result<Vec<TravelEntry>> {
    Ok(serde_json::from_str(blob)?)
}
