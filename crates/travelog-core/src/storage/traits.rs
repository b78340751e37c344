//! Persistence adapter trait definition.
//!
//! A `MirrorStore` holds the serialized collection as one blob under a
//! fixed key. It is a best-effort mirror: the in-memory collection owned
//! by the store stays authoritative.

use crate::error::Result;

/// Key under which the collection blob is stored.
pub const STORAGE_KEY: &str = "travelEntries";

/// Scoped key-value access to the persisted collection.
///
/// Implementations must ensure:
/// - `write` overwrites the whole blob unconditionally
/// - `read` returns the last successfully written blob, or `None`
/// - a failed `write` leaves the previous blob readable
pub trait MirrorStore: Send + Sync {
    /// Read the last-written blob.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` if nothing has been written yet.
    ///
    /// # Errors
    ///
    /// Returns `TravelogError::Persistence` if the backing medium cannot
    /// be read.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the blob.
    ///
    /// # Errors
    ///
    /// Returns `TravelogError::Persistence` if the write fails.
    fn write(&self, blob: &str) -> Result<()>;

    /// Short description of where the blob lives, for diagnostics.
    fn describe(&self) -> String;
}

impl<T: MirrorStore + ?Sized> MirrorStore for Box<T> {
    fn read(&self) -> Result<Option<String>> {
        (**self).read()
    }

    fn write(&self, blob: &str) -> Result<()> {
        (**self).write(blob)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: MirrorStore + ?Sized> MirrorStore for std::sync::Arc<T> {
    fn read(&self) -> Result<Option<String>> {
        (**self).read()
    }

    fn write(&self, blob: &str) -> Result<()> {
        (**self).write(blob)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
