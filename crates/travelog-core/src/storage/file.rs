//! File-backed mirror: one JSON file per key inside a data directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, TravelogError};
use crate::storage::traits::{MirrorStore, STORAGE_KEY};

/// Mirror stored at `<dir>/travelEntries.json`.
#[derive(Debug, Clone)]
pub struct FileMirror {
    path: PathBuf,
}

impl FileMirror {
    /// Mirror for the default key inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", STORAGE_KEY)),
        }
    }

    /// Mirror at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MirrorStore for FileMirror {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(TravelogError::Persistence(format!(
                "Failed to read {}: {}",
                self.path.display(),
                err
            ))),
        }
    }

    fn write(&self, blob: &str) -> Result<()> {
        crate::fs::write_atomic(&self.path, blob.as_bytes()).map_err(|e| {
            TravelogError::Persistence(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
