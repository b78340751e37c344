//! In-process mirror for tests and throwaway sessions.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::{Result, TravelogError};
use crate::storage::traits::{MirrorStore, STORAGE_KEY};

/// Mirror that keeps the blob in memory.
#[derive(Debug, Default)]
pub struct MemoryMirror {
    blob: Mutex<Option<String>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing blob.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
            ..Self::default()
        }
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current blob contents.
    pub fn blob(&self) -> Option<String> {
        self.blob.lock().ok().and_then(|guard| guard.clone())
    }
}

impl MirrorStore for MemoryMirror {
    fn read(&self) -> Result<Option<String>> {
        let guard = self
            .blob
            .lock()
            .map_err(|_| TravelogError::Persistence("Memory mirror poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn write(&self, blob: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(TravelogError::Persistence(
                "Memory mirror rejected write".to_string(),
            ));
        }
        let mut guard = self
            .blob
            .lock()
            .map_err(|_| TravelogError::Persistence("Memory mirror poisoned".to_string()))?;
        *guard = Some(blob.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        format!("memory:{}", STORAGE_KEY)
    }
}
