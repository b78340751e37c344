//! Persistence adapter: the key-value mirror of the entry collection.

pub mod codec;
pub mod file;
pub mod memory;
pub mod traits;
pub mod types;

pub use codec::{decode_entries, encode_entries};
pub use file::FileMirror;
pub use memory::MemoryMirror;
pub use traits::{MirrorStore, STORAGE_KEY};
pub use types::{parse_calendar_date, parse_calendar_date_in, Coordinates, EntryDraft, EntryId, TravelEntry};
