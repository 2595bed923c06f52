//! # Storage Layer
//!
//! Notes are persisted as **one serialized blob under one well-known key**.
//! The [`BlobStorage`] trait is the port to whatever holds that blob, and
//! [`NoteStore`] owns the live collection on top of it.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with [`memory::MemStorage`] (no filesystem needed)
//! - Keep the note semantics (delete-on-empty, grouping, save) **decoupled**
//!   from where the bytes end up
//!
//! ## Implementations
//!
//! - [`fs::FileStorage`]: Production file-based storage
//!   - Each storage key is one file: `{key}.json`
//!   - Writes go to a temp file first and are renamed into place
//!
//! - [`memory::MemStorage`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate read and write failures
//!
//! ## Storage Format
//!
//! For `FileStorage` with the default key:
//! ```text
//! <data dir>/
//! ├── calendarNotes.json   # {"05/01/2025": "note text", ...}
//! └── config.json          # Configuration
//! ```
//!
//! The blob is a flat JSON object of date key to note text. There is no
//! version header; a blob that does not parse as that shape reads as "no notes".
//!
//! ## Consistency
//!
//! A save replaces the whole blob. Two stores that hydrate from the same key,
//! mutate independently and save will overwrite each other (last write wins).

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod note_store;

pub use note_store::NoteStore;

/// Storage key the notes blob lives under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "calendarNotes";

/// Abstract key-value blob storage.
///
/// Uses `&self` for writes; implementations needing mutation use interior
/// mutability.
pub trait BlobStorage {
    /// Read the blob stored under `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key` in full.
    fn write(&self, key: &str, blob: &str) -> Result<()>;
}

impl<S: BlobStorage + ?Sized> BlobStorage for &S {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, blob: &str) -> Result<()> {
        (**self).write(key, blob)
    }
}
