use super::BlobStorage;
use crate::error::{DaynotesError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory blob storage for testing.
///
/// Uses `RefCell` for interior mutability since stores are single-threaded.
#[derive(Default)]
pub struct MemStorage {
    blobs: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
    simulate_read_error: RefCell<bool>,
    simulate_write_error: RefCell<bool>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a raw blob under `key`.
    pub fn with_blob(key: &str, blob: &str) -> Self {
        let storage = Self::new();
        storage
            .blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        storage
    }

    /// Enable read error simulation for testing hydration fallback.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Raw blob currently stored under `key`, bypassing error simulation.
    pub fn blob(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl BlobStorage for MemStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        if *self.simulate_read_error.borrow() {
            return Err(DaynotesError::Store("Simulated read error".to_string()));
        }
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, blob: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(DaynotesError::Store("Simulated write error".to_string()));
        }
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::DEFAULT_STORAGE_KEY;
    use std::collections::BTreeMap;

    /// Builds a `MemStorage` whose default-key blob holds the given notes.
    #[derive(Default)]
    pub struct StorageFixture {
        notes: BTreeMap<String, String>,
    }

    impl StorageFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_note(mut self, key: &str, text: &str) -> Self {
            self.notes.insert(key.to_string(), text.to_string());
            self
        }

        pub fn build(self) -> MemStorage {
            let blob = serde_json::to_string(&self.notes).unwrap();
            MemStorage::with_blob(DEFAULT_STORAGE_KEY, &blob)
        }
    }
}
