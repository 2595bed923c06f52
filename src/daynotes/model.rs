use crate::date_key::{DateKey, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All saved notes, keyed by the date key string.
///
/// Serializes to (and from) a flat JSON object, `{"05/01/2025": "text", ...}`.
/// Keys are kept as raw strings so that entries under keys this crate cannot
/// parse survive a load/save cycle untouched. Values are never blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteCollection {
    notes: BTreeMap<String, String>,
}

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.notes.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.notes.contains_key(key)
    }

    /// Insert or overwrite. Returns true if the collection changed.
    pub fn insert(&mut self, key: String, text: String) -> bool {
        match self.notes.get(&key) {
            Some(existing) if *existing == text => false,
            _ => {
                self.notes.insert(key, text);
                true
            }
        }
    }

    /// Returns true if an entry was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.notes.remove(key).is_some()
    }

    /// Drop entries whose text is empty or whitespace-only, returning how
    /// many were removed.
    pub fn retain_non_blank(&mut self) -> usize {
        let before = self.notes.len();
        self.notes.retain(|_, text| !text.trim().is_empty());
        before - self.notes.len()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.notes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A note resolved against its day, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEntry {
    pub key: DateKey,
    pub day: u32,
    pub weekday: Weekday,
    pub text: String,
}

impl NoteEntry {
    pub fn is_sunday(&self) -> bool {
        self.weekday == Weekday::Sunday
    }
}

/// Notes that fall within a single calendar month, ordered by day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGroup {
    /// e.g. "January 2025"
    pub label: String,
    pub year: i32,
    pub month_index: u32,
    pub entries: Vec<NoteEntry>,
}
