use super::{BlobStorage, DEFAULT_STORAGE_KEY};
use crate::date_key::{self, DateKey};
use crate::error::{DaynotesError, Result};
use crate::model::{MonthGroup, NoteCollection, NoteEntry};
use log::{debug, error, info, warn};
use std::collections::BTreeMap;

/// Owns the live note collection for one session.
///
/// Lifecycle: hydrate once on construction, mutate freely in memory, persist
/// with an explicit [`save`](NoteStore::save). Nothing touches storage between
/// those points.
pub struct NoteStore<S: BlobStorage> {
    storage: S,
    storage_key: String,
    notes: NoteCollection,
    dirty: bool,
    load_warning: Option<String>,
}

impl<S: BlobStorage> NoteStore<S> {
    /// Hydrate from the default storage key. Never fails: unreadable or
    /// unparseable storage yields an empty collection.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let (notes, load_warning) = hydrate(&storage, &storage_key);
        Self {
            storage,
            storage_key,
            notes,
            dirty: false,
            load_warning,
        }
    }

    /// Discard in-memory state and hydrate again from storage.
    pub fn reload(&mut self) {
        let (notes, load_warning) = hydrate(&self.storage, &self.storage_key);
        self.notes = notes;
        self.load_warning = load_warning;
        self.dirty = false;
    }

    /// The note for `key`, or "" when there is none.
    pub fn get_note(&self, key: &DateKey) -> &str {
        self.notes.get(key.as_str()).unwrap_or("")
    }

    /// Set the note for `key`. Blank text deletes the entry instead.
    pub fn set_note(&mut self, key: &DateKey, text: &str) {
        let changed = if text.trim().is_empty() {
            self.notes.remove(key.as_str())
        } else {
            self.notes.insert(key.to_string(), text.to_string())
        };
        self.dirty |= changed;
    }

    /// Serialize the whole collection and replace the stored blob.
    ///
    /// On failure the in-memory collection is left as it was and still counts
    /// as unsaved.
    pub fn save(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.notes)
            .map_err(|e| DaynotesError::StorageWrite(e.to_string()))?;

        if let Err(e) = self.storage.write(&self.storage_key, &blob) {
            error!(
                "event=notes_save status=error key={} error={}",
                self.storage_key, e
            );
            return Err(DaynotesError::StorageWrite(e.to_string()));
        }

        info!(
            "event=notes_save status=ok key={} entries={}",
            self.storage_key,
            self.notes.len()
        );
        self.dirty = false;
        self.load_warning = None;
        Ok(())
    }

    /// Partition notes by calendar month.
    ///
    /// Groups come out in chronological order and entries within a group by
    /// day. Only canonical keys are listed: a key that does not decode, or
    /// decodes but is not in padded `DD/MM/YYYY` form, is skipped because
    /// `get_note`/`set_note` can never reach it.
    pub fn group_by_month(&self) -> Vec<MonthGroup> {
        let mut months: BTreeMap<(i32, u32), Vec<NoteEntry>> = BTreeMap::new();

        for (raw_key, text) in self.notes.iter() {
            let key: DateKey = match raw_key.parse() {
                Ok(key) => key,
                Err(_) => {
                    debug!("event=group_skip reason=malformed_key key={:?}", raw_key);
                    continue;
                }
            };
            if key.as_str() != raw_key {
                debug!("event=group_skip reason=non_canonical_key key={:?}", raw_key);
                continue;
            }
            let (year, month_index, day) = key.parts();
            months.entry((year, month_index)).or_default().push(NoteEntry {
                weekday: key.weekday(),
                key,
                day,
                text: text.to_string(),
            });
        }

        months
            .into_iter()
            .map(|((year, month_index), mut entries)| {
                entries.sort_by_key(|e| e.day);
                MonthGroup {
                    label: date_key::month_label(year, month_index),
                    year,
                    month_index,
                    entries,
                }
            })
            .collect()
    }

    pub fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    /// True when there are in-memory changes not yet saved.
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Why hydration fell back to an empty collection, if it did. A missing
    /// blob is not a fallback.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}

fn hydrate<S: BlobStorage>(storage: &S, storage_key: &str) -> (NoteCollection, Option<String>) {
    let parsed = storage
        .read(storage_key)
        .map_err(|e| DaynotesError::StorageRead(e.to_string()))
        .and_then(|blob| match blob {
            Some(blob) => serde_json::from_str::<NoteCollection>(&blob)
                .map(Some)
                .map_err(|e| DaynotesError::StorageRead(e.to_string())),
            None => Ok(None),
        });

    let mut notes = match parsed {
        Ok(Some(notes)) => notes,
        Ok(None) => {
            debug!("event=notes_hydrate status=empty key={}", storage_key);
            return (NoteCollection::new(), None);
        }
        Err(err) => {
            warn!(
                "event=notes_hydrate status=fallback key={} error={}",
                storage_key, err
            );
            return (NoteCollection::new(), Some(err.to_string()));
        }
    };

    let dropped = notes.retain_non_blank();
    if dropped > 0 {
        debug!(
            "event=notes_hydrate dropped_blank={} key={}",
            dropped, storage_key
        );
    }
    debug!(
        "event=notes_hydrate status=ok key={} entries={}",
        storage_key,
        notes.len()
    );
    (notes, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StorageFixture;
    use crate::store::memory::MemStorage;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn empty_storage_hydrates_empty() {
        let store = NoteStore::new(MemStorage::new());
        assert!(store.notes().is_empty());
        assert!(!store.has_unsaved_changes());
    }

    #[test]
    fn hydrates_existing_notes() {
        let storage = StorageFixture::new()
            .with_note("01/01/2025", "New Year")
            .build();
        let store = NoteStore::new(storage);
        assert_eq!(store.get_note(&key("01/01/2025")), "New Year");
        assert_eq!(store.get_note(&key("02/01/2025")), "");
    }

    #[test]
    fn invalid_json_hydrates_empty() {
        let storage = MemStorage::with_blob(DEFAULT_STORAGE_KEY, "{not json");
        let store = NoteStore::new(storage);
        assert!(store.notes().is_empty());
    }

    #[test]
    fn wrong_shape_hydrates_empty() {
        for blob in ["[1,2,3]", "\"text\"", "{\"01/01/2025\": 5}", "null"] {
            let store = NoteStore::new(MemStorage::with_blob(DEFAULT_STORAGE_KEY, blob));
            assert!(store.notes().is_empty(), "blob {:?}", blob);
        }
    }

    #[test]
    fn read_error_hydrates_empty() {
        let storage = StorageFixture::new().with_note("01/01/2025", "x").build();
        storage.set_simulate_read_error(true);
        let store = NoteStore::new(storage);
        assert!(store.notes().is_empty());
        assert!(store
            .load_warning()
            .unwrap()
            .starts_with("Could not read stored notes"));
    }

    #[test]
    fn load_warning_only_on_fallback() {
        assert!(NoteStore::new(MemStorage::new()).load_warning().is_none());

        let storage = StorageFixture::new().with_note("01/01/2025", "x").build();
        assert!(NoteStore::new(storage).load_warning().is_none());

        let storage = MemStorage::with_blob(DEFAULT_STORAGE_KEY, "{not json");
        let mut store = NoteStore::new(&storage);
        assert!(store.load_warning().is_some());

        store.set_note(&key("01/01/2025"), "x");
        store.save().unwrap();
        assert!(store.load_warning().is_none());

        storage.write(DEFAULT_STORAGE_KEY, "[]").unwrap();
        store.reload();
        assert!(store.load_warning().is_some());
        storage.write(DEFAULT_STORAGE_KEY, "{}").unwrap();
        store.reload();
        assert!(store.load_warning().is_none());
    }

    #[test]
    fn hydration_drops_blank_entries() {
        let storage = StorageFixture::new()
            .with_note("01/01/2025", "   ")
            .with_note("02/01/2025", "kept")
            .build();
        let store = NoteStore::new(storage);
        assert_eq!(store.notes().len(), 1);
        assert!(!store.notes().contains_key("01/01/2025"));
    }

    #[test]
    fn empty_text_deletes_note() {
        let mut store = NoteStore::new(MemStorage::new());
        let k = key("10/03/2025");
        store.set_note(&k, "text");
        store.set_note(&k, "");
        assert!(!store.notes().contains_key(k.as_str()));
        assert_eq!(store.get_note(&k), "");
    }

    #[test]
    fn whitespace_text_deletes_note() {
        let mut store = NoteStore::new(MemStorage::new());
        let k = key("10/03/2025");
        store.set_note(&k, "text");
        store.set_note(&k, " \t\n");
        assert!(store.notes().is_empty());
    }

    #[test]
    fn set_note_is_idempotent() {
        let mut once = NoteStore::new(MemStorage::new());
        let mut twice = NoteStore::new(MemStorage::new());
        let k = key("10/03/2025");

        once.set_note(&k, "a");
        twice.set_note(&k, "a");
        twice.set_note(&k, "a");

        assert_eq!(once.notes(), twice.notes());
    }

    #[test]
    fn set_note_leaves_other_days_alone() {
        let storage = StorageFixture::new()
            .with_note("01/01/2025", "New Year")
            .build();
        let mut store = NoteStore::new(storage);
        store.set_note(&key("02/01/2025"), "Second");
        assert_eq!(store.get_note(&key("01/01/2025")), "New Year");
        assert_eq!(store.notes().len(), 2);
    }

    #[test]
    fn set_does_not_write_until_save() {
        let mut store = NoteStore::new(MemStorage::new());
        store.set_note(&key("01/01/2025"), "x");
        assert_eq!(store.storage().write_count(), 0);
        assert!(store.has_unsaved_changes());

        store.save().unwrap();
        assert_eq!(store.storage().write_count(), 1);
        assert!(!store.has_unsaved_changes());
    }

    #[test]
    fn deleting_missing_note_is_not_a_change() {
        let mut store = NoteStore::new(MemStorage::new());
        store.set_note(&key("01/01/2025"), "");
        assert!(!store.has_unsaved_changes());
    }

    #[test]
    fn save_writes_flat_json_object() {
        let mut store = NoteStore::new(MemStorage::new());
        store.set_note(&key("01/01/2025"), "New Year");
        store.set_note(&key("03/02/2025"), "Feb note");
        store.save().unwrap();

        let blob = store.storage().blob(DEFAULT_STORAGE_KEY).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&blob).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["01/01/2025"], "New Year");
        assert_eq!(parsed["03/02/2025"], "Feb note");
    }

    #[test]
    fn save_uses_configured_key() {
        let mut store = NoteStore::with_key(MemStorage::new(), "otherNotes");
        store.set_note(&key("01/01/2025"), "x");
        store.save().unwrap();
        assert!(store.storage().blob("otherNotes").is_some());
        assert!(store.storage().blob(DEFAULT_STORAGE_KEY).is_none());
    }

    #[test]
    fn save_failure_is_reported_and_keeps_state() {
        let mut store = NoteStore::new(MemStorage::new());
        store.set_note(&key("01/01/2025"), "keep me");
        let before = store.notes().clone();

        store.storage().set_simulate_write_error(true);
        let err = store.save().unwrap_err();
        assert!(matches!(err, DaynotesError::StorageWrite(_)));
        assert_eq!(store.notes(), &before);
        assert!(store.has_unsaved_changes());

        store.storage().set_simulate_write_error(false);
        store.save().unwrap();
        assert!(!store.has_unsaved_changes());
    }

    #[test]
    fn saved_notes_survive_a_new_store() {
        let storage = MemStorage::new();
        {
            let mut store = NoteStore::new(&storage);
            store.set_note(&key("15/08/2025"), "Holiday");
            store.save().unwrap();
        }
        let store = NoteStore::new(&storage);
        assert_eq!(store.get_note(&key("15/08/2025")), "Holiday");
    }

    #[test]
    fn last_save_wins_across_stores() {
        let storage = MemStorage::new();
        let mut first = NoteStore::new(&storage);
        let mut second = NoteStore::new(&storage);

        first.set_note(&key("01/01/2025"), "from first");
        second.set_note(&key("02/01/2025"), "from second");
        first.save().unwrap();
        second.save().unwrap();

        let reread = NoteStore::new(&storage);
        assert_eq!(reread.get_note(&key("01/01/2025")), "");
        assert_eq!(reread.get_note(&key("02/01/2025")), "from second");
    }

    #[test]
    fn reload_discards_unsaved_changes() {
        let storage = StorageFixture::new().with_note("01/01/2025", "saved").build();
        let mut store = NoteStore::new(storage);
        store.set_note(&key("01/01/2025"), "edited");
        store.reload();
        assert_eq!(store.get_note(&key("01/01/2025")), "saved");
        assert!(!store.has_unsaved_changes());
    }

    #[test]
    fn groups_by_month_in_day_order() {
        let storage = StorageFixture::new()
            .with_note("15/01/2025", "Mid")
            .with_note("03/02/2025", "Feb note")
            .with_note("01/01/2025", "New Year")
            .build();
        let store = NoteStore::new(storage);

        let groups = store.group_by_month();
        assert_eq!(groups.len(), 2);

        assert_eq!(groups[0].label, "January 2025");
        let days: Vec<u32> = groups[0].entries.iter().map(|e| e.day).collect();
        assert_eq!(days, vec![1, 15]);
        assert_eq!(groups[0].entries[0].text, "New Year");
        assert_eq!(groups[0].entries[1].text, "Mid");

        assert_eq!(groups[1].label, "February 2025");
        assert_eq!(groups[1].entries.len(), 1);
        assert_eq!(groups[1].entries[0].key.as_str(), "03/02/2025");
    }

    #[test]
    fn groups_are_chronological_across_years() {
        let storage = StorageFixture::new()
            .with_note("01/01/2026", "later")
            .with_note("31/12/2025", "earlier")
            .build();
        let store = NoteStore::new(storage);
        let labels: Vec<String> = store.group_by_month().into_iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["December 2025", "January 2026"]);
    }

    #[test]
    fn unpadded_duplicate_of_a_day_is_never_listed() {
        let storage = StorageFixture::new()
            .with_note("5/1/2025", "old")
            .with_note("05/01/2025", "new")
            .build();
        let mut store = NoteStore::new(storage);

        let groups = store.group_by_month();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].entries.len(), 1);
        assert_eq!(groups[0].entries[0].text, "new");

        store.set_note(&key("05/01/2025"), "");
        assert_eq!(store.get_note(&key("05/01/2025")), "");
        assert!(store.group_by_month().is_empty());
        assert!(store.notes().contains_key("5/1/2025"));
    }

    #[test]
    fn grouping_skips_malformed_keys_but_keeps_them_stored() {
        let storage = StorageFixture::new()
            .with_note("not-a-date", "junk")
            .with_note("31/04/2025", "impossible")
            .with_note("05/01/2025", "ok")
            .build();
        let mut store = NoteStore::new(storage);

        let groups = store.group_by_month();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].entries.len(), 1);
        assert!(groups[0].entries[0].is_sunday());

        store.save().unwrap();
        let blob = store.storage().blob(DEFAULT_STORAGE_KEY).unwrap();
        assert!(blob.contains("not-a-date"));
    }

    #[test]
    fn unpadded_keys_group_under_their_day() {
        let storage = StorageFixture::new().with_note("5/1/2025", "loose").build();
        let store = NoteStore::new(storage);
        let groups = store.group_by_month();
        assert_eq!(groups[0].entries[0].key.as_str(), "05/01/2025");
        assert_eq!(groups[0].entries[0].day, 5);
    }
}
