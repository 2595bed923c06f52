use crate::commands::{load_warning, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BlobStorage, NoteStore};

/// Saved notes grouped by month.
pub fn run<S: BlobStorage>(store: &NoteStore<S>) -> Result<CmdResult> {
    let groups = store.group_by_month();
    let mut result = CmdResult::default();
    if let Some(warning) = load_warning(store) {
        result.add_message(warning);
    }
    if groups.is_empty() {
        result.add_message(CmdMessage::info("No notes saved yet."));
    }
    Ok(result.with_month_groups(groups))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StorageFixture;
    use crate::store::memory::MemStorage;
    use crate::store::DEFAULT_STORAGE_KEY;

    #[test]
    fn empty_store_says_so() {
        let store = NoteStore::new(MemStorage::new());
        let result = run(&store).unwrap();
        assert!(result.month_groups.is_empty());
        assert_eq!(result.messages[0].content, "No notes saved yet.");
    }

    #[test]
    fn returns_groups() {
        let storage = StorageFixture::new()
            .with_note("01/01/2025", "New Year")
            .with_note("15/01/2025", "Mid")
            .with_note("03/02/2025", "Feb note")
            .build();
        let store = NoteStore::new(storage);
        let result = run(&store).unwrap();
        assert_eq!(result.month_groups.len(), 2);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn unreadable_storage_is_reported() {
        let store = NoteStore::new(MemStorage::with_blob(DEFAULT_STORAGE_KEY, "[]"));
        let result = run(&store).unwrap();
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0]
            .content
            .starts_with("Could not read stored notes"));
        assert_eq!(result.messages[1].content, "No notes saved yet.");
    }
}
