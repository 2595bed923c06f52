use crate::commands::{load_warning, CmdMessage, CmdResult, NoteUpdate};
use crate::date_key::DateKey;
use crate::error::Result;
use crate::store::{BlobStorage, NoteStore};

/// Apply the updates in order, then save once.
///
/// When the stored blob was unreadable, saving replaces it and a warning says
/// so. If the save fails the error is returned and the edits stay in memory.
pub fn set<S: BlobStorage>(store: &mut NoteStore<S>, updates: &[NoteUpdate]) -> Result<CmdResult> {
    if updates.is_empty() {
        return Ok(CmdResult::default());
    }

    let mut result = CmdResult::default();
    if let Some(warning) = load_warning(store) {
        result.add_message(warning);
    }
    for update in updates {
        let had_note = !store.get_note(&update.key).is_empty();
        store.set_note(&update.key, &update.text);

        let day = format!("{} ({})", update.key, update.key.weekday());
        let message = if !update.text.trim().is_empty() {
            CmdMessage::success(format!("Note saved for {}", day))
        } else if had_note {
            CmdMessage::success(format!("Note cleared for {}", day))
        } else {
            CmdMessage::info(format!("No note to clear for {}", day))
        };
        result.add_message(message);
    }

    if store.has_unsaved_changes() {
        store.save()?;
    }
    Ok(result)
}

pub fn get<S: BlobStorage>(store: &NoteStore<S>, key: &DateKey) -> Result<CmdResult> {
    let text = store.get_note(key).to_string();
    let mut result = CmdResult::default();
    if text.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No note for {} ({})",
            key,
            key.weekday()
        )));
    }
    Ok(result.with_note(key.clone(), text))
}
