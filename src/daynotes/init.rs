use crate::api::DaynotesApi;
use crate::commands::DaynotesPaths;
use crate::config::DaynotesConfig;
use crate::error::{DaynotesError, Result};
use crate::store::fs::FileStorage;
use crate::store::NoteStore;
use directories::ProjectDirs;
use log::warn;
use std::path::{Path, PathBuf};

pub struct DaynotesContext {
    pub api: DaynotesApi<FileStorage>,
    pub config: DaynotesConfig,
}

/// Platform data directory, e.g. `~/.local/share/daynotes` on Linux.
pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "daynotes", "daynotes")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DaynotesError::Store("Could not determine data directory".to_string()))
}

/// Resolve the data dir and load its config.
///
/// A broken config file falls back to defaults rather than blocking access
/// to the notes.
pub fn load_config(data_dir: Option<&Path>) -> Result<(PathBuf, DaynotesConfig)> {
    let data_dir = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_data_dir()?,
    };

    let config = DaynotesConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!("event=config_load status=fallback error={}", e);
        DaynotesConfig::default()
    });
    Ok((data_dir, config))
}

/// Hydrate the note store for `data_dir` under the configured storage key.
pub fn open(data_dir: PathBuf, config: DaynotesConfig) -> DaynotesContext {
    let storage = FileStorage::new(data_dir.clone());
    let store = NoteStore::with_key(storage, config.storage_key.clone());
    let api = DaynotesApi::new(store, DaynotesPaths { data_dir });
    DaynotesContext { api, config }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn open_dir(dir: &Path) -> DaynotesContext {
        let (data_dir, config) = load_config(Some(dir)).unwrap();
        open(data_dir, config)
    }

    #[test]
    fn initializes_against_empty_dir() {
        let temp = TempDir::new().unwrap();
        let ctx = open_dir(temp.path());
        assert_eq!(ctx.config, DaynotesConfig::default());
        assert!(ctx.api.store().notes().is_empty());
        assert_eq!(ctx.api.paths().data_dir, temp.path());
    }

    #[test]
    fn uses_configured_storage_key() {
        let temp = TempDir::new().unwrap();
        let mut config = DaynotesConfig::default();
        config.set("storage-key", "work").unwrap();
        config.save(temp.path()).unwrap();
        fs::write(temp.path().join("work.json"), r#"{"05/01/2025":"standup"}"#).unwrap();

        let ctx = open_dir(temp.path());
        assert_eq!(ctx.api.store().storage_key(), "work");
        assert_eq!(ctx.api.store().notes().get("05/01/2025"), Some("standup"));
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), "{{{").unwrap();
        let ctx = open_dir(temp.path());
        assert_eq!(ctx.config, DaynotesConfig::default());
    }

    #[test]
    fn corrupt_notes_file_starts_empty() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("calendarNotes.json"), "not json").unwrap();
        let ctx = open_dir(temp.path());
        assert!(ctx.api.store().notes().is_empty());
    }
}
