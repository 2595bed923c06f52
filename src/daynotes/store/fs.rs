use super::BlobStorage;
use crate::error::{DaynotesError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// File-backed blob storage: each key is a `{key}.json` file in `root`.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the file backing `key`.
    pub fn blob_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DaynotesError::Io)?;
        }
        Ok(())
    }
}

/// Storage keys become file names: ASCII letters, digits, '.', '_' and '-',
/// not starting with a dot.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(DaynotesError::Store(format!("Invalid storage key: {:?}", key)))
    }
}

impl BlobStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(DaynotesError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, blob: &str) -> Result<()> {
        let path = self.blob_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, blob).map_err(DaynotesError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(DaynotesError::Io(e));
        }
        Ok(())
    }
}
