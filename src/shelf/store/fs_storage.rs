use super::backend::KeyValueStorage;
use crate::error::{Result, ShelfError};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

const ITEM_EXT: &str = ".json";

/// File-backed storage: each key lives in `<root>/<key>.json`.
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`.
    pub fn item_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}{}", key, ITEM_EXT)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

/// Rejects keys that would escape the root or hide the item file.
pub fn validate_key(key: &str) -> Result<()> {
    let bad = key.is_empty()
        || key.starts_with('.')
        || key.contains(|c| c == '/' || c == '\\')
        || key.chars().any(char::is_control);
    if bad {
        return Err(ShelfError::Store(format!("Invalid storage key: {:?}", key)));
    }
    Ok(())
}

impl KeyValueStorage for FsStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(ShelfError::Io)?;
        debug!("read {} bytes from {}", content.len(), path.display());
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.item_path(key)?;
        self.ensure_dir()?;

        let tmp_file = self
            .root
            .join(format!(".{}-{}.tmp", key, std::process::id()));
        fs::write(&tmp_file, value).map_err(ShelfError::Io)?;
        fs::rename(&tmp_file, &path).map_err(ShelfError::Io)?;
        debug!("wrote {} bytes to {}", value.len(), path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_root_reads_as_none() {
        let temp = tempdir().unwrap();
        let storage = FsStorage::new(temp.path().join("not-yet"));
        assert_eq!(storage.get_item("books").unwrap(), None);
    }

    #[test]
    fn set_creates_root_and_file() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("data");
        let storage = FsStorage::new(root.clone());

        storage.set_item("books", "[]").unwrap();

        assert_eq!(fs::read_to_string(root.join("books.json")).unwrap(), "[]");
        assert_eq!(storage.get_item("books").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn set_overwrites_and_leaves_no_tmp_files() {
        let temp = tempdir().unwrap();
        let storage = FsStorage::new(temp.path().to_path_buf());

        storage.set_item("books", "first").unwrap();
        storage.set_item("books", "second").unwrap();

        assert_eq!(
            storage.get_item("books").unwrap().as_deref(),
            Some("second")
        );
        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn rejects_path_like_keys() {
        let temp = tempdir().unwrap();
        let storage = FsStorage::new(temp.path().to_path_buf());

        for key in ["", "../books", "a/b", ".hidden"] {
            assert!(
                matches!(storage.get_item(key), Err(ShelfError::Store(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }
}
