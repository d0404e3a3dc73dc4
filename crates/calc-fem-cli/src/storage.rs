//! File-backed theme storage
//!
//! The file is a flat JSON object of string keys to string values, the
//! same shape `localStorage` exposes. A missing file reads as empty; every
//! write rewrites the whole file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use calc_fem::core::{CalcError, CalcResult};
use calc_fem::theme::ThemeStorage;
use tracing::debug;

use crate::error::CliResult;

/// Key/value storage persisted as a JSON object file
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl JsonFileStorage {
    /// Opens the storage file, treating a missing file as empty
    pub fn open(path: impl Into<PathBuf>) -> CliResult<Self> {
        let path = path.into();
        let items = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), entries = items.len(), "opened storage");
        Ok(Self { path, items })
    }

    /// The backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes every entry back to disk, creating parent directories
    pub fn flush(&self) -> CliResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl ThemeStorage for JsonFileStorage {
    fn get_item(&self, key: &str) -> CalcResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> CalcResult<()> {
        if self.items.get(key).map(String::as_str) == Some(value) && self.path.exists() {
            return Ok(());
        }
        self.items.insert(key.to_string(), value.to_string());
        self.flush().map_err(|e| CalcError::storage(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use calc_fem::theme::{Theme, ThemeSwitcher, THEME_STORAGE_KEY};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::open(dir.path().join("none.json")).unwrap();
        assert_eq!(storage.get_item(THEME_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_item_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("s.json");
        let mut storage = JsonFileStorage::open(&path).unwrap();
        storage.set_item(THEME_STORAGE_KEY, "2").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.json");
        let mut storage = JsonFileStorage::open(&path).unwrap();
        storage.set_item(THEME_STORAGE_KEY, "3").unwrap();

        let reopened = JsonFileStorage::open(&path).unwrap();
        assert_eq!(
            reopened.get_item(THEME_STORAGE_KEY).unwrap(),
            Some("3".to_string())
        );
    }

    #[test]
    fn test_file_is_flat_json_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.json");
        let mut storage = JsonFileStorage::open(&path).unwrap();
        storage.set_item(THEME_STORAGE_KEY, "2").unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[THEME_STORAGE_KEY], "2");
    }

    #[test]
    fn test_unrelated_keys_survive_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.json");
        fs::write(&path, r#"{"other":"kept"}"#).unwrap();

        let mut storage = JsonFileStorage::open(&path).unwrap();
        storage.set_item(THEME_STORAGE_KEY, "1").unwrap();

        let reopened = JsonFileStorage::open(&path).unwrap();
        assert_eq!(reopened.get_item("other").unwrap(), Some("kept".to_string()));
    }

    #[test]
    fn test_empty_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.json");
        fs::write(&path, "").unwrap();
        let storage = JsonFileStorage::open(&path).unwrap();
        assert_eq!(storage.get_item(THEME_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            JsonFileStorage::open(&path),
            Err(crate::CliError::Json(_))
        ));
    }

    #[test]
    fn test_switcher_over_file_storage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.json");

        let mut switcher = ThemeSwitcher::new(JsonFileStorage::open(&path).unwrap());
        assert_eq!(switcher.initial_theme(), Theme::One);
        switcher.select(Theme::Two);

        let switcher = ThemeSwitcher::new(JsonFileStorage::open(&path).unwrap());
        assert_eq!(switcher.initial_theme(), Theme::Two);
    }
}
