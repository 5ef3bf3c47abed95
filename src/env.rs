//! Injected environment: persisted key/value storage and the reported language preference.
use std::{collections::BTreeMap, path::PathBuf};

use crate::error::StorageError;

/// Durable key/value store (browser local storage, a file, memory).
pub trait Storage: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Source of the user's preferred language (`navigator.language`, OS locale).
pub trait LanguagePreference: Send + Sync {
    fn preferred_language(&self) -> Option<String>;
}

/// Everything the localizer reads from outside the page.
pub struct Environment {
    pub storage: Box<dyn Storage>,
    pub preference: Box<dyn LanguagePreference>,
}

impl Environment {
    pub fn new(storage: impl Storage + 'static, preference: impl LanguagePreference + 'static) -> Self {
        Self { storage: Box::new(storage), preference: Box::new(preference) }
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage(BTreeMap<String, String>);

impl MemoryStorage {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, key: &str, value: &str) -> Self { self.0.insert(key.into(), value.into()); self }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> { self.0.get(key).cloned() }
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> { self.0.insert(key.into(), value.into()); Ok(()) }
}

/// One JSON object on disk, rewritten on every `set`.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open (or lazily create) the store at `path`. A missing or unreadable
    /// file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = std::fs::read(&path).ok()
            .and_then(|raw| serde_json::from_slice(&raw).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    /// `<config dir>/site-i18n/storage.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("site-i18n").join("storage.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> { self.entries.get(key).cloned() }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.into(), value.into());
        if let Some(dir) = self.path.parent() { std::fs::create_dir_all(dir)?; }
        let raw = serde_json::to_vec_pretty(&self.entries)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// Operating system locale via `sys-locale`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLocale;

impl LanguagePreference for SystemLocale {
    fn preferred_language(&self) -> Option<String> { sys_locale::get_locale() }
}

#[derive(Debug, Default, Clone)]
pub struct FixedPreference(pub Option<String>);

impl FixedPreference {
    pub fn new(lang: &str) -> Self { Self(Some(lang.to_string())) }
}

impl LanguagePreference for FixedPreference {
    fn preferred_language(&self) -> Option<String> { self.0.clone() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let mut store = FileStorage::open(&path);
        assert_eq!(store.get("lang"), None);
        store.set("lang", "id").unwrap();
        assert_eq!(FileStorage::open(&path).get("lang").as_deref(), Some("id"));
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();
        let mut store = FileStorage::open(&path);
        assert_eq!(store.get("lang"), None);
        store.set("lang", "en").unwrap();
        assert_eq!(FileStorage::open(&path).get("lang").as_deref(), Some("en"));
    }

    #[test]
    fn memory_storage_overwrites() {
        let mut store = MemoryStorage::new().with("lang", "en");
        store.set("lang", "id").unwrap();
        assert_eq!(store.get("lang").as_deref(), Some("id"));
    }
}
