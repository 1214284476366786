//! Persisted client preferences.
//!
//! A flat string key/value store. The only key in use is the theme.

use postgen_error::{PostgenResult, StorageError, StorageErrorKind};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Key/value store that survives restarts.
pub trait PreferenceStore: Send {
    /// Read a value. Missing keys are `Ok(None)`.
    fn get(&self, key: &str) -> PostgenResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> PostgenResult<()>;
}

/// Store that lives only as long as the process. Used by snapshots and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> PostgenResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PostgenResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON file store, by default `<config_dir>/postgen/preferences.json`.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform's configuration directory.
    pub fn at_default_location() -> PostgenResult<Self> {
        let dir = dirs::config_dir().ok_or_else(|| {
            StorageError::new(StorageErrorKind::InvalidPath(
                "No configuration directory on this platform".to_string(),
            ))
        })?;
        Ok(Self::new(dir.join("postgen").join("preferences.json")))
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> PostgenResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            StorageError::new(StorageErrorKind::Corrupt(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
            .into()
        })
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> PostgenResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn set(&mut self, key: &str, value: &str) -> PostgenResult<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let content = serde_json::to_string_pretty(&values).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(e.to_string()))
        })?;
        std::fs::write(&self.path, content).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!("Preference saved");
        Ok(())
    }
}
