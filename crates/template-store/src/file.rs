//! File-backed template store

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use template::Template;
use tracing::{debug, warn};

use crate::{Result, StoreError, TemplateStore};

/// Template store backed by a single JSON file
///
/// The file holds one pretty-printed JSON object mapping template
/// names to records. Every write lands in a temporary file in the same
/// directory and replaces the store file in one rename, so a reader
/// never observes a half-written record.
///
/// Unreadable or malformed content recovers to an empty store: the
/// cleared state is persisted back, one warning is emitted, and
/// [`FileStore::reset_count`] records that the transition happened.
pub struct FileStore {
    path: PathBuf,
    resets: Cell<usize>,
}

impl FileStore {
    /// Open a store at the given file path, creating parent directories
    ///
    /// The file itself is created lazily on the first save.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        debug!(path = %path.display(), "opened template store");
        Ok(Self {
            path,
            resets: Cell::new(0),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of times malformed content forced a reset to empty
    pub fn reset_count(&self) -> usize {
        self.resets.get()
    }

    fn read_all(&self) -> Result<BTreeMap<String, Template>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str(&content) {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "template store malformed, resetting to empty"
                );
                let records = BTreeMap::new();
                self.write_all(&records)?;
                self.resets.set(self.resets.get() + 1);
                Ok(records)
            }
        }
    }

    fn write_all(&self, records: &BTreeMap<String, Template>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, records)?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::IoError(e.error))?;
        Ok(())
    }
}

impl TemplateStore for FileStore {
    fn save(&mut self, name: &str, template: &Template) -> Result<()> {
        let mut records = self.read_all()?;
        records.insert(name.to_string(), template.clone());
        self.write_all(&records)?;
        debug!(name, "saved template");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Template> {
        self.read_all()?
            .remove(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn list(&self) -> Result<Vec<Template>> {
        Ok(self.read_all()?.into_values().collect())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let mut records = self.read_all()?;
        if records.remove(name).is_some() {
            self.write_all(&records)?;
            debug!(name, "deleted template");
        }
        Ok(())
    }
}
