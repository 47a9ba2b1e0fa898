//! In-memory template store
//!
//! Backs tests and previews, and models the document-database variant
//! of the store: upsert by name, whole-record replacement, and no
//! storage-internal identifiers in the values handed back.

use std::collections::BTreeMap;

use template::Template;

use crate::{Result, StoreError, TemplateStore};

/// Template store held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, Template>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored templates
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no templates
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TemplateStore for MemoryStore {
    fn save(&mut self, name: &str, template: &Template) -> Result<()> {
        self.records.insert(name.to_string(), template.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Template> {
        self.records
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn list(&self) -> Result<Vec<Template>> {
        Ok(self.records.values().cloned().collect())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        self.records.remove(name);
        Ok(())
    }
}
