//! Template Store - persistence of named template definitions
//!
//! This crate provides:
//! - The [`TemplateStore`] contract: save/load/list/delete keyed by
//!   template name, with upsert semantics
//! - [`FileStore`]: a single-JSON-file store with atomic
//!   replace-on-write and self-healing recovery from malformed content
//! - [`MemoryStore`]: the same contract held in memory
//!
//! # Example
//!
//! ```ignore
//! use template_store::{FileStore, TemplateStore};
//!
//! let mut store = FileStore::open("templates.json")?;
//! store.save("Salary Template", &template)?;
//! let loaded = store.load("Salary Template")?;
//! ```

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use template::Template;
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to encode store: {0}")]
    EncodeError(#[from] serde_json::Error),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Persistence contract for named template definitions
///
/// `save` upserts: saving under an existing name replaces the prior
/// record whole, last write wins. Implementations must never expose a
/// half-written record to a concurrent `load` or `list`.
pub trait TemplateStore {
    /// Store or overwrite the template under `name`
    fn save(&mut self, name: &str, template: &Template) -> Result<()>;

    /// Return the record saved under `name`
    fn load(&self, name: &str) -> Result<Template>;

    /// Return all stored templates; callers must not depend on ordering
    fn list(&self) -> Result<Vec<Template>>;

    /// Remove the record under `name`; an absent name is not an error
    fn delete(&mut self, name: &str) -> Result<()>;
}
