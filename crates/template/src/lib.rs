//! Template Engine - template schema, field resolution, and render planning
//!
//! This crate provides:
//! - Template schema types (Header/Body/Footer sections of key/path/default/align fields)
//! - Template parsing from JSON
//! - Path-based field resolution against nested data
//! - Render-plan building: the ordered instruction list an external
//!   document renderer lays out, one `key: value` line per field
//!
//! # Example
//!
//! ```ignore
//! use template::{parse_template, PlanBuilder};
//!
//! let template = parse_template(template_json)?;
//! let data: serde_json::Value = serde_json::from_str(data_json)?;
//! let plan = PlanBuilder::new(&template).build(&data);
//! ```

pub mod draft;
pub mod parser;
mod plan;
mod schema;

pub use draft::{FieldDraft, TemplateDraft};
pub use parser::parse_template;
pub use plan::PlanBuilder;
pub use schema::*;

use thiserror::Error;

/// Errors that can occur during template processing
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to parse template: {0}")]
    ParseError(String),

    #[error("Invalid alignment {0:?}: expected one of Left, Center, Right")]
    InvalidAlignment(String),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
