//! Draft editing state for templates
//!
//! The form-building UI accumulates raw field rows per section while
//! the user edits. `TemplateDraft` holds exactly that transient state
//! and turns it into a validated [`Template`] when the user saves; the
//! store and the plan builder only ever see finalized templates.

use std::str::FromStr;

use crate::schema::{Align, Field, SectionKind, Template, TemplateKind};
use crate::Result;

/// One field row as the UI captures it, all values raw strings
#[derive(Debug, Clone)]
pub struct FieldDraft {
    pub key: String,
    pub path: String,
    pub default: String,
    pub align: String,
}

impl Default for FieldDraft {
    /// A freshly added row: empty inputs, alignment preselected to Left
    fn default() -> Self {
        Self {
            key: String::new(),
            path: String::new(),
            default: String::new(),
            align: "Left".to_string(),
        }
    }
}

/// In-progress template, finalized into a [`Template`] on save
#[derive(Debug, Clone, Default)]
pub struct TemplateDraft {
    name: String,
    kind: Option<TemplateKind>,
    header: Vec<FieldDraft>,
    body: Vec<FieldDraft>,
    footer: Vec<FieldDraft>,
}

impl TemplateDraft {
    /// Start a draft with the given template name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the template category
    pub fn set_kind(&mut self, kind: TemplateKind) -> &mut Self {
        self.kind = Some(kind);
        self
    }

    /// Append a field row to a section, preserving insertion order
    pub fn push_field(&mut self, section: SectionKind, field: FieldDraft) -> &mut Self {
        self.rows_mut(section).push(field);
        self
    }

    /// Field rows of one section
    pub fn rows(&self, section: SectionKind) -> &[FieldDraft] {
        match section {
            SectionKind::Header => &self.header,
            SectionKind::Body => &self.body,
            SectionKind::Footer => &self.footer,
        }
    }

    fn rows_mut(&mut self, section: SectionKind) -> &mut Vec<FieldDraft> {
        match section {
            SectionKind::Header => &mut self.header,
            SectionKind::Body => &mut self.body,
            SectionKind::Footer => &mut self.footer,
        }
    }

    /// Validate the draft into a template
    ///
    /// Rejects the save with a descriptive reason when a row carries an
    /// alignment outside the enumerated set; nothing is coerced.
    pub fn finalize(self) -> Result<Template> {
        Ok(Template {
            name: self.name,
            kind: self.kind,
            header: finalize_rows(self.header)?,
            body: finalize_rows(self.body)?,
            footer: finalize_rows(self.footer)?,
        })
    }
}

fn finalize_rows(rows: Vec<FieldDraft>) -> Result<Vec<Field>> {
    rows.into_iter()
        .map(|row| {
            Ok(Field {
                key: row.key,
                path: row.path,
                default: row.default,
                align: Align::from_str(&row.align)?,
            })
        })
        .collect()
}
