//! Template schema types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TemplateError;

/// Text alignment for a rendered field line
///
/// Serialized under the capitalized names stored templates carry
/// (`"Left"`, `"Center"`, `"Right"`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for Align {
    type Err = TemplateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Left" => Ok(Align::Left),
            "Center" => Ok(Align::Center),
            "Right" => Ok(Align::Right),
            other => Err(TemplateError::InvalidAlignment(other.to_string())),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Align::Left => "Left",
            Align::Center => "Center",
            Align::Right => "Right",
        };
        f.write_str(name)
    }
}

/// One label/value pair of a template section
///
/// `path` travels under the wire name `map`, matching stored records.
/// `key` and `path` may be empty, never absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Field {
    /// Label printed before the resolved value
    #[serde(default)]
    pub key: String,

    /// Lookup path into the data source
    #[serde(rename = "map")]
    #[serde(default)]
    pub path: String,

    /// Value substituted when the path does not resolve
    #[serde(default)]
    pub default: String,

    /// Text alignment
    #[serde(default)]
    pub align: Align,
}

/// The three template sections, in render order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SectionKind {
    Header,
    Body,
    Footer,
}

impl SectionKind {
    /// All sections in the fixed Header → Body → Footer render order
    pub const ALL: [SectionKind; 3] = [SectionKind::Header, SectionKind::Body, SectionKind::Footer];

    /// Display name of the section
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Header => "Header",
            SectionKind::Body => "Body",
            SectionKind::Footer => "Footer",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Template category
///
/// The UI uses this to pick a data source (a user record for salary
/// slips, a bill record for bills); the resolution core carries it as
/// data and never branches on it. Unknown categories round-trip
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum TemplateKind {
    Salary,
    Bill,
    Other(String),
}

impl From<String> for TemplateKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "salary" => TemplateKind::Salary,
            "bill" => TemplateKind::Bill,
            _ => TemplateKind::Other(s),
        }
    }
}

impl From<TemplateKind> for String {
    fn from(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::Salary => "salary".to_string(),
            TemplateKind::Bill => "bill".to_string(),
            TemplateKind::Other(s) => s,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateKind::Salary => f.write_str("salary"),
            TemplateKind::Bill => f.write_str("bill"),
            TemplateKind::Other(s) => f.write_str(s),
        }
    }
}

/// A named, ordered definition of Header/Body/Footer field lists
///
/// Sections travel under the capitalized wire names of stored records
/// and default to empty when a key is missing, so older records that
/// lack a section still parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Template {
    /// Unique name, the primary identifier in the store
    #[serde(default)]
    pub name: String,

    /// Optional category
    #[serde(rename = "type")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TemplateKind>,

    /// Header fields, in render order
    #[serde(rename = "Header")]
    #[serde(default)]
    pub header: Vec<Field>,

    /// Body fields, in render order
    #[serde(rename = "Body")]
    #[serde(default)]
    pub body: Vec<Field>,

    /// Footer fields, in render order
    #[serde(rename = "Footer")]
    #[serde(default)]
    pub footer: Vec<Field>,
}

impl Template {
    /// Create an empty template with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Fields of one section, in stored order
    pub fn section(&self, kind: SectionKind) -> &[Field] {
        match kind {
            SectionKind::Header => &self.header,
            SectionKind::Body => &self.body,
            SectionKind::Footer => &self.footer,
        }
    }

    /// Mutable fields of one section
    pub fn section_mut(&mut self, kind: SectionKind) -> &mut Vec<Field> {
        match kind {
            SectionKind::Header => &mut self.header,
            SectionKind::Body => &mut self.body,
            SectionKind::Footer => &mut self.footer,
        }
    }

    /// Total field count across all three sections
    pub fn field_count(&self) -> usize {
        self.header.len() + self.body.len() + self.footer.len()
    }
}

/// The resolved, renderer-ready form of one field
///
/// An external document renderer consumes these in order, laying out
/// one `key: value` line per instruction with the given alignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderInstruction {
    /// Section the line belongs to
    pub section: SectionKind,

    /// Field label
    pub key: String,

    /// Resolved or default value, as display text
    pub value: String,

    /// Text alignment
    pub align: Align,
}
