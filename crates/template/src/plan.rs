//! Render-plan building

use serde_json::Value;

use crate::parser::{resolve_path, value_to_string, DEFAULT_DELIMITER};
use crate::schema::{RenderInstruction, SectionKind, Template};

/// Builds the ordered render instruction list for a template
///
/// Sections are walked in the fixed Header → Body → Footer order,
/// fields in their stored order, so the plan is deterministic for a
/// given template and data source. A field whose path does not resolve
/// falls back to its stored default; a resolved null counts as a miss.
pub struct PlanBuilder<'a> {
    /// The template to plan
    template: &'a Template,
    /// Path delimiter for field lookups
    delimiter: &'a str,
}

impl<'a> PlanBuilder<'a> {
    /// Create a builder for a template
    pub fn new(template: &'a Template) -> Self {
        Self {
            template,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Override the path delimiter
    pub fn with_delimiter(mut self, delimiter: &'a str) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Build the render plan against a data source
    pub fn build(&self, data: &Value) -> Vec<RenderInstruction> {
        let mut plan = Vec::with_capacity(self.template.field_count());

        for section in SectionKind::ALL {
            for field in self.template.section(section) {
                let value = resolve_path(data, &field.path, self.delimiter)
                    .filter(|v| !v.is_null())
                    .map(value_to_string)
                    .unwrap_or_else(|| field.default.clone());

                plan.push(RenderInstruction {
                    section,
                    key: field.key.clone(),
                    value,
                    align: field.align,
                });
            }
        }

        plan
    }
}
