//! End-to-end demo: define a template, persist it, build a render plan
//!
//! Usage:
//!   cargo run --example generate -- [templates.json]
//!
//! Prints the instructions an external document renderer would lay
//! out, one `key: value` line per field.

use anyhow::Result;
use serde_json::json;
use template::{FieldDraft, PlanBuilder, SectionKind, TemplateDraft, TemplateKind};
use template_store::{FileStore, TemplateStore};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let store_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "templates.json".to_string());
    let mut store = FileStore::open(&store_path)?;

    let mut draft = TemplateDraft::new("Salary Template");
    draft.set_kind(TemplateKind::Salary);
    draft.push_field(
        SectionKind::Header,
        FieldDraft {
            key: "Name".to_string(),
            path: "name".to_string(),
            default: "N/A".to_string(),
            align: "Left".to_string(),
        },
    );
    draft.push_field(
        SectionKind::Header,
        FieldDraft {
            key: "Company".to_string(),
            path: "company.name".to_string(),
            default: "N/A".to_string(),
            align: "Center".to_string(),
        },
    );
    draft.push_field(
        SectionKind::Body,
        FieldDraft {
            key: "Salary".to_string(),
            path: "payDetail.total_salary_amount".to_string(),
            default: "0".to_string(),
            align: "Right".to_string(),
        },
    );
    draft.push_field(
        SectionKind::Body,
        FieldDraft {
            key: "HRA".to_string(),
            path: "payDetail.hra".to_string(),
            default: "0".to_string(),
            align: "Right".to_string(),
        },
    );
    draft.push_field(
        SectionKind::Footer,
        FieldDraft {
            key: "Generated by".to_string(),
            path: "issuer".to_string(),
            default: "Payroll Desk".to_string(),
            align: "Center".to_string(),
        },
    );

    let template = draft.finalize()?;
    store.save(&template.name, &template)?;

    let loaded = store.load("Salary Template")?;

    let employee = json!({
        "name": "Amit Sharma",
        "company": { "name": "ABC Pvt Ltd" },
        "payDetail": {
            "total_salary_amount": "75,000 INR",
            "hra": "10,000 INR"
        }
    });

    let plan = PlanBuilder::new(&loaded).build(&employee);

    let mut current_section = None;
    for instruction in &plan {
        if current_section != Some(instruction.section) {
            println!("--- {} ---", instruction.section);
            current_section = Some(instruction.section);
        }
        println!(
            "{}: {}  [{}]",
            instruction.key, instruction.value, instruction.align
        );
    }

    Ok(())
}
