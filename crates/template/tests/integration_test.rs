//! Integration tests for template parsing and render planning

use pretty_assertions::assert_eq;
use serde_json::json;
use template::{parse_template, Align, PlanBuilder, RenderInstruction, SectionKind};

#[test]
fn test_parse_stored_record_format() {
    // The record shape the file store persists (and older tool
    // versions wrote), arrow paths included
    let template_json = r#"{
        "name": "Salary Template",
        "type": "salary",
        "Header": [
            { "key": "Name", "map": "name", "default": "N/A", "align": "Left" },
            { "key": "Company", "map": "company → name", "default": "N/A", "align": "Center" }
        ],
        "Body": [
            { "key": "Salary", "map": "payDetail → total_salary_amount", "default": "0", "align": "Right" }
        ],
        "Footer": []
    }"#;

    let template = parse_template(template_json).unwrap();

    assert_eq!(template.name, "Salary Template");
    assert_eq!(template.field_count(), 3);
    assert_eq!(template.header[1].align, Align::Center);

    let data = json!({
        "name": "Amit Sharma",
        "company": { "name": "ABC Pvt Ltd" },
        "payDetail": { "total_salary_amount": "75,000 INR", "hra": "10,000 INR" }
    });

    let plan = PlanBuilder::new(&template).with_delimiter("→").build(&data);

    let values: Vec<&str> = plan.iter().map(|i| i.value.as_str()).collect();
    assert_eq!(values, ["Amit Sharma", "ABC Pvt Ltd", "75,000 INR"]);
}

#[test]
fn test_single_field_resolves_from_data_source() {
    let template_json = r#"{
        "name": "t",
        "Header": [
            { "key": "Name", "map": "user.name", "default": "N/A", "align": "Left" }
        ],
        "Body": [],
        "Footer": []
    }"#;

    let template = parse_template(template_json).unwrap();
    let data = json!({ "user": { "name": "Amit Sharma" } });

    let plan = PlanBuilder::new(&template).build(&data);

    assert_eq!(
        plan,
        vec![RenderInstruction {
            section: SectionKind::Header,
            key: "Name".to_string(),
            value: "Amit Sharma".to_string(),
            align: Align::Left,
        }]
    );
}

#[test]
fn test_single_field_falls_back_to_default() {
    let template_json = r#"{
        "name": "t",
        "Header": [
            { "key": "Name", "map": "user.name", "default": "N/A", "align": "Left" }
        ],
        "Body": [],
        "Footer": []
    }"#;

    let template = parse_template(template_json).unwrap();
    let plan = PlanBuilder::new(&template).build(&json!({}));

    assert_eq!(
        plan,
        vec![RenderInstruction {
            section: SectionKind::Header,
            key: "Name".to_string(),
            value: "N/A".to_string(),
            align: Align::Left,
        }]
    );
}

#[test]
fn test_bill_template_plan() {
    let template_json = r#"{
        "name": "Bill Template",
        "type": "bill",
        "Header": [
            { "key": "Store", "map": "store.name", "default": "Unknown Store", "align": "Center" },
            { "key": "Bill No", "map": "number", "default": "-", "align": "Left" }
        ],
        "Body": [
            { "key": "Items", "map": "amount.total_items", "default": "0 items", "align": "Left" },
            { "key": "Tax", "map": "amount.tax", "default": "₹0", "align": "Right" },
            { "key": "Total", "map": "amount.grand_total", "default": "₹0", "align": "Right" }
        ],
        "Footer": [
            { "key": "Payment", "map": "payment.method", "default": "Cash", "align": "Left" },
            { "key": "Note", "map": "thankyou", "default": "", "align": "Center" }
        ]
    }"#;

    let template = parse_template(template_json).unwrap();
    let data = json!({
        "store": { "name": "Fresh Mart – Indiranagar" },
        "number": "BILL-67329",
        "customer": { "name": "Rohit Kumar" },
        "amount": {
            "total_items": "3 items",
            "tax": "₹18",
            "grand_total": "₹418"
        },
        "payment": { "method": "UPI" }
    });

    let plan = PlanBuilder::new(&template).build(&data);

    assert_eq!(plan.len(), template.field_count());

    // Fixed section order, stored field order within each section
    let sections: Vec<SectionKind> = plan.iter().map(|i| i.section).collect();
    assert_eq!(
        sections,
        [
            SectionKind::Header,
            SectionKind::Header,
            SectionKind::Body,
            SectionKind::Body,
            SectionKind::Body,
            SectionKind::Footer,
            SectionKind::Footer,
        ]
    );

    assert_eq!(plan[0].value, "Fresh Mart – Indiranagar");
    assert_eq!(plan[4].value, "₹418");

    // "thankyou" is absent from this record, so the stored default wins
    assert_eq!(plan[6].value, "");
}
