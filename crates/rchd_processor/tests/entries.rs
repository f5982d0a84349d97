/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use rchd_core::{Field, SourceType};
use rchd_processor::io::load_entries;
use rchd_processor::Processor;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_fixture_loads_and_renders() {
    let entries = load_entries(&fixture("records.yaml")).unwrap();
    assert_eq!(entries.len(), 8);

    let processor = Processor::default();
    for entry in &entries {
        let citation = processor
            .render_entry(entry, true)
            .unwrap_or_else(|e| panic!("{:?}: {e}", entry.id));
        assert!(citation.full_reference_plain.ends_with('.'));
    }
}

#[test]
fn test_numeric_yaml_values_become_strings() {
    let entries = load_entries(&fixture("records.yaml")).unwrap();
    let article = entries
        .iter()
        .find(|e| e.source_type == SourceType::Article)
        .unwrap();
    assert_eq!(article.record.get(Field::Volume), Some("36"));
    assert_eq!(article.record.get(Field::Year), Some("2009"));
}

#[test]
fn test_unquoted_dotted_law_number_is_rejected() {
    let err = load_entries(&fixture("unquoted_numbers.yaml")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("YAML"), "{message}");
    assert!(message.contains("quoted strings"), "{message}");
}

#[test]
fn test_fixture_book_matches_style_guide() {
    let entries = load_entries(&fixture("records.yaml")).unwrap();
    let citation = Processor::default().render_entry(&entries[0], true).unwrap();
    assert_eq!(
        citation.full_reference_plain,
        "GUZMÁN BRITO, Alejandro (2005): De las donaciones entre vivos (Santiago, Editorial LexisNexis, segunda edición)."
    );
    assert_eq!(citation.abbreviated, "GUZMÁN (2005).");
}

#[test]
fn test_rendered_citation_serializes_spans() {
    let entries = load_entries(&fixture("records.yaml")).unwrap();
    let citation = Processor::default().render_entry(&entries[0], true).unwrap();
    let json = serde_json::to_value(&citation).unwrap();
    assert_eq!(json["abbreviated"], "GUZMÁN (2005).");
    assert_eq!(json["full-reference"][0]["style"], "small-caps");
    assert_eq!(json["full-reference"][0]["text"], "GUZMÁN BRITO");
}
