/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use rchd_core::{Author, AuthorThreshold, Config, Field, NormKind, SourceRecord, SourceType};
use rchd_processor::{Processor, RenderedCitation};

// --- Helper Functions for Test Data Construction ---

/// Create a book record with one author.
pub fn make_book(family1: &str, family2: &str, given: &str, year: &str, title: &str) -> SourceRecord {
    SourceRecord::new()
        .with_author(Author::with_second_family(family1, family2, given))
        .with(Field::Year, year)
        .with(Field::Title, title)
        .with(Field::City, "Santiago")
        .with(Field::Publisher, "Editorial Jurídica de Chile")
}

/// Create a record whose author list holds `authors` as (family, given) pairs.
pub fn with_authors(mut record: SourceRecord, authors: &[(&str, &str)]) -> SourceRecord {
    record.authors = authors
        .iter()
        .map(|(family, given)| Author::new(family, given))
        .collect();
    record
}

/// Create a journal article record.
pub fn make_article(family: &str, given: &str, year: &str, title: &str, journal: &str) -> SourceRecord {
    SourceRecord::new()
        .with_author(Author::new(family, given))
        .with(Field::Year, year)
        .with(Field::Title, title)
        .with(Field::Journal, journal)
}

/// Create a Chilean law record.
pub fn make_law(number: &str, date: &str) -> SourceRecord {
    SourceRecord::new()
        .with_norm_kind(NormKind::Law)
        .with(Field::Country, "Chile")
        .with(Field::Number, number)
        .with(Field::Date, date)
}

/// Create a ruling record with the fields every Chilean court needs.
pub fn make_ruling(tribunal: &str, date: &str, docket: &str) -> SourceRecord {
    SourceRecord::new()
        .with(Field::Tribunal, tribunal)
        .with(Field::Date, date)
        .with(Field::Docket, docket)
}

pub fn processor_with_threshold(threshold: AuthorThreshold) -> Processor {
    Processor::new(Config {
        author_threshold: threshold,
    })
}

/// Render with the default configuration, panicking on validation errors.
pub fn render(source_type: SourceType, record: &SourceRecord) -> RenderedCitation {
    Processor::default()
        .render(source_type, record)
        .unwrap_or_else(|e| panic!("{source_type} failed to render: {e}"))
}

/// Plain full reference with the default configuration.
pub fn full(source_type: SourceType, record: &SourceRecord) -> String {
    render(source_type, record).full_reference_plain
}
