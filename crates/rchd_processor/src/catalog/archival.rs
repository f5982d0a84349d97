/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Unpublished and historical sources.

use super::{heading_optional_year, Context};
use crate::abbreviation::{close_period, year_with_suffix};
use crate::render::Markup;
use crate::values::{format_authors, short_names};
use rchd_core::{Field, SourceRecord};

pub fn render_manuscript(ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = heading_optional_year(ctx, record);
    markup.quoted(record.get(Field::Title).unwrap_or_default());
    if let Some(date) = record.get(Field::Date) {
        markup.plain(", ").plain(&crate::values::date(date));
    }
    markup
        .plain(". ")
        .plain(record.get(Field::Archive).unwrap_or_default());
    if let Some(collection) = record.get(Field::Collection) {
        markup.plain(", ").plain(collection);
    }
    if let Some(volume) = record.get(Field::Volume) {
        markup.plain(", vol. ").plain(volume);
    }
    if let Some(folios) = record.get(Field::Folios) {
        markup.plain(", fs. ").plain(folios);
    }
    markup.terminate();
    markup
}

/// Classical and medieval authors are set entirely in small caps.
pub fn render_historical_source(ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = Markup::new();
    markup.small_caps(&format_authors(&record.authors, ctx.threshold).to_plain());
    if let Some(year) = record.get(Field::Year) {
        markup
            .plain(" (")
            .plain(&year_with_suffix(year, record.get(Field::YearSuffix)))
            .plain(")");
    }
    markup
        .plain(": ")
        .italic(record.get(Field::Work).unwrap_or_default());
    if let Some(locus) = record.get(Field::Locus) {
        markup.plain(", ").plain(locus);
    }
    if let Some(note) = record.get(Field::EditionNote) {
        markup.plain(" (").plain(note).plain(")");
    }
    markup.terminate();
    markup
}

/// `AUTHOR, Work[, locus].` The cited passage wins over the record's locus.
pub fn abbreviate_historical_source(ctx: &Context, record: &SourceRecord) -> String {
    let names = short_names(&record.authors, ctx.threshold);
    if names.is_empty() {
        return String::new();
    }
    let mut out = names;
    if let Some(work) = record.get(Field::Work) {
        out.push_str(", ");
        out.push_str(work);
    }
    if let Some(locus) = record.get(Field::Pinpoint).or(record.get(Field::Locus)) {
        out.push_str(", ");
        out.push_str(locus);
    }
    close_period(&mut out);
    out
}
