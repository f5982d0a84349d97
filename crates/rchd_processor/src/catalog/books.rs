/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Monographs and other book-like works.

use super::{heading, locators, online, owned, pages_clause, parenthetical, Context};
use crate::abbreviation::{abbreviate_named, close_period, year_with_suffix, Locators};
use crate::render::Markup;
use crate::values::{edition_ordinal, format_editors, short_names, tome_label};
use rchd_core::{Field, SourceRecord};

const THESIS_LABEL: &str = "Memoria para optar al grado de";

fn tome(markup: &mut Markup, record: &SourceRecord) {
    if let Some(tome) = record.get(Field::Tome) {
        markup.plain(", ").plain(&tome_label(tome));
    }
}

fn edition(record: &SourceRecord) -> Option<String> {
    record.get(Field::Edition).map(edition_ordinal)
}

/// `(City, Publisher[, edition])`
fn imprint(markup: &mut Markup, record: &SourceRecord) {
    parenthetical(
        markup,
        [
            owned(record.get(Field::City)),
            owned(record.get(Field::Publisher)),
            edition(record),
        ],
    );
}

pub fn render_book(ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = heading(ctx, record, None);
    markup.italic(record.get(Field::Title).unwrap_or_default());
    tome(&mut markup, record);
    imprint(&mut markup, record);
    markup.terminate();
    markup
}

/// The year clause reads `[1867] 2010` when the original year is known.
pub fn render_translated_book(ctx: &Context, record: &SourceRecord) -> Markup {
    let year = year_with_suffix(
        record.get(Field::Year).unwrap_or_default(),
        record.get(Field::YearSuffix),
    );
    let shown = match record.get(Field::OriginalYear) {
        Some(original) => format!("[{}] {}", original, year),
        None => year,
    };

    let mut markup = heading(ctx, record, Some(shown));
    markup.italic(record.get(Field::Title).unwrap_or_default());
    tome(&mut markup, record);
    parenthetical(
        &mut markup,
        [
            record.get(Field::Translator).map(|t| format!("trad. {}", t)),
            owned(record.get(Field::City)),
            owned(record.get(Field::Publisher)),
            edition(record),
        ],
    );
    markup.terminate();
    markup
}

pub fn render_chapter(ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = heading(ctx, record, None);
    markup
        .quoted(record.get(Field::Title).unwrap_or_default())
        .plain(", en ");

    let editors = format_editors(&record.editors, ctx.threshold);
    if !editors.is_empty() {
        markup.append(editors).plain(", ");
    }
    markup.italic(record.get(Field::BookTitle).unwrap_or_default());
    tome(&mut markup, record);
    parenthetical(
        &mut markup,
        [
            owned(record.get(Field::City)),
            owned(record.get(Field::Publisher)),
        ],
    );
    pages_clause(&mut markup, record.get(Field::Pages), " ");
    markup.terminate();
    markup
}

pub fn render_ebook(ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = heading(ctx, record, None);
    markup.italic(record.get(Field::Title).unwrap_or_default());
    imprint(&mut markup, record);
    if let Some(format) = record.get(Field::Format) {
        markup.plain(". Edición ").plain(format);
    }
    if let Some(url) = record.get(Field::Url) {
        markup.plain(". Disponible en: ").plain(url);
    }
    markup.terminate();
    markup
}

/// E-readers have no stable pages, so the pinpoint is a location used as written.
pub fn abbreviate_ebook(ctx: &Context, record: &SourceRecord) -> String {
    let names = short_names(&record.authors, ctx.threshold);
    if names.is_empty() {
        return String::new();
    }
    let mut out = abbreviate_named(
        &names,
        &Locators {
            pages: None,
            ..locators(record)
        },
    );
    if let Some(location) = record.get(Field::Pinpoint) {
        out.pop();
        out.push_str(", ");
        out.push_str(location);
        close_period(&mut out);
    }
    out
}

/// Works in non-Latin scripts are cited by their transliterated title.
pub fn render_non_latin_work(ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = heading(ctx, record, None);
    markup.italic(record.get(Field::Title).unwrap_or_default());
    if let Some(original) = record.get(Field::OriginalTitle) {
        markup.plain(" (").plain(original).plain(")");
    }
    if let Some(translated) = record.get(Field::TranslatedTitle) {
        markup.plain(" [").plain(translated).plain("]");
    }
    parenthetical(
        &mut markup,
        [
            owned(record.get(Field::City)),
            owned(record.get(Field::Publisher)),
        ],
    );
    if let Some(language) = record.get(Field::Language) {
        markup.plain(". En ").plain(language);
    }
    markup.terminate();
    markup
}

pub fn render_thesis(ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = heading(ctx, record, None);
    markup
        .italic(record.get(Field::Title).unwrap_or_default())
        .plain(". ")
        .plain(record.get(Field::Label).unwrap_or(THESIS_LABEL))
        .plain(" ")
        .plain(record.get(Field::Degree).unwrap_or_default());
    if let Some(institution) = record.get(Field::Institution) {
        markup.plain(", ").plain(institution);
    }
    markup.terminate();
    markup
}

/// Reports are often signed by an institution rather than people.
pub fn render_report(ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = heading(ctx, record, None);
    markup.italic(record.get(Field::Title).unwrap_or_default());
    if let Some(series) = record.get(Field::Series) {
        markup.plain(", ").plain(series);
    }
    parenthetical(
        &mut markup,
        [
            owned(record.get(Field::City)),
            owned(record.get(Field::Publisher)),
        ],
    );
    online(&mut markup, record);
    markup.terminate();
    markup
}
