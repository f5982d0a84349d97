/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Judicial decisions.
//!
//! Chilean rulings open with `Tribunal, date, rol R`; foreign and
//! international ones follow the court's own designation.

use super::{consulted, Context};
use crate::abbreviation::close_period;
use crate::render::Markup;
use crate::values::{date, number_label};
use rchd_core::{Field, SourceRecord};

const CONSTITUTIONAL_COURT: &str = "Tribunal Constitucional";
const SUPREME_COURT: &str = "Corte Suprema";
const JUDICIARY_DATABASE: &str = "https://juris.pjud.cl";

/// Normalized decision date, or the bare year.
fn decided(record: &SourceRecord) -> String {
    match record.get(Field::Date) {
        Some(value) => date(value),
        None => record.get(Field::Year).unwrap_or_default().to_string(),
    }
}

fn tribunal<'a>(record: &'a SourceRecord, default: &'a str) -> &'a str {
    record.get(Field::Tribunal).unwrap_or(default)
}

/// `Tribunal, date, <docket>[, procedure][ (case name)]`
fn ruling(court: &str, record: &SourceRecord, docket: &str) -> Markup {
    let mut markup = Markup::new();
    markup
        .plain(court)
        .plain(", ")
        .plain(&decided(record))
        .plain(", ")
        .plain(docket);
    if let Some(procedure) = record.get(Field::Procedure) {
        markup.plain(", ").plain(procedure);
    }
    if let Some(name) = record.get(Field::CaseName) {
        markup.plain(" (").plain(name).plain(")");
    }
    markup
}

fn rol(record: &SourceRecord) -> String {
    format!("rol {}", record.get(Field::Docket).unwrap_or_default())
}

fn source(markup: &mut Markup, record: &SourceRecord) {
    if let Some(source) = record.get(Field::Source) {
        markup.plain(". ").plain(source);
    }
}

pub fn render_constitutional_court(_ctx: &Context, record: &SourceRecord) -> Markup {
    let docket = format!(
        "rol {}",
        number_label(record.get(Field::Docket).unwrap_or_default())
    );
    let mut markup = ruling(tribunal(record, CONSTITUTIONAL_COURT), record, &docket);
    source(&mut markup, record);
    markup.terminate();
    markup
}

/// Supreme Court rulings point to the judiciary's public database.
pub fn render_supreme_court(_ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = ruling(tribunal(record, SUPREME_COURT), record, &rol(record));
    markup
        .plain(". Disponible en: ")
        .plain(record.get(Field::Url).unwrap_or(JUDICIARY_DATABASE));
    consulted(&mut markup, record);
    markup.terminate();
    markup
}

pub fn render_criminal_case(_ctx: &Context, record: &SourceRecord) -> Markup {
    let docket = format!(
        "RIT {}, RUC {}",
        record.get(Field::Rit).unwrap_or_default(),
        record.get(Field::Ruc).unwrap_or_default()
    );
    let mut markup = ruling(tribunal(record, ""), record, &docket);
    source(&mut markup, record);
    markup.terminate();
    markup
}

pub fn render_unreported_case(_ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = ruling(tribunal(record, ""), record, &rol(record));
    markup.plain(". Sentencia no publicada");
    if let Some(source) = record.get(Field::Source) {
        markup.plain(", ").plain(source);
    }
    markup.terminate();
    markup
}

pub fn render_database_case(_ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = ruling(tribunal(record, ""), record, &rol(record));
    if let Some(database) = record.get(Field::Database) {
        markup.plain(". ").plain(database);
    }
    if let Some(citation) = record.get(Field::OnlineCitation) {
        markup.plain(", cita online: ").plain(citation);
    }
    markup.terminate();
    markup
}

pub fn render_foreign_case(_ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = Markup::from(tribunal(record, ""));
    if let Some(country) = record.get(Field::Country) {
        markup.plain(" (").plain(country).plain(")");
    }
    markup.plain(", ").plain(&decided(record));
    if let Some(docket) = record.get(Field::Docket) {
        markup.plain(", ").plain(docket);
    }
    if let Some(name) = record.get(Field::CaseName) {
        markup.plain(", ").italic(name);
    }
    source(&mut markup, record);
    markup.terminate();
    markup
}

pub fn render_international_case(_ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = Markup::from(tribunal(record, ""));
    markup
        .plain(", ")
        .plain(&decided(record))
        .plain(", ")
        .italic(record.get(Field::CaseName).unwrap_or_default());
    if let Some(series) = record.get(Field::Series) {
        markup.plain(", ").plain(series);
    }
    if let Some(procedure) = record.get(Field::Procedure) {
        markup.plain(", ").plain(procedure);
    }
    markup.terminate();
    markup
}

/// `Tribunal, date[, pinpoint].` The pinpoint (a considerando, a
/// paragraph) is used as written.
fn abbreviate_ruling(court: &str, record: &SourceRecord) -> String {
    let mut out = format!("{}, {}", court, decided(record));
    if let Some(pinpoint) = record.get(Field::Pinpoint) {
        out.push_str(", ");
        out.push_str(pinpoint);
    }
    close_period(&mut out);
    out
}

pub fn abbreviate_case(_ctx: &Context, record: &SourceRecord) -> String {
    abbreviate_ruling(tribunal(record, ""), record)
}

pub fn abbreviate_constitutional_court(_ctx: &Context, record: &SourceRecord) -> String {
    abbreviate_ruling(tribunal(record, CONSTITUTIONAL_COURT), record)
}

pub fn abbreviate_supreme_court(_ctx: &Context, record: &SourceRecord) -> String {
    abbreviate_ruling(tribunal(record, SUPREME_COURT), record)
}
