/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Norms, parliamentary documents and international instruments.
//!
//! Every statute-like type renders through [`render_norm`]; the type only
//! decides which [`NormKind`] layout applies.

use super::{abbreviate_creator, heading, locators, online, Context, Requirement};
use crate::abbreviation::{abbreviate_named, close_period};
use crate::render::{versalitas, Markup};
use crate::values::{article_pinpoint, date, number_label, page_label};
use rchd_core::{Field, NormKind, SourceRecord};

const EUROPEAN_UNION: &str = "Unión Europea";
const OFFICIAL_LETTER: &str = "Oficio";
const BILL: &str = "Proyecto de ley";
const CONGRESS_LIBRARY: &str = "Biblioteca del Congreso Nacional";

/// Fields a norm of `kind` needs on top of the type's own requirements.
pub fn norm_requirements(kind: NormKind) -> &'static [Requirement] {
    use Field::*;
    use Requirement::Field as Has;
    match kind {
        NormKind::Constitution => &[],
        NormKind::Law | NormKind::Decree | NormKind::EuInstrument => &[Has(Number), Has(Date)],
        NormKind::Code => &[Has(Name)],
        NormKind::Treaty => &[Has(Name), Has(Date)],
        NormKind::Other => &[Has(NormType), Has(Date)],
    }
}

fn label(record: &SourceRecord, kind: NormKind) -> &str {
    record
        .get(Field::NormType)
        .unwrap_or_else(|| kind.default_label())
}

fn name(record: &SourceRecord, kind: NormKind) -> &str {
    record
        .get(Field::Name)
        .unwrap_or_else(|| kind.default_label())
}

/// Year shown in abbreviated citations of norms.
fn norm_year(record: &SourceRecord) -> Option<String> {
    record
        .get(Field::Year)
        .map(str::to_string)
        .or_else(|| record.get(Field::Date).and_then(rchd_date::year_of))
}

fn country(markup: &mut Markup, record: &SourceRecord) {
    if let Some(country) = record.get(Field::Country) {
        markup.small_caps(country).plain(", ");
    }
}

fn dated(markup: &mut Markup, record: &SourceRecord) {
    if let Some(value) = record.get(Field::Date) {
        markup.plain(" (").plain(&date(value)).plain(")");
    }
}

fn sentence(markup: &mut Markup, record: &SourceRecord, field: Field) {
    if let Some(value) = record.get(field) {
        markup.plain(". ").plain(value);
    }
}

fn italic_sentence(markup: &mut Markup, record: &SourceRecord, field: Field) {
    if let Some(value) = record.get(field) {
        markup.plain(". ").italic(value);
    }
}

/// `Label N° Number`
fn numbered(record: &SourceRecord, kind: NormKind) -> String {
    match record.get(Field::Number) {
        Some(number) => format!("{} {}", label(record, kind), number_label(number)),
        None => label(record, kind).to_string(),
    }
}

/// `Label Number`, for instruments whose number is not preceded by a sign.
fn bare_numbered(record: &SourceRecord, kind: NormKind) -> String {
    match record.get(Field::Number) {
        Some(number) => format!("{} {}", label(record, kind), number),
        None => label(record, kind).to_string(),
    }
}

/// Full reference of a norm laid out as `kind`.
pub fn render_norm(record: &SourceRecord, kind: NormKind) -> Markup {
    let mut markup = Markup::new();
    match kind {
        NormKind::Constitution | NormKind::Code => {
            country(&mut markup, record);
            markup.plain(name(record, kind));
            dated(&mut markup, record);
            sentence(&mut markup, record, Field::Source);
        }
        NormKind::Law => {
            country(&mut markup, record);
            markup.plain(&numbered(record, kind));
            dated(&mut markup, record);
            italic_sentence(&mut markup, record, Field::Name);
            sentence(&mut markup, record, Field::Source);
        }
        NormKind::Decree => {
            country(&mut markup, record);
            markup.plain(&numbered(record, kind));
            dated(&mut markup, record);
            if let Some(issuer) = record.get(Field::Issuer) {
                markup.plain(", ").plain(issuer);
            }
            italic_sentence(&mut markup, record, Field::Name);
        }
        NormKind::Treaty => {
            markup.small_caps(name(record, kind));
            dated(&mut markup, record);
            sentence(&mut markup, record, Field::Source);
        }
        NormKind::EuInstrument => {
            markup
                .small_caps(EUROPEAN_UNION)
                .plain(", ")
                .plain(&bare_numbered(record, kind));
            dated(&mut markup, record);
            italic_sentence(&mut markup, record, Field::Name);
            sentence(&mut markup, record, Field::Source);
        }
        NormKind::Other => {
            country(&mut markup, record);
            markup.plain(&bare_numbered(record, kind));
            dated(&mut markup, record);
            italic_sentence(&mut markup, record, Field::Name);
        }
    }
    markup.terminate();
    markup
}

/// Footnote citation of a norm: its designation, the year, and the article.
pub fn abbreviate_norm(record: &SourceRecord, kind: NormKind) -> String {
    let (designation, with_year) = match kind {
        NormKind::Constitution | NormKind::Treaty => (name(record, kind).to_string(), true),
        NormKind::Code => (name(record, kind).to_string(), false),
        NormKind::Law | NormKind::Decree => (numbered(record, kind), true),
        NormKind::EuInstrument => (bare_numbered(record, kind), false),
        NormKind::Other => (bare_numbered(record, kind), true),
    };

    let mut out = designation;
    if with_year {
        if let Some(year) = norm_year(record) {
            out.push_str(&format!(" ({})", year));
        }
    }
    if let Some(pinpoint) = record.get(Field::Pinpoint) {
        out.push_str(", ");
        out.push_str(&article_pinpoint(pinpoint));
    }
    close_period(&mut out);
    out
}

/// Generic statute: the caller chose the layout. Records rendered without
/// validation and without a kind fall back to [`NormKind::Other`].
pub fn render_statute(_ctx: &Context, record: &SourceRecord) -> Markup {
    render_norm(record, record.norm_kind.unwrap_or(NormKind::Other))
}

pub fn abbreviate_statute(_ctx: &Context, record: &SourceRecord) -> String {
    abbreviate_norm(record, record.norm_kind.unwrap_or(NormKind::Other))
}

macro_rules! fixed_norm {
    ($render:ident, $abbreviate:ident, $kind:expr) => {
        pub fn $render(_ctx: &Context, record: &SourceRecord) -> Markup {
            render_norm(record, $kind)
        }

        pub fn $abbreviate(_ctx: &Context, record: &SourceRecord) -> String {
            abbreviate_norm(record, $kind)
        }
    };
}

fixed_norm!(render_constitution, abbreviate_constitution, NormKind::Constitution);
fixed_norm!(render_code, abbreviate_code, NormKind::Code);
fixed_norm!(render_decree, abbreviate_decree, NormKind::Decree);
fixed_norm!(render_treaty, abbreviate_treaty, NormKind::Treaty);
fixed_norm!(render_eu_instrument, abbreviate_eu_instrument, NormKind::EuInstrument);

fn official_letter_designation(record: &SourceRecord) -> String {
    let label = record.get(Field::Label).unwrap_or(OFFICIAL_LETTER);
    match record.get(Field::Number) {
        Some(number) => format!("{} {}", label, number_label(number)),
        None => label.to_string(),
    }
}

pub fn render_official_letter(_ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = Markup::new();
    if let Some(issuer) = record.get(Field::Issuer) {
        markup.small_caps(issuer).plain(", ");
    }
    markup.plain(&official_letter_designation(record));
    dated(&mut markup, record);
    italic_sentence(&mut markup, record, Field::Subject);
    markup.terminate();
    markup
}

/// `Oficio N° 123 (2020), p. 4.`
pub fn abbreviate_official_letter(_ctx: &Context, record: &SourceRecord) -> String {
    let mut out = official_letter_designation(record);
    if let Some(year) = norm_year(record) {
        out.push_str(&format!(" ({})", year));
    }
    if let Some(pages) = record.get(Field::Pinpoint) {
        out.push_str(", ");
        out.push_str(&page_label(pages));
    }
    close_period(&mut out);
    out
}

fn bulletin(record: &SourceRecord) -> String {
    format!(
        "Boletín {}",
        number_label(record.get(Field::Bulletin).unwrap_or_default())
    )
}

pub fn render_bill(_ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = Markup::from(BILL);
    if let Some(title) = record.get(Field::Title) {
        markup.plain(", ").italic(title);
    }
    markup.plain(", ").plain(&bulletin(record));
    dated(&mut markup, record);
    sentence(&mut markup, record, Field::Stage);
    markup.terminate();
    markup
}

pub fn abbreviate_bill(_ctx: &Context, record: &SourceRecord) -> String {
    let mut out = format!("{}, {}", BILL, bulletin(record));
    if let Some(year) = norm_year(record) {
        out.push_str(&format!(" ({})", year));
    }
    if let Some(pages) = record.get(Field::Pinpoint) {
        out.push_str(", ");
        out.push_str(&page_label(pages));
    }
    close_period(&mut out);
    out
}

fn compiler(record: &SourceRecord) -> &str {
    record.get(Field::Entity).unwrap_or(CONGRESS_LIBRARY)
}

/// The history of a law as compiled by the Congress library.
pub fn render_legislative_history(_ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = Markup::new();
    markup
        .small_caps(compiler(record))
        .plain(" (")
        .plain(record.get(Field::Year).unwrap_or_default())
        .plain("): ");
    match record.get(Field::LawNumber) {
        Some(law) => markup.italic(&format!("Historia de la Ley {}", number_label(law))),
        None => markup.italic(record.get(Field::Title).unwrap_or_default()),
    };
    online(&mut markup, record);
    markup.terminate();
    markup
}

pub fn abbreviate_legislative_history(_ctx: &Context, record: &SourceRecord) -> String {
    abbreviate_named(&versalitas(compiler(record)), &locators(record))
}

pub fn render_international_instrument(_ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = Markup::new();
    markup.small_caps(record.get(Field::Name).unwrap_or_default());
    dated(&mut markup, record);
    if let Some(conference) = record.get(Field::Conference) {
        markup.plain(", adoptada en ").plain(conference);
    }
    if let Some(city) = record.get(Field::City) {
        markup.plain(", ").plain(city);
    }
    sentence(&mut markup, record, Field::Source);
    markup.terminate();
    markup
}

pub fn abbreviate_international_instrument(_ctx: &Context, record: &SourceRecord) -> String {
    abbreviate_norm(record, NormKind::Treaty)
}

/// United Nations documents are headed by the issuing organ.
pub fn render_un_document(ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = match record.get(Field::Organ) {
        Some(organ) => {
            let mut by_organ = Markup::new();
            by_organ.small_caps(organ).plain(" (");
            by_organ
                .plain(record.get(Field::Year).unwrap_or_default())
                .plain("): ");
            by_organ
        }
        None => heading(ctx, record, None),
    };
    markup
        .italic(record.get(Field::Title).unwrap_or_default())
        .plain(", Doc. ")
        .plain(record.get(Field::Symbol).unwrap_or_default());
    dated(&mut markup, record);
    online(&mut markup, record);
    markup.terminate();
    markup
}

pub fn abbreviate_un_document(ctx: &Context, record: &SourceRecord) -> String {
    match record.get(Field::Organ) {
        Some(organ) => abbreviate_named(&versalitas(organ), &locators(record)),
        None => abbreviate_creator(ctx, record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Span;

    fn consumer_law() -> SourceRecord {
        SourceRecord::new()
            .with_norm_kind(NormKind::Law)
            .with(Field::Country, "Chile")
            .with(Field::Number, "19.496")
            .with(Field::Date, "7 de marzo de 1997")
            .with(Field::Name, "Establece normas sobre protección de los derechos de los consumidores")
    }

    #[test]
    fn test_law() {
        let ctx = Context::default();
        let record = consumer_law().with(Field::Pinpoint, "3");
        let markup = render_statute(&ctx, &record);
        assert_eq!(
            markup.to_plain(),
            "CHILE, Ley N° 19.496 (07/03/1997). Establece normas sobre protección de los derechos de los consumidores."
        );
        assert_eq!(markup.spans()[0], Span::SmallCaps("CHILE".to_string()));
        assert_eq!(abbreviate_statute(&ctx, &record), "Ley N° 19.496 (1997), art. 3.");
    }

    #[test]
    fn test_pinpoint_ending_in_period_closes_once() {
        let record = consumer_law().with(Field::Pinpoint, "art. 3 inc. 2.");
        assert_eq!(
            abbreviate_statute(&Context::default(), &record),
            "Ley N° 19.496 (1997), art. 3 inc. 2."
        );
    }

    #[test]
    fn test_constitution_defaults() {
        let ctx = Context::default();
        let record = SourceRecord::new()
            .with(Field::Country, "Chile")
            .with(Field::Date, "1980")
            .with(Field::Pinpoint, "art. 19 N° 24");
        assert_eq!(
            render_constitution(&ctx, &record).to_plain(),
            "CHILE, Constitución Política de la República (1980)."
        );
        assert_eq!(
            abbreviate_constitution(&ctx, &record),
            "Constitución Política de la República (1980), art. 19 N° 24."
        );
    }

    #[test]
    fn test_code_has_no_year_in_abbreviation() {
        let ctx = Context::default();
        let record = SourceRecord::new()
            .with(Field::Name, "Código Civil")
            .with(Field::Date, "14/12/1855")
            .with(Field::Pinpoint, "1545");
        assert_eq!(render_code(&ctx, &record).to_plain(), "Código Civil (14/12/1855).");
        assert_eq!(abbreviate_code(&ctx, &record), "Código Civil, art. 1545.");
    }

    #[test]
    fn test_decree_with_issuer_and_custom_label() {
        let record = SourceRecord::new()
            .with(Field::Country, "Chile")
            .with(Field::NormType, "Decreto con Fuerza de Ley")
            .with(Field::Number, "1")
            .with(Field::Date, "2000-05-30")
            .with(Field::Issuer, "Ministerio de Justicia");
        assert_eq!(
            render_decree(&Context::default(), &record).to_plain(),
            "CHILE, Decreto con Fuerza de Ley N° 1 (30/05/2000), Ministerio de Justicia."
        );
    }

    #[test]
    fn test_treaty() {
        let record = SourceRecord::new()
            .with(Field::Name, "Convención Americana sobre Derechos Humanos")
            .with(Field::Date, "22/11/1969");
        assert_eq!(
            render_treaty(&Context::default(), &record).to_plain(),
            "CONVENCIÓN AMERICANA SOBRE DERECHOS HUMANOS (22/11/1969)."
        );
        assert_eq!(
            abbreviate_treaty(&Context::default(), &record),
            "Convención Americana sobre Derechos Humanos (1969)."
        );
    }

    #[test]
    fn test_eu_instrument() {
        let record = SourceRecord::new()
            .with(Field::Number, "2016/679")
            .with(Field::Date, "27/04/2016")
            .with(Field::Name, "Reglamento general de protección de datos")
            .with(Field::Pinpoint, "17");
        let ctx = Context::default();
        assert_eq!(
            render_eu_instrument(&ctx, &record).to_plain(),
            "UNIÓN EUROPEA, Reglamento 2016/679 (27/04/2016). Reglamento general de protección de datos."
        );
        assert_eq!(abbreviate_eu_instrument(&ctx, &record), "Reglamento 2016/679, art. 17.");
    }

    #[test]
    fn test_statute_without_kind_uses_generic_layout() {
        let record = SourceRecord::new()
            .with(Field::NormType, "Auto Acordado")
            .with(Field::Date, "27/06/1992");
        assert_eq!(
            render_statute(&Context::default(), &record).to_plain(),
            "Auto Acordado (27/06/1992)."
        );
        assert_eq!(
            abbreviate_statute(&Context::default(), &record),
            "Auto Acordado (1992)."
        );
    }

    #[test]
    fn test_official_letter() {
        let record = SourceRecord::new()
            .with(Field::Issuer, "Servicio de Impuestos Internos")
            .with(Field::Number, "1.234")
            .with(Field::Date, "2020-01-15")
            .with(Field::Subject, "Tributación de criptoactivos");
        let ctx = Context::default();
        assert_eq!(
            render_official_letter(&ctx, &record).to_plain(),
            "SERVICIO DE IMPUESTOS INTERNOS, Oficio N° 1.234 (15/01/2020). Tributación de criptoactivos."
        );
        assert_eq!(abbreviate_official_letter(&ctx, &record), "Oficio N° 1.234 (2020).");
    }

    #[test]
    fn test_bill() {
        let record = SourceRecord::new()
            .with(Field::Title, "Sobre delitos económicos")
            .with(Field::Bulletin, "13.204-07")
            .with(Field::Date, "20/01/2020")
            .with(Field::Stage, "Primer trámite constitucional");
        assert_eq!(
            render_bill(&Context::default(), &record).to_plain(),
            "Proyecto de ley, Sobre delitos económicos, Boletín N° 13.204-07 (20/01/2020). Primer trámite constitucional."
        );
        assert_eq!(
            abbreviate_bill(&Context::default(), &record),
            "Proyecto de ley, Boletín N° 13.204-07 (2020)."
        );
    }

    #[test]
    fn test_legislative_history_default_compiler() {
        let record = SourceRecord::new()
            .with(Field::Year, "2017")
            .with(Field::LawNumber, "21.030")
            .with(Field::Url, "https://www.bcn.cl/historiadelaley")
            .with(Field::Pinpoint, "45");
        let ctx = Context::default();
        assert_eq!(
            render_legislative_history(&ctx, &record).to_plain(),
            "BIBLIOTECA DEL CONGRESO NACIONAL (2017): Historia de la Ley N° 21.030. Disponible en: https://www.bcn.cl/historiadelaley."
        );
        assert_eq!(
            abbreviate_legislative_history(&ctx, &record),
            "BIBLIOTECA DEL CONGRESO NACIONAL (2017), p. 45."
        );
    }

    #[test]
    fn test_international_instrument() {
        let record = SourceRecord::new()
            .with(Field::Name, "Declaración Universal de Derechos Humanos")
            .with(Field::Date, "10/12/1948")
            .with(Field::Conference, "la Asamblea General de las Naciones Unidas")
            .with(Field::City, "París");
        assert_eq!(
            render_international_instrument(&Context::default(), &record).to_plain(),
            "DECLARACIÓN UNIVERSAL DE DERECHOS HUMANOS (10/12/1948), adoptada en la Asamblea General de las Naciones Unidas, París."
        );
    }

    #[test]
    fn test_un_document() {
        let record = SourceRecord::new()
            .with(Field::Organ, "Comité de Derechos Humanos")
            .with(Field::Year, "2011")
            .with(Field::Title, "Observación general N° 34")
            .with(Field::Symbol, "CCPR/C/GC/34");
        let ctx = Context::default();
        assert_eq!(
            render_un_document(&ctx, &record).to_plain(),
            "COMITÉ DE DERECHOS HUMANOS (2011): Observación general N° 34, Doc. CCPR/C/GC/34."
        );
        assert_eq!(abbreviate_un_document(&ctx, &record), "COMITÉ DE DERECHOS HUMANOS (2011).");
    }

    #[test]
    fn test_norm_requirements() {
        assert!(norm_requirements(NormKind::Constitution).is_empty());
        assert_eq!(
            norm_requirements(NormKind::Other),
            &[
                Requirement::Field(Field::NormType),
                Requirement::Field(Field::Date)
            ]
        );
    }
}
