/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The dispatch table: one descriptor per source type, pairing the full
//! reference renderer with its abbreviator and the fields it needs.

pub mod archival;
pub mod books;
pub mod case_law;
pub mod legislation;
pub mod periodicals;

use crate::abbreviation::{abbreviate, abbreviate_named, year_with_suffix, CitationKind, Locators};
use crate::render::{versalitas, Markup};
use crate::values::{format_authors, page_label};
use rchd_core::{AuthorThreshold, Field, NormKind, SourceRecord, SourceType};

/// Settings a renderer reads. Renderers are otherwise pure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    pub threshold: AuthorThreshold,
}

pub type RenderFn = fn(&Context, &SourceRecord) -> Markup;
pub type AbbreviateFn = fn(&Context, &SourceRecord) -> String;

/// A condition a record must meet before it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Field(Field),
    /// At least one of the fields.
    OneOf(&'static [Field]),
    Authors,
    /// Valid authors, or an `entity` standing in for them.
    AuthorsOrEntity,
    NormKind,
}

impl Requirement {
    pub fn is_met(&self, record: &SourceRecord) -> bool {
        match self {
            Requirement::Field(field) => record.has(*field),
            Requirement::OneOf(fields) => fields.iter().any(|f| record.has(*f)),
            Requirement::Authors => record.has_valid_authors(),
            Requirement::AuthorsOrEntity => {
                record.has_valid_authors() || record.has(Field::Entity)
            }
            Requirement::NormKind => record.norm_kind.is_some(),
        }
    }

    /// Name reported when the requirement is not met.
    pub fn name(&self) -> String {
        match self {
            Requirement::Field(field) => field.as_str().to_string(),
            Requirement::OneOf(fields) => fields
                .iter()
                .map(|f| f.as_str())
                .collect::<Vec<_>>()
                .join(" or "),
            Requirement::Authors => "authors".to_string(),
            Requirement::AuthorsOrEntity => "authors or entity".to_string(),
            Requirement::NormKind => "norm-kind".to_string(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct SourceTypeDescriptor {
    pub source_type: SourceType,
    pub required: &'static [Requirement],
    /// Norm layout fixed by the type itself (constitution, code...).
    pub norm_kind: Option<NormKind>,
    pub render: RenderFn,
    pub abbreviate: AbbreviateFn,
}

impl std::fmt::Debug for SourceTypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceTypeDescriptor")
            .field("source_type", &self.source_type)
            .field("required", &self.required)
            .field("norm_kind", &self.norm_kind)
            .finish_non_exhaustive()
    }
}

use Requirement::{Authors, AuthorsOrEntity, Field as Has, OneOf};

const DATE_OR_YEAR: Requirement = OneOf(&[Field::Date, Field::Year]);

fn entry(
    source_type: SourceType,
    required: &'static [Requirement],
    render: RenderFn,
    abbreviate: AbbreviateFn,
) -> SourceTypeDescriptor {
    SourceTypeDescriptor {
        source_type,
        required,
        norm_kind: None,
        render,
        abbreviate,
    }
}

fn norm_entry(
    source_type: SourceType,
    kind: Option<NormKind>,
    render: RenderFn,
    abbreviate: AbbreviateFn,
) -> SourceTypeDescriptor {
    let required: &'static [Requirement] = if kind.is_some() {
        &[]
    } else {
        &[Requirement::NormKind]
    };
    SourceTypeDescriptor {
        source_type,
        required,
        norm_kind: kind,
        render,
        abbreviate,
    }
}

/// Look up the descriptor of a source type.
pub fn descriptor(source_type: SourceType) -> SourceTypeDescriptor {
    use books::*;
    use case_law::*;
    use legislation::*;
    use periodicals::*;
    use archival::*;
    use Field::*;
    use SourceType as T;

    match source_type {
        T::Book => entry(
            source_type,
            &[Authors, Has(Year), Has(Title), Has(City), Has(Publisher)],
            render_book,
            abbreviate_doctrine,
        ),
        T::TranslatedBook => entry(
            source_type,
            &[Authors, Has(Year), Has(Title), Has(Translator), Has(City), Has(Publisher)],
            render_translated_book,
            abbreviate_doctrine,
        ),
        T::Chapter => entry(
            source_type,
            &[Authors, Has(Year), Has(Title), Has(BookTitle), Has(City), Has(Publisher)],
            render_chapter,
            abbreviate_doctrine,
        ),
        T::Article => entry(
            source_type,
            &[Authors, Has(Year), Has(Title), Has(Journal)],
            render_article,
            abbreviate_doctrine,
        ),
        T::Statute => norm_entry(source_type, None, render_statute, abbreviate_statute),
        T::Constitution => norm_entry(
            source_type,
            Some(NormKind::Constitution),
            render_constitution,
            abbreviate_constitution,
        ),
        T::Code => norm_entry(source_type, Some(NormKind::Code), render_code, abbreviate_code),
        T::Decree => norm_entry(source_type, Some(NormKind::Decree), render_decree, abbreviate_decree),
        T::Treaty => norm_entry(source_type, Some(NormKind::Treaty), render_treaty, abbreviate_treaty),
        T::EuInstrument => norm_entry(
            source_type,
            Some(NormKind::EuInstrument),
            render_eu_instrument,
            abbreviate_eu_instrument,
        ),
        T::OfficialLetter => entry(
            source_type,
            &[Has(Issuer), Has(Number), Has(Date)],
            render_official_letter,
            abbreviate_official_letter,
        ),
        T::Bill => entry(
            source_type,
            &[Has(Bulletin), Has(Date)],
            render_bill,
            abbreviate_bill,
        ),
        T::LegislativeHistory => entry(
            source_type,
            &[Has(Year), OneOf(&[LawNumber, Title])],
            render_legislative_history,
            abbreviate_legislative_history,
        ),
        T::InternationalInstrument => entry(
            source_type,
            &[Has(Name), Has(Date), Has(Conference)],
            render_international_instrument,
            abbreviate_international_instrument,
        ),
        T::UnDocument => entry(
            source_type,
            &[Has(Year), Has(Title), Has(Symbol)],
            render_un_document,
            abbreviate_un_document,
        ),
        T::CaseConstitutionalCourt => entry(
            source_type,
            &[DATE_OR_YEAR, Has(Docket)],
            render_constitutional_court,
            abbreviate_constitutional_court,
        ),
        T::CaseSupremeCourt => entry(
            source_type,
            &[DATE_OR_YEAR, Has(Docket)],
            render_supreme_court,
            abbreviate_supreme_court,
        ),
        T::CaseCriminal => entry(
            source_type,
            &[Has(Tribunal), DATE_OR_YEAR, Has(Rit), Has(Ruc)],
            render_criminal_case,
            abbreviate_case,
        ),
        T::CaseUnreported => entry(
            source_type,
            &[Has(Tribunal), DATE_OR_YEAR, Has(Docket), Has(Source)],
            render_unreported_case,
            abbreviate_case,
        ),
        T::CaseDatabase => entry(
            source_type,
            &[Has(Tribunal), DATE_OR_YEAR, Has(Docket), Has(Database), Has(OnlineCitation)],
            render_database_case,
            abbreviate_case,
        ),
        T::CaseForeign => entry(
            source_type,
            &[Has(Tribunal), DATE_OR_YEAR],
            render_foreign_case,
            abbreviate_case,
        ),
        T::CaseInternational => entry(
            source_type,
            &[Has(Tribunal), DATE_OR_YEAR, Has(CaseName)],
            render_international_case,
            abbreviate_case,
        ),
        T::WebPage => entry(
            source_type,
            &[AuthorsOrEntity, Has(Year), Has(Title), Has(Url)],
            render_web_page,
            abbreviate_creator,
        ),
        T::Blog => entry(
            source_type,
            &[AuthorsOrEntity, Has(Year), Has(Title), Has(Site), Has(Url)],
            render_blog,
            abbreviate_creator,
        ),
        T::Newspaper => entry(
            source_type,
            &[Has(Year), Has(Title), Has(Newspaper)],
            render_newspaper,
            abbreviate_newspaper,
        ),
        T::Thesis => entry(
            source_type,
            &[Authors, Has(Year), Has(Title), Has(Degree), Has(Institution)],
            render_thesis,
            abbreviate_doctrine,
        ),
        T::Report => entry(
            source_type,
            &[AuthorsOrEntity, Has(Year), Has(Title)],
            render_report,
            abbreviate_creator,
        ),
        T::Manuscript => entry(
            source_type,
            &[Has(Title), Has(Archive)],
            render_manuscript,
            abbreviate_creator,
        ),
        T::HistoricalSource => entry(
            source_type,
            &[Authors, Has(Work)],
            render_historical_source,
            abbreviate_historical_source,
        ),
        T::NonLatinWork => entry(
            source_type,
            &[Authors, Has(Year), Has(Title), Has(City), Has(Publisher)],
            render_non_latin_work,
            abbreviate_doctrine,
        ),
        T::Ebook => entry(
            source_type,
            &[Authors, Has(Year), Has(Title), Has(Publisher)],
            render_ebook,
            abbreviate_ebook,
        ),
    }
}

// --- Clause helpers shared by the renderers ---

/// The people behind a work, or the entity standing in for them in small caps.
pub(crate) fn creator(ctx: &Context, record: &SourceRecord) -> Markup {
    let authors = format_authors(&record.authors, ctx.threshold);
    if !authors.is_empty() {
        return authors;
    }
    let mut markup = Markup::new();
    if let Some(entity) = record.get(Field::Entity) {
        markup.small_caps(entity);
    }
    markup
}

/// `CREATOR (year): ` opening every doctrinal reference. The year carries its
/// disambiguating letter; `shown_year` overrides it (translated books).
pub(crate) fn heading(ctx: &Context, record: &SourceRecord, shown_year: Option<String>) -> Markup {
    let mut markup = creator(ctx, record);
    if !markup.is_empty() {
        markup.plain(" ");
    }
    let year = shown_year.unwrap_or_else(|| {
        year_with_suffix(
            record.get(Field::Year).unwrap_or_default(),
            record.get(Field::YearSuffix),
        )
    });
    markup.plain("(").plain(&year).plain("): ");
    markup
}

/// `CREATOR[ (year)]: ` for sources whose date is often unknown.
pub(crate) fn heading_optional_year(ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = creator(ctx, record);
    if let Some(year) = record.get(Field::Year) {
        if !markup.is_empty() {
            markup.plain(" ");
        }
        markup
            .plain("(")
            .plain(&year_with_suffix(year, record.get(Field::YearSuffix)))
            .plain(")");
    }
    if !markup.is_empty() {
        markup.plain(": ");
    }
    markup
}

/// Join the present parts with `, `.
pub(crate) fn join_present(parts: impl IntoIterator<Item = Option<String>>) -> String {
    parts
        .into_iter()
        .flatten()
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// ` (a, b, c)`, or nothing when every part is absent.
pub(crate) fn parenthetical(markup: &mut Markup, parts: impl IntoIterator<Item = Option<String>>) {
    let inner = join_present(parts);
    if !inner.is_empty() {
        markup.plain(" (").plain(&inner).plain(")");
    }
}

pub(crate) fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

/// `. Disponible en: URL[. Fecha de consulta: dd/mm/yyyy]`
pub(crate) fn online(markup: &mut Markup, record: &SourceRecord) {
    if let Some(url) = record.get(Field::Url) {
        markup.plain(". Disponible en: ").plain(url);
    }
    consulted(markup, record);
}

pub(crate) fn consulted(markup: &mut Markup, record: &SourceRecord) {
    if let Some(date) = record.get(Field::ConsultedOn) {
        markup
            .plain(". Fecha de consulta: ")
            .plain(&crate::values::date(date));
    }
}

/// `, p. 4` / `, pp. 4-6` after a clause.
pub(crate) fn pages_clause(markup: &mut Markup, pages: Option<&str>, separator: &str) {
    if let Some(pages) = pages {
        markup.plain(separator).plain(&page_label(pages));
    }
}

/// Locators of a record for the doctrine abbreviator.
pub(crate) fn locators(record: &SourceRecord) -> Locators<'_> {
    Locators {
        year: record.get(Field::Year).unwrap_or_default(),
        pages: record.get(Field::Pinpoint),
        tome: record.get(Field::Tome),
        letter_suffix: record.get(Field::YearSuffix),
    }
}

/// Author-based abbreviation shared by books, articles and theses.
pub fn abbreviate_doctrine(ctx: &Context, record: &SourceRecord) -> String {
    abbreviate(
        &record.authors,
        &locators(record),
        CitationKind::Doctrine,
        ctx.threshold,
    )
}

/// Like [`abbreviate_doctrine`], falling back to the entity name.
pub fn abbreviate_creator(ctx: &Context, record: &SourceRecord) -> String {
    let by_authors = abbreviate_doctrine(ctx, record);
    if !by_authors.is_empty() {
        return by_authors;
    }
    match record.get(Field::Entity) {
        Some(entity) => abbreviate_named(&versalitas(entity), &locators(record)),
        None => String::new(),
    }
}
