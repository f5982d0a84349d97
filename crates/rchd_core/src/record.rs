/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Source records: the field values a caller collects for one cited work.

use crate::author::Author;
use crate::norm::NormKind;
use indexmap::IndexMap;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

macro_rules! define_fields {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal ),+ $(,)?) => {
        /// Name of a record field. Serialized in kebab-case.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[cfg_attr(feature = "schema", derive(JsonSchema))]
        pub enum Field {
            $( $(#[$doc])* #[serde(rename = $name)] $variant ),+
        }

        impl Field {
            pub const ALL: &'static [Field] = &[$(Field::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Field::$variant => $name),+
                }
            }
        }
    };
}

define_fields! {
    /// Publication year as written, e.g. "2005".
    Year => "year",
    /// Letter that tells apart same-author, same-year works ("a", "b").
    YearSuffix => "year-suffix",
    /// Year of the original edition of a translated work.
    OriginalYear => "original-year",
    Title => "title",
    /// Title of the book that contains a chapter.
    BookTitle => "book-title",
    Journal => "journal",
    Newspaper => "newspaper",
    Site => "site",
    Tome => "tome",
    Volume => "volume",
    Number => "number",
    Pages => "pages",
    /// Locator used by the abbreviated citation (page, article, considerando).
    Pinpoint => "pinpoint",
    City => "city",
    Publisher => "publisher",
    Edition => "edition",
    Translator => "translator",
    Doi => "doi",
    Url => "url",
    /// Date the online source was consulted.
    ConsultedOn => "consulted-on",
    /// Date of enactment, publication, judgment or posting.
    Date => "date",
    Country => "country",
    /// Free-text norm type ("Ley", "Decreto Supremo", "Código"...).
    NormType => "norm-type",
    /// Official name of a norm, treaty or instrument.
    Name => "name",
    Subject => "subject",
    Issuer => "issuer",
    Source => "source",
    Bulletin => "bulletin",
    Stage => "stage",
    LawNumber => "law-number",
    Conference => "conference",
    Organ => "organ",
    Symbol => "symbol",
    Tribunal => "tribunal",
    /// Rol or docket number of a ruling.
    Docket => "docket",
    Rit => "rit",
    Ruc => "ruc",
    CaseName => "case-name",
    /// Extra procedural information (type of action, appeal...).
    Procedure => "procedure",
    Database => "database",
    OnlineCitation => "online-citation",
    Series => "series",
    /// Corporate author used in place of people.
    Entity => "entity",
    Degree => "degree",
    Institution => "institution",
    Label => "label",
    Archive => "archive",
    Collection => "collection",
    Folios => "folios",
    Work => "work",
    Locus => "locus",
    EditionNote => "edition-note",
    OriginalTitle => "original-title",
    TranslatedTitle => "translated-title",
    Language => "language",
    Format => "format",
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field value. Written as a string or a bare integer in YAML/JSON,
/// always kept as a string.
///
/// Fractional numbers are rejected: an unquoted `20.000` would otherwise
/// come back as `20`, so dotted numbers must be quoted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct FieldValue(pub String);

struct FieldValueVisitor;

impl<'de> Visitor<'de> for FieldValueVisitor {
    type Value = FieldValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FieldValue, E> {
        Ok(FieldValue(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<FieldValue, E> {
        Ok(FieldValue(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FieldValue, E> {
        Ok(FieldValue(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FieldValue, E> {
        Ok(FieldValue(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<FieldValue, E> {
        Err(E::custom(format!(
            "fractional number {v} is not a valid field value; write dotted numbers such as \"20.000\" as quoted strings"
        )))
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FieldValueVisitor)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue(s)
    }
}

/// Everything known about one cited work.
///
/// Plain values live in `fields`; the author and editor lists are kept
/// apart because their order and cardinality drive collation. Norms carry an
/// explicit [`NormKind`] that selects the statute layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct SourceRecord {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Author>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub editors: Vec<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub norm_kind: Option<NormKind>,
    #[serde(flatten)]
    pub fields: IndexMap<Field, FieldValue>,
}

impl SourceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.authors.push(author);
        self
    }

    pub fn with_editor(mut self, editor: Author) -> Self {
        self.editors.push(editor);
        self
    }

    pub fn with_norm_kind(mut self, kind: NormKind) -> Self {
        self.norm_kind = Some(kind);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields.insert(field, FieldValue(value.into()));
    }

    /// Trimmed value of `field`; blank values read as absent.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields
            .get(&field)
            .map(|v| v.0.trim())
            .filter(|s| !s.is_empty())
    }

    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn has_valid_authors(&self) -> bool {
        self.authors.iter().any(Author::is_valid)
    }
}
