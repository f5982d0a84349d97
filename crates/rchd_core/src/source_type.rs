/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The closed catalog of citable source types.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

macro_rules! define_source_types {
    ($( $variant:ident => $id:literal, $label:literal ),+ $(,)?) => {
        /// A source-type variant of the catalog.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[cfg_attr(feature = "schema", derive(JsonSchema))]
        pub enum SourceType {
            $( #[serde(rename = $id)] $variant ),+
        }

        impl SourceType {
            pub const ALL: &'static [SourceType] = &[$(SourceType::$variant),+];

            /// Kebab-case identifier, as used in record files.
            pub fn id(self) -> &'static str {
                match self {
                    $(SourceType::$variant => $id),+
                }
            }

            /// Short Spanish description for listings.
            pub fn label(self) -> &'static str {
                match self {
                    $(SourceType::$variant => $label),+
                }
            }
        }
    };
}

define_source_types! {
    Book => "book", "Libro",
    TranslatedBook => "translated-book", "Libro traducido",
    Chapter => "chapter", "Capítulo de libro editado",
    Article => "article", "Artículo de revista",
    Statute => "statute", "Norma jurídica (tipo explícito)",
    Constitution => "constitution", "Constitución",
    Code => "code", "Código",
    Decree => "decree", "Decreto, reglamento o circular",
    OfficialLetter => "official-letter", "Oficio o dictamen",
    Bill => "bill", "Proyecto de ley",
    LegislativeHistory => "legislative-history", "Historia de la ley",
    Treaty => "treaty", "Tratado internacional",
    InternationalInstrument => "international-instrument", "Instrumento de conferencia internacional",
    UnDocument => "un-document", "Documento de Naciones Unidas",
    EuInstrument => "eu-instrument", "Instrumento de la Unión Europea",
    CaseConstitutionalCourt => "case-constitutional-court", "Sentencia del Tribunal Constitucional",
    CaseSupremeCourt => "case-supreme-court", "Sentencia de la Corte Suprema (Poder Judicial)",
    CaseCriminal => "case-criminal", "Sentencia penal con RIT y RUC",
    CaseUnreported => "case-unreported", "Sentencia no publicada",
    CaseDatabase => "case-database", "Sentencia en base de datos",
    CaseForeign => "case-foreign", "Sentencia extranjera",
    CaseInternational => "case-international", "Sentencia de tribunal internacional",
    WebPage => "web-page", "Página web",
    Blog => "blog", "Blog o sitio institucional",
    Newspaper => "newspaper", "Prensa",
    Thesis => "thesis", "Tesis o memoria",
    Report => "report", "Informe",
    Manuscript => "manuscript", "Fuente manuscrita o de archivo",
    HistoricalSource => "historical-source", "Fuente histórico-dogmática",
    NonLatinWork => "non-latin-work", "Obra en alfabeto no latino",
    Ebook => "ebook", "Libro electrónico sin paginación",
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown source type: {0}")]
pub struct UnknownSourceType(pub String);

impl FromStr for SourceType {
    type Err = UnknownSourceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SourceType::ALL
            .iter()
            .copied()
            .find(|t| t.id() == wanted)
            .ok_or_else(|| UnknownSourceType(s.to_string()))
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
