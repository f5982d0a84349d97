/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Kinds of legal norm and the keyword adapter that guesses one from free text.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Layout family used to cite a norm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum NormKind {
    Constitution,
    Law,
    Code,
    /// Supreme decrees, regulations and circulars.
    Decree,
    /// Treaties and conventions.
    Treaty,
    /// Regulations and directives of the European Union.
    EuInstrument,
    Other,
}

/// Detection order. The first entry of each row is the canonical keyword.
const KEYWORDS: &[(NormKind, &[&str])] = &[
    (NormKind::Constitution, &["constitución", "constitucion", "constitution"]),
    (NormKind::Law, &["ley", "law"]),
    (NormKind::Code, &["código", "codigo", "code"]),
    (
        NormKind::Decree,
        &["decreto", "decree", "reglamento", "regulation", "circular"],
    ),
    (
        NormKind::Treaty,
        &["tratado", "treaty", "convención", "convencion", "convenio", "convention"],
    ),
    (
        NormKind::EuInstrument,
        &["unión europea", "union europea", "european union", "directiva", "directive", "(ue)", "(ce)", "(eu)"],
    ),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormKindError {
    #[error("norm type is empty")]
    Empty,
    #[error("norm type \"{text}\" is ambiguous ({}); set norm-kind explicitly", list_kinds(.candidates))]
    Ambiguous {
        text: String,
        candidates: Vec<NormKind>,
    },
}

fn list_kinds(kinds: &[NormKind]) -> String {
    kinds
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl NormKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NormKind::Constitution => "constitution",
            NormKind::Law => "law",
            NormKind::Code => "code",
            NormKind::Decree => "decree",
            NormKind::Treaty => "treaty",
            NormKind::EuInstrument => "eu-instrument",
            NormKind::Other => "other",
        }
    }

    /// Label printed before the norm number when the record has no
    /// `norm-type` of its own.
    pub fn default_label(self) -> &'static str {
        match self {
            NormKind::Constitution => "Constitución Política de la República",
            NormKind::Law => "Ley",
            NormKind::Code => "Código",
            NormKind::Decree => "Decreto Supremo",
            NormKind::Treaty => "Tratado",
            NormKind::EuInstrument => "Reglamento",
            NormKind::Other => "Norma",
        }
    }

    /// Guess the kind from a free-text norm type by case-insensitive
    /// substring match.
    ///
    /// Text that matches no keyword falls back to [`NormKind::Other`]. Text
    /// that matches keywords of more than one kind (e.g. "Decreto con fuerza
    /// de ley") is rejected: the caller has to pick the kind explicitly.
    pub fn detect(text: &str) -> Result<NormKind, NormKindError> {
        let lowered = text.trim().to_lowercase();
        if lowered.is_empty() {
            return Err(NormKindError::Empty);
        }

        let mut candidates: Vec<NormKind> = KEYWORDS
            .iter()
            .filter(|(_, words)| words.iter().any(|w| lowered.contains(w)))
            .map(|(kind, _)| *kind)
            .collect();
        // "Reglamento (UE)" names an EU regulation, not a domestic decree.
        if candidates.contains(&NormKind::EuInstrument) {
            candidates.retain(|kind| *kind != NormKind::Decree);
        }

        match candidates.as_slice() {
            [] => Ok(NormKind::Other),
            [kind] => Ok(*kind),
            _ => Err(NormKindError::Ambiguous {
                text: text.trim().to_string(),
                candidates,
            }),
        }
    }
}

impl fmt::Display for NormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
