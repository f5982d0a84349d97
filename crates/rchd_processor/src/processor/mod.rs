/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The RChD processor: validates a record, dispatches it to the renderer of
//! its source type, and returns both citation forms.
//!
//! ## Architecture
//!
//! The processor holds nothing but its [`Config`]. Every call builds a fresh
//! [`RenderedCitation`]; keeping a history of citations is up to the caller.

pub mod validation;


use crate::catalog::{descriptor, Context};
use crate::error::ProcessorError;
use crate::io::Entry;
use crate::render::format::OutputFormat;
use crate::render::Markup;
use rchd_core::{Config, SourceRecord, SourceType};
use serde::Serialize;

/// Both forms of one citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RenderedCitation {
    /// The reference-list entry, with its italics and small caps.
    pub full_reference: Markup,
    /// The same entry with all styling dropped.
    pub full_reference_plain: String,
    /// The footnote form. Empty when the type has no abbreviation.
    pub abbreviated: String,
}

impl RenderedCitation {
    /// Serialize the full reference with the given output format.
    pub fn full_reference_as<F: OutputFormat>(&self) -> String {
        self.full_reference.render(&F::default())
    }
}

/// The RChD citation processor.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    config: Config,
}

impl Processor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn context(&self) -> Context {
        Context {
            threshold: self.config.author_threshold,
        }
    }

    /// Check that `record` carries what its source type requires.
    pub fn validate(
        &self,
        source_type: SourceType,
        record: &SourceRecord,
    ) -> Result<(), ProcessorError> {
        validation::validate(source_type, record)
    }

    /// Validate, then render.
    pub fn render(
        &self,
        source_type: SourceType,
        record: &SourceRecord,
    ) -> Result<RenderedCitation, ProcessorError> {
        self.validate(source_type, record)?;
        Ok(self.render_unchecked(source_type, record))
    }

    /// Render without validation. Missing fields simply drop their clauses.
    pub fn render_unchecked(
        &self,
        source_type: SourceType,
        record: &SourceRecord,
    ) -> RenderedCitation {
        let entry = descriptor(source_type);
        tracing::debug!(%source_type, fields = record.fields.len(), "rendering record");

        let ctx = self.context();
        let full_reference = (entry.render)(&ctx, record);
        let abbreviated = (entry.abbreviate)(&ctx, record);
        RenderedCitation {
            full_reference_plain: full_reference.to_plain(),
            full_reference,
            abbreviated,
        }
    }

    /// Render an entry loaded from a record file, resolving a free-text
    /// `norm-type` into a norm kind when none was given.
    pub fn render_entry(
        &self,
        entry: &Entry,
        validate: bool,
    ) -> Result<RenderedCitation, ProcessorError> {
        let mut entry = entry.clone();
        entry.resolve_norm_kind()?;
        if validate {
            self.render(entry.source_type, &entry.record)
        } else {
            Ok(self.render_unchecked(entry.source_type, &entry.record))
        }
    }
}
