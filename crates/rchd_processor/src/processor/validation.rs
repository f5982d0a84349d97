/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Boundary checks run before a record reaches its renderer.

use crate::catalog::legislation::norm_requirements;
use crate::catalog::{descriptor, Requirement};
use crate::error::ProcessorError;
use rchd_core::{NormKind, SourceRecord, SourceType};

/// The norm layout a record of `source_type` will be rendered with.
pub fn effective_norm_kind(source_type: SourceType, record: &SourceRecord) -> Option<NormKind> {
    match source_type {
        SourceType::Statute => record.norm_kind,
        other => descriptor(other).norm_kind,
    }
}

fn requirements(source_type: SourceType, record: &SourceRecord) -> Vec<Requirement> {
    let mut all = descriptor(source_type).required.to_vec();
    if let Some(kind) = effective_norm_kind(source_type, record) {
        all.extend_from_slice(norm_requirements(kind));
    }
    all
}

/// Names of every unmet requirement, in declaration order.
pub fn missing_fields(source_type: SourceType, record: &SourceRecord) -> Vec<String> {
    requirements(source_type, record)
        .iter()
        .filter(|req| !req.is_met(record))
        .map(Requirement::name)
        .collect()
}

/// Fail on the first unmet requirement.
pub fn validate(source_type: SourceType, record: &SourceRecord) -> Result<(), ProcessorError> {
    match requirements(source_type, record)
        .into_iter()
        .find(|req| !req.is_met(record))
    {
        Some(req) => {
            let field = req.name();
            tracing::warn!(%source_type, %field, "record is missing a required field");
            Err(ProcessorError::MissingField { source_type, field })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rchd_core::{Author, Field};

    #[test]
    fn test_first_missing_field_is_reported() {
        let record = SourceRecord::new()
            .with_author(Author::new("Guzmán", "Alejandro"))
            .with(Field::Year, "2005");
        let err = validate(SourceType::Book, &record).unwrap_err();
        assert!(matches!(
            err,
            ProcessorError::MissingField { source_type: SourceType::Book, ref field } if field == "title"
        ));
        assert_eq!(
            missing_fields(SourceType::Book, &record),
            vec!["title", "city", "publisher"]
        );
    }

    #[test]
    fn test_statute_needs_a_kind_then_its_fields() {
        let record = SourceRecord::new().with(Field::Number, "19.496");
        assert_eq!(missing_fields(SourceType::Statute, &record), vec!["norm-kind"]);

        let law = record.with_norm_kind(NormKind::Law);
        assert_eq!(missing_fields(SourceType::Statute, &law), vec!["date"]);
    }

    #[test]
    fn test_fixed_kind_types_ignore_record_kind() {
        let record = SourceRecord::new()
            .with_norm_kind(NormKind::Law)
            .with(Field::Name, "Código Civil");
        assert_eq!(
            effective_norm_kind(SourceType::Code, &record),
            Some(NormKind::Code)
        );
        assert!(validate(SourceType::Code, &record).is_ok());
    }

    #[test]
    fn test_entity_stands_in_for_authors() {
        let record = SourceRecord::new()
            .with(Field::Entity, "Fiscalía Nacional Económica")
            .with(Field::Year, "2018")
            .with(Field::Title, "Guía de competencia");
        assert!(validate(SourceType::Report, &record).is_ok());
        assert!(validate(SourceType::Book, &record).is_err());
    }
}
