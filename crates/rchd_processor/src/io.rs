/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use rchd_core::{Config, NormKind, NormKindError, SourceRecord, SourceType};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::ProcessorError;

/// One record of a record file, tagged with its source type.
///
/// ```yaml
/// - id: guzman2005
///   type: book
///   authors:
///     - family-name1: Guzmán
///       family-name2: Brito
///       given-name: Alejandro
///   year: 2005
///   title: De las donaciones entre vivos
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub source_type: SourceType,
    #[serde(flatten)]
    pub record: SourceRecord,
}

impl Entry {
    /// Fill in the norm kind of a generic statute from its free-text
    /// `norm-type`. An explicit `norm-kind` always wins.
    pub fn resolve_norm_kind(&mut self) -> Result<(), NormKindError> {
        if self.source_type != SourceType::Statute || self.record.norm_kind.is_some() {
            return Ok(());
        }
        let Some(text) = self.record.get(rchd_core::Field::NormType) else {
            return Ok(());
        };
        match NormKind::detect(text) {
            Ok(kind) => {
                tracing::debug!(norm_type = text, %kind, "detected norm kind");
                self.record.norm_kind = Some(kind);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(id = ?self.id, "{}", e);
                Err(e)
            }
        }
    }
}

fn extension(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("yaml")
}

/// Parse `bytes` as JSON or YAML after a syntax check, so malformed input
/// is reported as a syntax error rather than a shape mismatch.
fn parse_value<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> Result<T, ProcessorError> {
    match extension(path) {
        "json" => {
            let value: serde_json::Value = serde_json::from_slice(bytes)
                .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))?;
            serde_json::from_value(value)
                .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))
        }
        _ => {
            let content = String::from_utf8_lossy(bytes);
            let value: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))?;
            serde_yaml::from_value(value)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Entry>),
    One(Box<Entry>),
}

/// Load records from a file holding either a list of entries or a single one.
/// Supports YAML and JSON.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>, ProcessorError> {
    let bytes = fs::read(path)?;
    let entries = match parse_value::<OneOrMany>(path, &bytes) {
        Ok(OneOrMany::Many(entries)) => entries,
        Ok(OneOrMany::One(entry)) => vec![*entry],
        Err(_) => {
            // Re-parse with the concrete shape to surface the real error.
            let looks_like_list = bytes
                .iter()
                .find(|b| !b.is_ascii_whitespace())
                .is_some_and(|b| *b == b'[' || *b == b'-');
            if looks_like_list {
                parse_value::<Vec<Entry>>(path, &bytes)?
            } else {
                vec![parse_value::<Entry>(path, &bytes)?]
            }
        }
    };
    tracing::debug!(path = %path.display(), count = entries.len(), "loaded entries");
    Ok(entries)
}

/// Load a processor configuration file (YAML or JSON).
pub fn load_config(path: &Path) -> Result<Config, ProcessorError> {
    let bytes = fs::read(path)?;
    parse_value(path, &bytes)
}
