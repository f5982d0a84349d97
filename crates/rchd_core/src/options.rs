/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Processor configuration.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Author count at which a list collapses to "FIRST y otros".
    pub author_threshold: AuthorThreshold,
}

/// The "y otros" cutoff. The style guide allows only 3 or 4.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AuthorThreshold {
    Three,
    #[default]
    Four,
}

#[cfg(feature = "schema")]
impl JsonSchema for AuthorThreshold {
    fn schema_name() -> String {
        "AuthorThreshold".to_string()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        <u8>::json_schema(gen)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("author threshold must be 3 or 4, got {0}")]
pub struct InvalidThreshold(pub u8);

impl AuthorThreshold {
    pub fn count(self) -> usize {
        match self {
            AuthorThreshold::Three => 3,
            AuthorThreshold::Four => 4,
        }
    }
}

impl TryFrom<u8> for AuthorThreshold {
    type Error = InvalidThreshold;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(AuthorThreshold::Three),
            4 => Ok(AuthorThreshold::Four),
            other => Err(InvalidThreshold(other)),
        }
    }
}

impl From<AuthorThreshold> for u8 {
    fn from(value: AuthorThreshold) -> Self {
        value.count() as u8
    }
}
