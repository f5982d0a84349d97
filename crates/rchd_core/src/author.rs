/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A person credited on a work: author, editor or translator.
///
/// Chilean names carry two family names (paternal and maternal). Both are
/// shown in the full reference; abbreviated citations keep only the first.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct Author {
    #[serde(default)]
    pub family_name1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name2: Option<String>,
    #[serde(default)]
    pub given_name: String,
}

impl Author {
    pub fn new(family_name1: &str, given_name: &str) -> Self {
        Self {
            family_name1: family_name1.to_string(),
            family_name2: None,
            given_name: given_name.to_string(),
        }
    }

    pub fn with_second_family(family_name1: &str, family_name2: &str, given_name: &str) -> Self {
        Self {
            family_name1: family_name1.to_string(),
            family_name2: Some(family_name2.to_string()),
            given_name: given_name.to_string(),
        }
    }

    pub fn family(&self) -> &str {
        self.family_name1.trim()
    }

    pub fn second_family(&self) -> Option<&str> {
        self.family_name2
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn given(&self) -> &str {
        self.given_name.trim()
    }

    /// An author counts only if it has a first family name or a given name.
    pub fn is_valid(&self) -> bool {
        !self.family().is_empty() || !self.given().is_empty()
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.second_family() {
            Some(second) => write!(f, "{} {} {}", self.given(), self.family(), second),
            None => write!(f, "{} {}", self.given(), self.family()),
        }
    }
}

/// The valid subset of an author list, in input order.
pub fn valid_authors(authors: &[Author]) -> Vec<&Author> {
    authors.iter().filter(|a| a.is_valid()).collect()
}
