/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! RChD Core
//!
//! Data model shared by the citation processor and its callers: authors,
//! source records, the catalog of source types, norm kinds and processor
//! configuration.

pub mod author;
pub mod norm;
pub mod options;
pub mod record;
pub mod source_type;

pub use author::{valid_authors, Author};
pub use norm::{NormKind, NormKindError};
pub use options::{AuthorThreshold, Config, InvalidThreshold};
pub use record::{Field, FieldValue, SourceRecord};
pub use source_type::{SourceType, UnknownSourceType};
