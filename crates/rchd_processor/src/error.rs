/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use rchd_core::{NormKindError, SourceType, UnknownSourceType};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("{source_type} is missing required field: {field}")]
    MissingField {
        source_type: SourceType,
        field: String,
    },

    #[error(transparent)]
    UnknownSourceType(#[from] UnknownSourceType),

    #[error(transparent)]
    NormKind(#[from] NormKindError),

    #[error("Failed to parse {0}: {1}")]
    ParseError(String, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
