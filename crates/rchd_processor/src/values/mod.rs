/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Value-level formatting shared by every renderer: names, numbers, dates.

pub mod contributor;
pub mod number;

pub use contributor::{format_author, format_authors, format_editors, short_names};
pub use number::{
    article_pinpoint, edition_ordinal, number_label, page_label, roman_numeral, to_roman,
    tome_label,
};

/// Normalize a free-text date to `dd/mm/yyyy` when possible.
pub fn date(value: &str) -> String {
    rchd_date::normalize(value)
}
