/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Markdown output format.
//!
//! Italics use single asterisks. Markdown has no small caps, so family names
//! appear in their uppercase form only.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct Markdown;

impl OutputFormat for Markdown {
    type Output = String;

    fn text(&self, s: &str) -> Self::Output {
        // No escaping, matching the style guide's own examples.
        s.to_string()
    }

    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output {
        items.join(delimiter)
    }

    fn finish(&self, output: Self::Output) -> String {
        output
    }

    fn emph(&self, content: Self::Output) -> Self::Output {
        if content.is_empty() {
            return content;
        }
        format!("*{}*", content)
    }

    fn small_caps(&self, content: Self::Output) -> Self::Output {
        content
    }
}
