/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable renderers.

/// Trait for defining how rendered spans are serialized into a specific format.
///
/// Implementations translate the two styling instructions a reference can
/// carry (italics and small caps) into markup or plain text.
pub trait OutputFormat: Default + Clone {
    /// The type used for intermediate rendered content.
    type Output;

    /// Convert a raw string into the format's output type, escaping whatever
    /// the target format requires.
    fn text(&self, s: &str) -> Self::Output;

    /// Join multiple outputs into a single output using a delimiter.
    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output;

    /// Convert the intermediate output into the final result string.
    ///
    /// Called exactly once per full reference.
    fn finish(&self, output: Self::Output) -> String;

    /// Render content with emphasis (italics for titles of books and journals).
    fn emph(&self, content: Self::Output) -> Self::Output;

    /// Render content in small capitals (family names and entities).
    fn small_caps(&self, content: Self::Output) -> Self::Output;
}
