/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Typed markup for rendered references, and the formats it serializes to.
//!
//! Renderers never emit markup text. They build a [`Markup`], a flat
//! sequence of plain, italic and small-caps spans, and the caller picks an
//! [`OutputFormat`](format::OutputFormat) at the boundary.

pub mod format;
pub mod html;
pub mod markdown;
pub mod plain;
pub mod rtf;

use format::OutputFormat;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", content = "text", rename_all = "kebab-case")]
pub enum Span {
    Plain(String),
    Italic(String),
    /// Text already uppercased; formats may additionally mark it as small caps.
    SmallCaps(String),
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(t) | Span::Italic(t) | Span::SmallCaps(t) => t,
        }
    }

    fn text_mut(&mut self) -> &mut String {
        match self {
            Span::Plain(t) | Span::Italic(t) | Span::SmallCaps(t) => t,
        }
    }

    fn same_style(&self, other: &Span) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Markup(Vec<Span>);

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, span: Span) -> &mut Self {
        if span.text().is_empty() {
            return self;
        }
        match self.0.last_mut() {
            Some(last) if last.same_style(&span) => last.text_mut().push_str(span.text()),
            _ => self.0.push(span),
        }
        self
    }

    pub fn plain(&mut self, text: &str) -> &mut Self {
        self.push(Span::Plain(text.to_string()))
    }

    pub fn italic(&mut self, text: &str) -> &mut Self {
        self.push(Span::Italic(text.to_string()))
    }

    /// Uppercase `text` and mark it as small caps (versalitas).
    pub fn small_caps(&mut self, text: &str) -> &mut Self {
        self.push(Span::SmallCaps(versalitas(text)))
    }

    /// Title wrapped in double quotes, as articles and chapters are cited.
    pub fn quoted(&mut self, text: &str) -> &mut Self {
        self.plain(&quote(text))
    }

    pub fn append(&mut self, other: Markup) -> &mut Self {
        for span in other.0 {
            self.push(span);
        }
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ends_with(&self, c: char) -> bool {
        self.0
            .last()
            .and_then(|span| span.text().chars().last())
            .is_some_and(|last| last == c)
    }

    /// Close the reference with exactly one period.
    pub fn terminate(&mut self) -> &mut Self {
        if let Some(last) = self.0.last_mut() {
            let trimmed_len = last.text().trim_end().len();
            last.text_mut().truncate(trimmed_len);
        }
        self.0.retain(|span| !span.text().is_empty());
        if !self.is_empty() && !self.ends_with('.') {
            self.plain(".");
        }
        self
    }

    /// The markup with all styling dropped.
    pub fn to_plain(&self) -> String {
        self.0.iter().map(Span::text).collect()
    }

    pub fn render<F: OutputFormat>(&self, format: &F) -> String {
        let parts = self
            .0
            .iter()
            .map(|span| match span {
                Span::Plain(t) => format.text(t),
                Span::Italic(t) => format.emph(format.text(t)),
                Span::SmallCaps(t) => format.small_caps(format.text(t)),
            })
            .collect();
        format.finish(format.join(parts, ""))
    }
}

impl From<&str> for Markup {
    fn from(text: &str) -> Self {
        let mut markup = Markup::new();
        markup.plain(text);
        markup
    }
}

/// Uppercase a family name or entity for small-caps display. Plain and marked
/// output both go through here so they never disagree.
pub fn versalitas(text: &str) -> String {
    text.to_uppercase()
}

pub fn quote(text: &str) -> String {
    format!("\"{}\"", text)
}

fn tag_pattern() -> &'static Regex {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    TAGS.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"))
}

/// Remove HTML tags and decode the entities [`html::Html`] escapes.
pub fn strip_tags(html: &str) -> String {
    tag_pattern()
        .replace_all(html, "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::html::Html;
    use crate::render::markdown::Markdown;
    use crate::render::plain::PlainText;

    fn sample() -> Markup {
        let mut m = Markup::new();
        m.small_caps("Guzmán Brito")
            .plain(", Alejandro (2005): ")
            .italic("De las donaciones entre vivos")
            .plain(" (Santiago, Editorial LexisNexis)");
        m
    }

    #[test]
    fn test_adjacent_spans_merge() {
        let mut m = Markup::new();
        m.plain("a").plain("").plain("b").italic("c");
        assert_eq!(
            m.spans(),
            &[Span::Plain("ab".to_string()), Span::Italic("c".to_string())]
        );
    }

    #[test]
    fn test_terminate_adds_single_period() {
        let mut m = sample();
        m.terminate();
        assert!(m.to_plain().ends_with("LexisNexis)."));
        m.terminate();
        assert!(!m.to_plain().ends_with(".."));

        let mut trailing = Markup::from("Disponible en: https://www.bcn.cl ");
        trailing.terminate();
        assert_eq!(trailing.to_plain(), "Disponible en: https://www.bcn.cl.");

        let mut empty = Markup::new();
        empty.terminate();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_small_caps_uppercases_accents() {
        let mut m = Markup::new();
        m.small_caps("Peña");
        assert_eq!(m.to_plain(), "PEÑA");
    }

    #[test]
    fn test_markdown_rendering() {
        assert_eq!(
            sample().render(&Markdown),
            "GUZMÁN BRITO, Alejandro (2005): *De las donaciones entre vivos* (Santiago, Editorial LexisNexis)"
        );
    }

    #[test]
    fn test_html_strips_back_to_plain() {
        let mut m = sample();
        m.plain(" <sic> & co");
        let html = m.render(&Html);
        assert!(html.contains("<i>De las donaciones entre vivos</i>"));
        assert_eq!(strip_tags(&html), m.render(&PlainText));
    }
}
