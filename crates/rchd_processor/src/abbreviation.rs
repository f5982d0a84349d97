/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Abbreviated (footnote) citations for doctrine: `BARROS y ROJAS (2009), p. 45.`
//!
//! Norms and rulings are abbreviated by their own catalog entries; asking
//! this module for them yields an empty string.

use crate::values::{page_label, short_names, tome_label};
use rchd_core::{Author, AuthorThreshold};

/// Family of citation being abbreviated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitationKind {
    Doctrine,
    Statute,
    CaseLaw,
}

/// Year and locators of an abbreviated citation. Empty strings count as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Locators<'a> {
    pub year: &'a str,
    pub pages: Option<&'a str>,
    pub tome: Option<&'a str>,
    pub letter_suffix: Option<&'a str>,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Year as printed in citations: with its disambiguating letter, or
/// "s.f." (sin fecha) when the work is undated.
pub fn year_with_suffix(year: &str, letter_suffix: Option<&str>) -> String {
    let year = year.trim();
    if year.is_empty() {
        return "s.f.".to_string();
    }
    match present(letter_suffix) {
        Some(letter) => format!("{}{}", year, letter),
        None => year.to_string(),
    }
}

/// Close an abbreviated citation with exactly one period, so a locator
/// written as `45 y ss.` does not end in `..`.
pub fn close_period(out: &mut String) {
    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    if !out.is_empty() && !out.ends_with('.') {
        out.push('.');
    }
}

/// Abbreviate a doctrinal work from its author list.
pub fn abbreviate(
    authors: &[Author],
    locators: &Locators<'_>,
    kind: CitationKind,
    threshold: AuthorThreshold,
) -> String {
    if kind != CitationKind::Doctrine {
        return String::new();
    }
    let names = short_names(authors, threshold);
    if names.is_empty() {
        return String::new();
    }
    abbreviate_named(&names, locators)
}

/// Abbreviate with an already collated name, e.g. an institution.
pub fn abbreviate_named(names: &str, locators: &Locators<'_>) -> String {
    let mut out = format!(
        "{} ({})",
        names,
        year_with_suffix(locators.year, locators.letter_suffix)
    );
    if let Some(tome) = present(locators.tome) {
        out.push_str(", ");
        out.push_str(&tome_label(tome));
    }
    if let Some(pages) = present(locators.pages) {
        out.push_str(", ");
        out.push_str(&page_label(pages));
    }
    close_period(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guzman() -> Vec<Author> {
        vec![Author::with_second_family("Guzmán", "Brito", "Alejandro")]
    }

    #[test]
    fn test_year_only() {
        let locators = Locators {
            year: "2005",
            ..Default::default()
        };
        assert_eq!(
            abbreviate(&guzman(), &locators, CitationKind::Doctrine, AuthorThreshold::Four),
            "GUZMÁN (2005)."
        );
    }

    #[test]
    fn test_pages_and_tome() {
        let locators = Locators {
            year: "2005",
            pages: Some("45-47"),
            tome: Some("2"),
            letter_suffix: Some("b"),
        };
        assert_eq!(
            abbreviate(&guzman(), &locators, CitationKind::Doctrine, AuthorThreshold::Four),
            "GUZMÁN (2005b), Tomo II, pp. 45-47."
        );
    }

    #[test]
    fn test_single_page() {
        let locators = Locators {
            year: "2005",
            pages: Some("47"),
            ..Default::default()
        };
        assert!(
            abbreviate(&guzman(), &locators, CitationKind::Doctrine, AuthorThreshold::Four)
                .ends_with(", p. 47.")
        );
    }

    #[test]
    fn test_norms_and_rulings_are_not_abbreviated_here() {
        let locators = Locators {
            year: "2005",
            ..Default::default()
        };
        for kind in [CitationKind::Statute, CitationKind::CaseLaw] {
            assert_eq!(abbreviate(&guzman(), &locators, kind, AuthorThreshold::Four), "");
        }
        assert_eq!(
            abbreviate(&[], &locators, CitationKind::Doctrine, AuthorThreshold::Four),
            ""
        );
    }

    #[test]
    fn test_pinpoint_with_own_period_is_not_doubled() {
        let locators = Locators {
            year: "2006",
            pages: Some("45 y ss."),
            ..Default::default()
        };
        let barros = vec![Author::with_second_family("Barros", "Bourie", "Enrique")];
        assert_eq!(
            abbreviate(&barros, &locators, CitationKind::Doctrine, AuthorThreshold::Four),
            "BARROS (2006), p. 45 y ss."
        );
    }

    #[test]
    fn test_close_period() {
        let mut out = "Ley N° 20.000, art. 5 ".to_string();
        close_period(&mut out);
        assert_eq!(out, "Ley N° 20.000, art. 5.");
        close_period(&mut out);
        assert_eq!(out, "Ley N° 20.000, art. 5.");

        let mut empty = String::new();
        close_period(&mut empty);
        assert_eq!(empty, "");
    }

    #[test]
    fn test_undated() {
        assert_eq!(year_with_suffix("", Some("a")), "s.f.");
        assert_eq!(year_with_suffix("2020", Some(" ")), "2020");
    }
}
