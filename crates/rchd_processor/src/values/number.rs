/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Roman numerals, Spanish edition ordinals and locator labels.
//!
//! Every conversion here fails soft: input it cannot interpret comes back
//! verbatim instead of raising.

const ROMAN_PAIRS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Roman numeral for 1..=3999.
pub fn roman_numeral(n: u32) -> Option<String> {
    if !(1..=3999).contains(&n) {
        return None;
    }
    let mut rest = n;
    let mut out = String::new();
    for (value, symbol) in ROMAN_PAIRS {
        while rest >= value {
            out.push_str(symbol);
            rest -= value;
        }
    }
    Some(out)
}

/// Roman numeral for a numeric string; anything else is returned unchanged.
pub fn to_roman(value: &str) -> String {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(roman_numeral)
        .unwrap_or_else(|| value.to_string())
}

const ORDINALS: [&str; 9] = [
    "segunda", "tercera", "cuarta", "quinta", "sexta", "séptima", "octava", "novena", "décima",
];

/// Edition phrase for the publication clause of a book.
///
/// First editions are not annotated, so "1" yields an empty string.
pub fn edition_ordinal(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if let Ok(n) = trimmed.parse::<u32>() {
        return match n {
            1 => String::new(),
            2..=10 => format!("{} edición", ORDINALS[(n - 2) as usize]),
            _ => format!("{}ª edición", n),
        };
    }
    let lowered = trimmed.to_lowercase();
    if ["ed", "edición", "ª"].iter().any(|m| lowered.contains(m)) {
        trimmed.to_string()
    } else {
        format!("{} edición", trimmed)
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// A labelled locator such as "párr. 12" or "cap. 3" is used as written.
fn is_labelled(value: &str) -> bool {
    value.chars().next().is_some_and(char::is_alphabetic)
        && (value.contains(' ') || value.contains('.'))
}

/// `p.` for a single page, `pp.` for a range (ASCII hyphen or en dash).
pub fn page_label(pages: &str) -> String {
    let pages = pages.trim();
    if is_labelled(pages) {
        pages.to_string()
    } else if pages.contains('-') || pages.contains('–') {
        format!("pp. {}", pages)
    } else {
        format!("p. {}", pages)
    }
}

/// "Tomo II" for a numeric tome, the tome text otherwise.
pub fn tome_label(tome: &str) -> String {
    let tome = tome.trim();
    if is_numeric(tome) {
        format!("Tomo {}", to_roman(tome))
    } else {
        tome.to_string()
    }
}

/// "N° 20.000", unless the number already carries its own sign.
pub fn number_label(number: &str) -> String {
    let number = number.trim();
    let lowered = number.to_lowercase();
    if ["n°", "nº", "n.°", "n.º", "no.", "núm", "num."]
        .iter()
        .any(|sign| lowered.starts_with(sign))
    {
        number.to_string()
    } else {
        format!("N° {}", number)
    }
}

/// "art. 19" for a bare article reference.
pub fn article_pinpoint(pinpoint: &str) -> String {
    let pinpoint = pinpoint.trim();
    if pinpoint.to_lowercase().starts_with("art") {
        pinpoint.to_string()
    } else {
        format!("art. {}", pinpoint)
    }
}
