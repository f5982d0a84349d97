/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Author-list collation.
//!
//! Full references name every author up to the threshold as
//! `FAMILY1 FAMILY2, Given`; abbreviated citations keep only the first family
//! name. Both collapse to "FIRST y otros" once the list reaches the
//! threshold.

use crate::render::{versalitas, Markup};
use rchd_core::{valid_authors, Author, AuthorThreshold};

const AND: &str = " y ";
const ET_AL: &str = " y otros";

/// `GUZMÁN BRITO, Alejandro`, with the family names in small caps.
pub fn format_author(author: &Author) -> Markup {
    let mut markup = Markup::new();
    let family = match (author.family(), author.second_family()) {
        ("", Some(second)) => second.to_string(),
        (first, Some(second)) => format!("{} {}", first, second),
        (first, None) => first.to_string(),
    };

    if family.is_empty() {
        markup.plain(author.given());
        return markup;
    }

    markup.small_caps(&family);
    if !author.given().is_empty() {
        markup.plain(", ").plain(author.given());
    }
    markup
}

/// Collate an author list for a full reference.
///
/// Only valid authors count. Below the threshold every author is listed,
/// joined by "y"; at or above it only the first is named.
pub fn format_authors(authors: &[Author], threshold: AuthorThreshold) -> Markup {
    let valid = valid_authors(authors);
    let mut markup = Markup::new();

    match valid.as_slice() {
        [] => {}
        [first, ..] if valid.len() >= threshold.count() => {
            markup.append(format_author(first)).plain(ET_AL);
        }
        all => {
            for (i, author) in all.iter().enumerate() {
                if i > 0 {
                    markup.plain(AND);
                }
                markup.append(format_author(author));
            }
        }
    }
    markup
}

/// Editors of a collective work followed by `(edit.)` or `(edits.)`.
///
/// The label follows the number of valid editors, not the collapsed list:
/// four editors shown as "A y otros" still read "(edits.)".
pub fn format_editors(editors: &[Author], threshold: AuthorThreshold) -> Markup {
    let count = valid_authors(editors).len();
    let mut markup = format_authors(editors, threshold);
    match count {
        0 => {}
        1 => {
            markup.plain(" (edit.)");
        }
        _ => {
            markup.plain(" (edits.)");
        }
    }
    markup
}

fn short_name(author: &Author) -> String {
    if author.family().is_empty() {
        versalitas(author.given())
    } else {
        versalitas(author.family())
    }
}

/// Collate an author list for an abbreviated citation: first family names
/// only, uppercased.
pub fn short_names(authors: &[Author], threshold: AuthorThreshold) -> String {
    let valid = valid_authors(authors);
    match valid.as_slice() {
        [] => String::new(),
        [first, ..] if valid.len() >= threshold.count() => {
            format!("{}{}", short_name(first), ET_AL)
        }
        all => all
            .iter()
            .map(|a| short_name(a))
            .collect::<Vec<_>>()
            .join(AND),
    }
}
