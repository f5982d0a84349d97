/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! RTF output format.
//!
//! Produces an RTF fragment for one reference; wrapping it in a document
//! (`{\rtf1 ...}`) is left to the exporter.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct Rtf;

impl OutputFormat for Rtf {
    type Output = String;

    fn text(&self, s: &str) -> Self::Output {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '\\' | '{' | '}' => {
                    out.push('\\');
                    out.push(c);
                }
                c if c.is_ascii() => out.push(c),
                c => {
                    // \uN takes a signed 16-bit value; astral characters go
                    // out as a surrogate pair.
                    let mut units = [0u16; 2];
                    for unit in c.encode_utf16(&mut units) {
                        out.push_str(&format!("\\u{}?", *unit as i16));
                    }
                }
            }
        }
        out
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
        format!("{{\\i {}}}", content)
    }

    fn small_caps(&self, content: Self::Output) -> Self::Output {
        if content.is_empty() {
            return content;
        }
        format!("{{\\scaps {}}}", content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_non_ascii_and_braces() {
        assert_eq!(Rtf.text("Guzmán {x}"), "Guzm\\u225?n \\{x\\}");
    }

    #[test]
    fn test_italic_group() {
        assert_eq!(Rtf.emph(Rtf.text("Título")), "{\\i T\\u237?tulo}");
    }
}
