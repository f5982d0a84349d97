/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Journal articles, the press, and the web.

use super::{abbreviate_doctrine, heading, locators, online, pages_clause, Context};
use crate::abbreviation::{abbreviate_named, year_with_suffix};
use crate::render::{versalitas, Markup};
use crate::values::{date, number_label, page_label};
use rchd_core::{Field, SourceRecord};

pub fn render_article(ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = heading(ctx, record, None);
    markup
        .quoted(record.get(Field::Title).unwrap_or_default())
        .plain(", ")
        .italic(record.get(Field::Journal).unwrap_or_default());
    if let Some(volume) = record.get(Field::Volume) {
        markup.plain(", vol. ").plain(volume);
    }
    if let Some(number) = record.get(Field::Number) {
        markup.plain(", ").plain(&number_label(number));
    }
    pages_clause(&mut markup, record.get(Field::Pages), ": ");
    if let Some(doi) = record.get(Field::Doi) {
        markup.plain(". DOI: ").plain(doi);
    }
    online(&mut markup, record);
    markup.terminate();
    markup
}

pub fn render_web_page(ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = heading(ctx, record, None);
    markup.quoted(record.get(Field::Title).unwrap_or_default());
    if let Some(site) = record.get(Field::Site) {
        markup.plain(", ").plain(site);
    }
    online(&mut markup, record);
    markup.terminate();
    markup
}

pub fn render_blog(ctx: &Context, record: &SourceRecord) -> Markup {
    let mut markup = heading(ctx, record, None);
    markup
        .quoted(record.get(Field::Title).unwrap_or_default())
        .plain(", ")
        .italic(record.get(Field::Site).unwrap_or_default());
    if let Some(posted) = record.get(Field::Date) {
        markup.plain(", ").plain(&date(posted));
    }
    online(&mut markup, record);
    markup.terminate();
    markup
}

/// Unsigned press pieces are headed by the newspaper itself.
pub fn render_newspaper(ctx: &Context, record: &SourceRecord) -> Markup {
    let paper = record.get(Field::Newspaper).unwrap_or_default();
    let signed = record.has_valid_authors();

    let mut markup = if signed {
        heading(ctx, record, None)
    } else {
        let mut unsigned = Markup::new();
        unsigned
            .small_caps(paper)
            .plain(" (")
            .plain(&year_with_suffix(
                record.get(Field::Year).unwrap_or_default(),
                record.get(Field::YearSuffix),
            ))
            .plain("): ");
        unsigned
    };

    markup.quoted(record.get(Field::Title).unwrap_or_default());
    if signed {
        markup.plain(", ").italic(paper);
    }
    if let Some(published) = record.get(Field::Date) {
        markup.plain(", ").plain(&date(published));
    }
    if let Some(pages) = record.get(Field::Pages) {
        markup.plain(", ").plain(&page_label(pages));
    }
    online(&mut markup, record);
    markup.terminate();
    markup
}

pub fn abbreviate_newspaper(ctx: &Context, record: &SourceRecord) -> String {
    if record.has_valid_authors() {
        return abbreviate_doctrine(ctx, record);
    }
    match record.get(Field::Newspaper) {
        Some(paper) => abbreviate_named(&versalitas(paper), &locators(record)),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Span;
    use rchd_core::Author;

    fn article() -> SourceRecord {
        SourceRecord::new()
            .with_author(Author::with_second_family("Barros", "Bourie", "Enrique"))
            .with(Field::Year, "2009")
            .with(Field::Title, "La responsabilidad civil")
            .with(Field::Journal, "Revista Chilena de Derecho")
            .with(Field::Volume, "36")
            .with(Field::Number, "2")
            .with(Field::Pages, "245-270")
            .with(Field::Doi, "10.4067/S0718-34372009000200002")
    }

    #[test]
    fn test_article_clause_order() {
        let markup = render_article(&Context::default(), &article());
        assert_eq!(
            markup.to_plain(),
            "BARROS BOURIE, Enrique (2009): \"La responsabilidad civil\", Revista Chilena de Derecho, vol. 36, N° 2: pp. 245-270. DOI: 10.4067/S0718-34372009000200002."
        );
        assert!(markup
            .spans()
            .contains(&Span::Italic("Revista Chilena de Derecho".to_string())));
    }

    #[test]
    fn test_article_minimal() {
        let record = SourceRecord::new()
            .with_author(Author::new("Corral", "Hernán"))
            .with(Field::Year, "2010")
            .with(Field::Title, "Título")
            .with(Field::Journal, "Revista");
        assert_eq!(
            render_article(&Context::default(), &record).to_plain(),
            "CORRAL, Hernán (2010): \"Título\", Revista."
        );
    }

    #[test]
    fn test_web_page_by_entity() {
        let record = SourceRecord::new()
            .with(Field::Entity, "Biblioteca del Congreso Nacional")
            .with(Field::Year, "2022")
            .with(Field::Title, "Guía legal sobre arriendo")
            .with(Field::Site, "BCN")
            .with(Field::Url, "https://www.bcn.cl/leyfacil")
            .with(Field::ConsultedOn, "2023-05-04");
        assert_eq!(
            render_web_page(&Context::default(), &record).to_plain(),
            "BIBLIOTECA DEL CONGRESO NACIONAL (2022): \"Guía legal sobre arriendo\", BCN. Disponible en: https://www.bcn.cl/leyfacil. Fecha de consulta: 04/05/2023."
        );
    }

    #[test]
    fn test_blog_post() {
        let record = SourceRecord::new()
            .with_author(Author::new("Tapia", "Mauricio"))
            .with(Field::Year, "2020")
            .with(Field::Title, "Contratos y pandemia")
            .with(Field::Site, "El Mercurio Legal")
            .with(Field::Date, "3/4/2020")
            .with(Field::Url, "https://www.elmercurio.com/legal");
        assert_eq!(
            render_blog(&Context::default(), &record).to_plain(),
            "TAPIA, Mauricio (2020): \"Contratos y pandemia\", El Mercurio Legal, 03/04/2020. Disponible en: https://www.elmercurio.com/legal."
        );
    }

    #[test]
    fn test_signed_and_unsigned_newspaper() {
        let unsigned = SourceRecord::new()
            .with(Field::Year, "2019")
            .with(Field::Title, "Congreso despacha reforma")
            .with(Field::Newspaper, "El Mercurio")
            .with(Field::Date, "15 de enero de 2019")
            .with(Field::Pages, "C4");
        let ctx = Context::default();
        assert_eq!(
            render_newspaper(&ctx, &unsigned).to_plain(),
            "EL MERCURIO (2019): \"Congreso despacha reforma\", 15/01/2019, p. C4."
        );
        assert_eq!(abbreviate_newspaper(&ctx, &unsigned), "EL MERCURIO (2019).");

        let signed = unsigned.with_author(Author::new("Peña", "Carlos"));
        assert_eq!(
            render_newspaper(&ctx, &signed).to_plain(),
            "PEÑA, Carlos (2019): \"Congreso despacha reforma\", El Mercurio, 15/01/2019, p. C4."
        );
        assert_eq!(abbreviate_newspaper(&ctx, &signed), "PEÑA (2019).");
    }
}
