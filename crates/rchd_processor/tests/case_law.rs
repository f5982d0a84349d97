/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use rchd_core::{Field, SourceRecord, SourceType};
use rchd_processor::render::markdown::Markdown;
use rchd_processor::Processor;

#[test]
fn test_supreme_court_with_case_name() {
    let record = SourceRecord::new()
        .with(Field::Date, "20 de julio de 2011")
        .with(Field::Docket, "5102-2011")
        .with(Field::Procedure, "recurso de protección")
        .with(Field::CaseName, "Comunidad Indígena con Empresa Eléctrica")
        .with(Field::Url, "https://juris.pjud.cl/busqueda?Corte_Suprema")
        .with(Field::Pinpoint, "considerando 9°");
    let citation = render(SourceType::CaseSupremeCourt, &record);
    assert_eq!(
        citation.full_reference_plain,
        "Corte Suprema, 20/07/2011, rol 5102-2011, recurso de protección (Comunidad Indígena con Empresa Eléctrica). Disponible en: https://juris.pjud.cl/busqueda?Corte_Suprema."
    );
    assert_eq!(citation.abbreviated, "Corte Suprema, 20/07/2011, considerando 9°.");
}

#[test]
fn test_rulings_are_never_abbreviated_as_doctrine() {
    let record = make_ruling("Corte de Apelaciones de Concepción", "2016", "1234-2015")
        .with(Field::Source, "Microjuris");
    let citation = Processor::default()
        .render_unchecked(SourceType::CaseUnreported, &record);
    assert_eq!(
        citation.abbreviated,
        "Corte de Apelaciones de Concepción, 2016."
    );
}

#[test]
fn test_year_stands_in_for_date() {
    let record = SourceRecord::new()
        .with(Field::Year, "1998")
        .with(Field::Docket, "280");
    assert_eq!(
        full(SourceType::CaseConstitutionalCourt, &record),
        "Tribunal Constitucional, 1998, rol N° 280."
    );
}

#[test]
fn test_criminal_case_requires_rit_and_ruc() {
    let record = SourceRecord::new()
        .with(Field::Tribunal, "Juzgado de Garantía de Arica")
        .with(Field::Date, "2020-11-03")
        .with(Field::Rit, "3456-2020");
    let err = Processor::default()
        .render(SourceType::CaseCriminal, &record)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "case-criminal is missing required field: ruc"
    );

    let complete = record
        .with(Field::Ruc, "2000123456-7")
        .with(Field::Procedure, "procedimiento abreviado");
    assert_eq!(
        full(SourceType::CaseCriminal, &complete),
        "Juzgado de Garantía de Arica, 03/11/2020, RIT 3456-2020, RUC 2000123456-7, procedimiento abreviado."
    );
}

#[test]
fn test_database_ruling() {
    let record = make_ruling("Corte Suprema", "12/01/2015", "25.012-2014")
        .with(Field::Database, "Westlaw Chile")
        .with(Field::OnlineCitation, "CL/JUR/123/2015");
    assert_eq!(
        full(SourceType::CaseDatabase, &record),
        "Corte Suprema, 12/01/2015, rol 25.012-2014. Westlaw Chile, cita online: CL/JUR/123/2015."
    );
}

#[test]
fn test_foreign_and_international_case_names_in_italics() {
    let foreign = SourceRecord::new()
        .with(Field::Tribunal, "House of Lords")
        .with(Field::Country, "Reino Unido")
        .with(Field::Year, "1932")
        .with(Field::CaseName, "Donoghue v. Stevenson")
        .with(Field::Source, "AC 562");
    assert_eq!(
        render(SourceType::CaseForeign, &foreign).full_reference_as::<Markdown>(),
        "House of Lords (Reino Unido), 1932, *Donoghue v. Stevenson*. AC 562."
    );

    let international = SourceRecord::new()
        .with(Field::Tribunal, "Corte Internacional de Justicia")
        .with(Field::Date, "27/01/2014")
        .with(Field::CaseName, "Perú c. Chile");
    let citation = render(SourceType::CaseInternational, &international);
    assert_eq!(
        citation.full_reference_as::<Markdown>(),
        "Corte Internacional de Justicia, 27/01/2014, *Perú c. Chile*."
    );
    assert_eq!(citation.abbreviated, "Corte Internacional de Justicia, 27/01/2014.");
}
