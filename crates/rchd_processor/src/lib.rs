/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! RChD Processor
//!
//! This crate formats bibliographic and legal sources in the citation style
//! of the *Revista Chilena de Derecho*. Given a [`SourceType`] and a
//! [`SourceRecord`], it produces the full reference used in the reference
//! list and the abbreviated form used in footnotes.
//!
//! Each source type has its own renderer in the [`catalog`]; they share the
//! author collation, number and date helpers in [`values`] and build typed
//! [`Markup`] that is serialized by an output format at the boundary.
//!
//! # Example
//!
//! ```rust
//! use rchd_processor::{Processor, SourceRecord, SourceType};
//! use rchd_processor::render::markdown::Markdown;
//! use rchd_core::{Author, Field};
//!
//! let record = SourceRecord::new()
//!     .with_author(Author::with_second_family("Guzmán", "Brito", "Alejandro"))
//!     .with(Field::Year, "2005")
//!     .with(Field::Title, "De las donaciones entre vivos")
//!     .with(Field::City, "Santiago")
//!     .with(Field::Publisher, "Editorial LexisNexis")
//!     .with(Field::Edition, "2");
//!
//! let citation = Processor::default().render(SourceType::Book, &record).unwrap();
//! assert_eq!(
//!     citation.full_reference_as::<Markdown>(),
//!     "GUZMÁN BRITO, Alejandro (2005): *De las donaciones entre vivos* (Santiago, Editorial LexisNexis, segunda edición)."
//! );
//! assert_eq!(citation.abbreviated, "GUZMÁN (2005).");
//! ```

pub mod abbreviation;
pub mod catalog;
pub mod error;
pub mod io;
pub mod processor;
pub mod render;
pub mod values;

pub use error::ProcessorError;
pub use io::Entry;
pub use processor::{Processor, RenderedCitation};
pub use render::format::OutputFormat;
pub use render::Markup;

// Re-export the data model for convenience
pub use rchd_core::{Config, SourceRecord, SourceType};
