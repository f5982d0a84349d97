/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use clap::{Parser, Subcommand, ValueEnum};
use rchd_core::{AuthorThreshold, Config, SourceType};
use rchd_processor::{
    io::{load_config, load_entries, Entry},
    processor::validation::missing_fields,
    render::{html::Html, markdown::Markdown, plain::PlainText, rtf::Rtf},
    OutputFormat, Processor,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every record of a YAML/JSON file
    Render {
        /// Path to the records file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Plain)]
        format: Format,

        /// Author count at which lists collapse to "y otros" (3 or 4)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(3..=4))]
        threshold: Option<u8>,

        /// Path to a configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Render records even when required fields are missing
        #[arg(long)]
        no_validate: bool,
    },
    /// Check every record of a file for missing required fields
    Validate {
        /// Path to the records file
        file: PathBuf,
    },
    /// List the supported source types
    Types,
    /// Generate JSON schema for record files
    #[cfg(feature = "schema")]
    Schema,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Format {
    Plain,
    Html,
    Markdown,
    Rtf,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Plain => write!(f, "plain"),
            Format::Html => write!(f, "html"),
            Format::Markdown => write!(f, "markdown"),
            Format::Rtf => write!(f, "rtf"),
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            file,
            format,
            threshold,
            config,
            json,
            no_validate,
        } => {
            let mut config = match config {
                Some(path) => match load_config(&path) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Error reading config: {}", e);
                        std::process::exit(1);
                    }
                },
                None => Config::default(),
            };
            if let Some(value) = threshold {
                match AuthorThreshold::try_from(value) {
                    Ok(t) => config.author_threshold = t,
                    Err(e) => {
                        eprintln!("{}", e);
                        std::process::exit(1);
                    }
                }
            }

            let entries = read_entries(&file);
            let processor = Processor::new(config);
            tracing::debug!(config = ?processor.config(), "configuration");
            let validate = !no_validate;

            let failed = if json {
                match format {
                    Format::Plain => print_json::<PlainText>(&processor, &entries, validate),
                    Format::Html => print_json::<Html>(&processor, &entries, validate),
                    Format::Markdown => print_json::<Markdown>(&processor, &entries, validate),
                    Format::Rtf => print_json::<Rtf>(&processor, &entries, validate),
                }
            } else {
                match format {
                    Format::Plain => print_human::<PlainText>(&processor, &entries, validate),
                    Format::Html => print_human::<Html>(&processor, &entries, validate),
                    Format::Markdown => print_human::<Markdown>(&processor, &entries, validate),
                    Format::Rtf => print_human::<Rtf>(&processor, &entries, validate),
                }
            };
            if failed > 0 {
                std::process::exit(1);
            }
        }
        Commands::Validate { file } => {
            let entries = read_entries(&file);
            let mut invalid = 0;
            for (i, entry) in entries.iter().enumerate() {
                let label = entry_label(entry, i);
                let mut entry = entry.clone();
                if let Err(e) = entry.resolve_norm_kind() {
                    println!("  [{}] {}", label, e);
                    invalid += 1;
                    continue;
                }
                let missing = missing_fields(entry.source_type, &entry.record);
                if !missing.is_empty() {
                    println!(
                        "  [{}] {} is missing: {}",
                        label,
                        entry.source_type,
                        missing.join(", ")
                    );
                    invalid += 1;
                }
            }
            if invalid > 0 {
                eprintln!("Validation failed: {} of {} records", invalid, entries.len());
                std::process::exit(1);
            }
            println!("All {} records are valid.", entries.len());
        }
        Commands::Types => {
            for source_type in SourceType::ALL {
                println!("{:<28} {}", source_type.id(), source_type.label());
            }
        }
        #[cfg(feature = "schema")]
        Commands::Schema => {
            let schema = schemars::schema_for!(Vec<Entry>);
            match serde_json::to_string_pretty(&schema) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("Error serializing schema: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn read_entries(path: &Path) -> Vec<Entry> {
    match load_entries(path) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn entry_label(entry: &Entry, index: usize) -> String {
    entry
        .id
        .clone()
        .unwrap_or_else(|| format!("#{}", index + 1))
}

/// Print each record's full reference and footnote form. Returns the number
/// of records that failed.
fn print_human<F: OutputFormat>(processor: &Processor, entries: &[Entry], validate: bool) -> usize {
    let mut failed = 0;
    for (i, entry) in entries.iter().enumerate() {
        let label = entry_label(entry, i);
        match processor.render_entry(entry, validate) {
            Ok(citation) => {
                println!("[{}] {}", label, citation.full_reference_as::<F>());
                if !citation.abbreviated.is_empty() {
                    println!("    {}", citation.abbreviated);
                }
            }
            Err(e) => {
                eprintln!("[{}] ERROR: {}", label, e);
                failed += 1;
            }
        }
    }
    failed
}

fn print_json<F: OutputFormat>(processor: &Processor, entries: &[Entry], validate: bool) -> usize {
    let mut failed = 0;
    let items: Vec<_> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let label = entry_label(entry, i);
            match processor.render_entry(entry, validate) {
                Ok(citation) => json!({
                    "id": label,
                    "type": entry.source_type,
                    "full-reference": citation.full_reference_as::<F>(),
                    "full-reference-plain": citation.full_reference_plain,
                    "abbreviated": citation.abbreviated,
                    "spans": citation.full_reference,
                }),
                Err(e) => {
                    failed += 1;
                    json!({ "id": label, "error": e.to_string() })
                }
            }
        })
        .collect();

    match serde_json::to_string_pretty(&items) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
    failed
}
