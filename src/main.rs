// SPDX-License-Identifier: GPL-3.0-only

//! Expected Layouts dump tool
//!
//! Prints the expected keyboard pages of the registered locales as JSON, for
//! test harnesses that are not written in Rust.

use clap::Parser;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

use expected_layouts::app_settings::DEFAULT_LOG_DIRECTIVE;
use expected_layouts::config::DumpConfig;
use expected_layouts::layout::registered_locales;
use expected_layouts::{ElementId, ExpectedLayout, FormFactor, Locale, load_layout};

/// Dumps expected on-screen keyboard layouts as JSON
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Locale to dump (repeatable, e.g. `--locale de_DE`)
    #[arg(short, long = "locale", value_name = "LOCALE")]
    locales: Vec<Locale>,

    /// Dump tablet pages only
    #[arg(long, conflicts_with = "phone")]
    tablet: bool,

    /// Dump phone pages only
    #[arg(long)]
    phone: bool,

    /// Page to dump (repeatable, e.g. `--element symbols`)
    #[arg(short, long = "element", value_name = "ELEMENT")]
    elements: Vec<ElementId>,

    /// JSON file selecting locales, form factors and elements
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,

    /// List the registered locales and exit
    #[arg(long)]
    list: bool,
}

/// One page of the dump.
#[derive(Serialize)]
struct DumpEntry<'a> {
    locale: &'a Locale,
    form_factor: FormFactor,
    element: ElementId,
    layout: ExpectedLayout,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging; stdout carries the JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(DEFAULT_LOG_DIRECTIVE.parse()?),
        )
        .init();

    let cli = Cli::parse();

    if cli.list {
        for locale in registered_locales() {
            println!("{}", locale);
        }
        return Ok(());
    }

    let config = resolve_config(cli)?;
    let entries = dump(&config)?;

    let json = if config.pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };
    println!("{}", json);
    Ok(())
}

/// Applies command-line overrides on top of the configuration file.
fn resolve_config(cli: Cli) -> Result<DumpConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => DumpConfig::load(path)?,
        None => DumpConfig::default(),
    };

    if !cli.locales.is_empty() {
        config.locales = cli.locales;
    }
    if cli.phone {
        config.form_factors = vec![FormFactor::Phone];
    } else if cli.tablet {
        config.form_factors = vec![FormFactor::Tablet];
    }
    if !cli.elements.is_empty() {
        config.elements = cli.elements;
    }
    config.pretty |= cli.pretty;

    config.validate()?;
    Ok(config)
}

/// Builds every requested page, skipping pages the locale does not have.
fn dump(config: &DumpConfig) -> Result<Vec<DumpEntry<'_>>, Box<dyn std::error::Error>> {
    let mut layouts = HashMap::new();
    for locale in &config.locales {
        layouts.insert(locale, load_layout(locale)?);
    }

    let mut entries = Vec::new();
    for (locale, form_factor, element) in config.requests() {
        let Some(layout) = layouts.get(locale) else {
            continue;
        };
        match layout.layout(form_factor.is_phone(), element) {
            Some(page) => entries.push(DumpEntry {
                locale,
                form_factor,
                element,
                layout: page,
            }),
            None => tracing::debug!("{} has no {} page on {:?}", locale, element, form_factor),
        }
    }
    tracing::info!("Dumped {} page(s)", entries.len());
    Ok(entries)
}
