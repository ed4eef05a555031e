// SPDX-License-Identifier: GPL-3.0-only

//! Static registry of the shipped locale layouts.
//!
//! Each entry pairs a locale with its embedded definition and the symbol
//! table factories to build it with.

use crate::layout::base::LayoutBase;
use crate::layout::parser::load_embedded_definition;
use crate::layout::symbols::{Symbols, SymbolsFactory};
use crate::layout::symbols_shifted::SymbolsShifted;
use crate::layout::types::{LayoutError, Severity, ValidationIssue};
use crate::layout::validation::find_similar_name;
use crate::locale::Locale;

/// A registered locale layout.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    /// Locale tag, e.g. `de_DE`
    pub locale: &'static str,
    /// Embedded definition name
    pub resource: &'static str,
    pub symbols: SymbolsFactory,
    pub symbols_shifted: SymbolsFactory,
}

static REGISTRATIONS: &[Registration] = &[
    Registration {
        locale: "en_US",
        resource: "en_US",
        symbols: Symbols::factory,
        symbols_shifted: SymbolsShifted::factory,
    },
    Registration {
        locale: "nl_NL",
        resource: "nl_NL",
        symbols: Symbols::factory,
        symbols_shifted: SymbolsShifted::factory,
    },
    Registration {
        locale: "de_DE",
        resource: "de_DE",
        symbols: Symbols::factory,
        symbols_shifted: SymbolsShifted::factory,
    },
    Registration {
        locale: "fr_FR",
        resource: "fr_FR",
        symbols: Symbols::factory,
        symbols_shifted: SymbolsShifted::factory,
    },
    Registration {
        locale: "es_ES",
        resource: "es_ES",
        symbols: Symbols::factory,
        symbols_shifted: SymbolsShifted::factory,
    },
    Registration {
        locale: "tr_TR",
        resource: "tr_TR",
        symbols: Symbols::factory,
        symbols_shifted: SymbolsShifted::factory,
    },
];

/// Tags of every registered locale, in registration order.
pub fn registered_locales() -> Vec<&'static str> {
    REGISTRATIONS.iter().map(|entry| entry.locale).collect()
}

/// Looks up the registration for `locale`.
pub fn find_registration(locale: &Locale) -> Result<&'static Registration, LayoutError> {
    let tag = locale.to_string();
    REGISTRATIONS
        .iter()
        .find(|entry| entry.locale == tag)
        .ok_or_else(|| {
            let suggestion = find_similar_name(&tag, registered_locales())
                .map(|similar| format!("Did you mean '{}'?", similar))
                .or_else(|| {
                    Some(format!(
                        "Registered locales: {}",
                        registered_locales().join(", ")
                    ))
                });
            LayoutError::unknown_locale(tag, suggestion)
        })
}

/// Loads the layout registered for `locale`.
pub fn load_layout(locale: &Locale) -> Result<LayoutBase, LayoutError> {
    let entry = find_registration(locale)?;

    let result = load_embedded_definition(entry.resource)?;
    for warning in &result.warnings {
        tracing::warn!("Layout definition '{}': {}", entry.resource, warning);
    }
    let definition = result.into_layout();

    if definition.locale.as_ref() != Some(locale) {
        let found = definition
            .locale
            .as_ref()
            .map_or_else(|| "none".to_string(), Locale::to_string);
        return Err(LayoutError::validation_error(vec![
            ValidationIssue::new(
                Severity::Error,
                format!("Definition is for locale {}, registered as {}", found, locale),
                "locale",
            )
            .with_suggestion(format!("Set \"locale\": \"{}\"", locale)),
        ])
        .with_path(entry.resource));
    }

    let layout = LayoutBase::from_definition(&definition, entry.symbols, entry.symbols_shifted)?;
    tracing::info!("Loaded layout '{}' for {}", layout.name(), locale);
    Ok(layout)
}

/// Loads every registered layout, failing on the first broken one.
pub fn load_all_layouts() -> Result<Vec<LayoutBase>, LayoutError> {
    REGISTRATIONS
        .iter()
        .map(|entry| load_layout(&Locale::parse(entry.locale)?))
        .collect()
}
