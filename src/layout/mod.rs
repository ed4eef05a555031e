// SPDX-License-Identifier: GPL-3.0-only

//! Locale layouts: definitions, customization and page composition.
//!
//! This module turns a locale's letter grid into the complete pages an input
//! method should render, for phones and tablets.
//!
//! # Features
//!
//! - **JSON definitions**: letter grids and locale settings embedded from
//!   `resources/layouts`, or read from a file
//! - **Definition inheritance**: reuse a parent grid with the `inherits` field
//! - **Permissive validation**: soft problems become warnings, broken grids
//!   become errors with field paths and suggestions
//! - **Customizers**: currency, quotation marks, shift keys and accents per
//!   locale
//! - **Symbol tables**: symbols and shifted symbols pages per locale
//! - **Registry**: a static table of the shipped locales
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use expected_layouts::layout::{ElementId, load_layout};
//! use expected_layouts::locale::Locale;
//!
//! let layout = load_layout(&Locale::parse("de_DE")?)?;
//! if let Some(page) = layout.layout(true, ElementId::AlphabetManualShifted) {
//!     println!("{}", page);
//! }
//! ```
//!
//! ## Custom definitions
//!
//! ```json
//! {
//!     "name": "English (UK)",
//!     "locale": "en_GB",
//!     "inherits": "qwerty",
//!     "customizer": { "currency": "dollar" }
//! }
//! ```
//!
//! ```rust,ignore
//! use expected_layouts::layout::{LayoutBase, Symbols, SymbolsShifted, parse_definition_file};
//!
//! let result = parse_definition_file("en_GB.json")?;
//! for warning in &result.warnings {
//!     eprintln!("Warning: {}", warning);
//! }
//! let layout = LayoutBase::from_definition(
//!     &result.layout,
//!     Symbols::factory,
//!     SymbolsShifted::factory,
//! )?;
//! ```
//!
//! Requesting a page a layout does not have (a shifted page of a caseless
//! script, or a phone-pad page) yields `None`, not an error.

// Sub-modules
pub mod base;
pub mod customizer;
pub mod inheritance;
pub mod keys;
pub mod parser;
pub mod registry;
pub mod symbols;
pub mod symbols_shifted;
pub mod types;
pub mod validation;

// Re-export public API - Error handling types
pub use types::{LayoutError, ParseResult, Severity, ValidationIssue};

// Re-export public API - Parser functions
pub use parser::{load_embedded_definition, parse_definition_file, parse_definition_from_string};

// Re-export public API - Composition
pub use base::{AlphabetGrid, LayoutBase};
pub use customizer::{AngleQuoteOrder, CurrencyZone, LayoutCustomizer, QuoteOrder};
pub use registry::{load_all_layouts, load_layout, registered_locales};
pub use symbols::{Symbols, SymbolsFactory, SymbolsTable};
pub use symbols_shifted::SymbolsShifted;
pub use types::{CustomizerSpec, ElementId, FormFactor, KeySpec, LayoutDefinition};

// ============================================================================
// Public API Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expected::key::key_with_more;
    use crate::layout::keys::{DELETE_KEY, SHIFTED_SHIFT_KEY};
    use crate::layout::symbols::{CURRENCY_EURO, DOUBLE_QUOTES_R9L};
    use crate::locale::Locale;

    fn load(tag: &str) -> LayoutBase {
        load_layout(&Locale::parse(tag).unwrap()).unwrap()
    }

    /// Test 1: German phone pages
    #[test]
    fn test_german_layout() {
        let german = load("de_DE");

        let alphabet = german.layout(true, ElementId::Alphabet).unwrap();
        assert_eq!(alphabet.shape(), vec![11, 11, 9, 5]);
        assert!(alphabet.row(1).unwrap()[5].has_label("z"));
        assert_eq!(alphabet.row(3).unwrap()[8], DELETE_KEY.clone());

        let symbols = german.layout(true, ElementId::Symbols).unwrap();
        assert_eq!(symbols.row(2).unwrap()[2], CURRENCY_EURO.clone());

        let shifted = german.layout(true, ElementId::AlphabetAutomaticShifted).unwrap();
        assert!(shifted.row(1).unwrap()[10].has_label("Ü"));
        assert!(shifted.contains(&SHIFTED_SHIFT_KEY));
    }

    /// Test 2: Sharp s takes its full capital form on shifted pages
    #[test]
    fn test_english_sharp_s() {
        let english = load("en_US");

        let shifted = english.layout(true, ElementId::AlphabetShiftLocked).unwrap();
        assert_eq!(shifted.row(2).unwrap()[1], key_with_more("S", &["SS"]));

        let german = load("de_DE").layout(false, ElementId::AlphabetManualShifted).unwrap();
        let s_key = &german.row(2).unwrap()[1];
        assert!(s_key.more_keys().iter().any(|k| k.has_label("SS")));
        assert!(!s_key.more_keys().iter().any(|k| k.has_label("ß")));
    }

    /// Test 3: Turkish dotted and dotless i
    #[test]
    fn test_turkish_shifted() {
        let turkish = load("tr_TR");

        let shifted = turkish.layout(false, ElementId::AlphabetManualShifted).unwrap();
        assert!(shifted.row(1).unwrap()[7].has_label("I"));
        assert!(shifted.row(2).unwrap()[10].has_label("\u{0130}"));
    }

    /// Test 4: Spanish extra punctuation
    #[test]
    fn test_spanish_punctuation() {
        let spanish = load("es_ES");

        let alphabet = spanish.layout(true, ElementId::Alphabet).unwrap();
        let period = &alphabet.row(4).unwrap()[3];
        assert!(period.has_label("."));
        assert_eq!(period.more_keys().len(), 18);
        assert!(alphabet.row(2).unwrap()[9].has_label("ñ"));
    }

    /// Test 5: Non-letter keys survive upper-casing
    #[test]
    fn test_french_apostrophe() {
        let french = load("fr_FR");

        let alphabet = french.layout(true, ElementId::Alphabet).unwrap();
        let shifted = french.layout(true, ElementId::AlphabetManualShifted).unwrap();
        assert_eq!(alphabet.row(3).unwrap()[7], shifted.row(3).unwrap()[7]);
        assert!(shifted.row(3).unwrap()[7].has_label("'"));
        assert!(shifted.row(2).unwrap()[0].has_label("Q"));
    }

    /// Test 6: Dutch quote order reaches the symbols page
    #[test]
    fn test_dutch_quotes() {
        let dutch = load("nl_NL");

        let symbols = dutch.layout(false, ElementId::Symbols).unwrap();
        let double_quote = symbols
            .rows()
            .iter()
            .flatten()
            .find(|k| k.has_label("\""))
            .unwrap();
        assert_eq!(&double_quote.more_keys()[..3], DOUBLE_QUOTES_R9L.as_slice());
    }

    /// Test 7: Custom caseless definition through the public API
    #[test]
    fn test_caseless_definition() {
        let json = r#"{
            "name": "Abjad",
            "locale": "ar",
            "caseless": true,
            "phone_rows": [
                ["ض", "ص", "ث", "ق"],
                ["ش", "س", "ي", "ب"],
                ["ئ", "ء", "ؤ", "ر"]
            ],
            "customizer": {"has_shift_key": false}
        }"#;

        let result = parse_definition_from_string(json).unwrap();
        assert!(!result.has_warnings());
        let layout =
            LayoutBase::from_definition(&result.layout, Symbols::factory, SymbolsShifted::factory)
                .unwrap();

        assert_eq!(layout.layout(true, ElementId::AlphabetManualShifted), None);
        let alphabet = layout.layout(true, ElementId::Alphabet).unwrap();
        assert_eq!(alphabet.shape(), vec![4, 4, 5, 5]);
    }

    /// Test 8: Layouts serialize as nested arrays
    #[test]
    fn test_layout_serializes_as_rows() {
        let page = load("en_US").layout(true, ElementId::Alphabet).unwrap();

        let json = serde_json::to_value(&page).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0][0]["visual"]["label"], "q");
        assert_eq!(rows[3][2]["output"]["code"], 32);
    }
}
