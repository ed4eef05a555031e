// SPDX-License-Identifier: GPL-3.0-only

//! Expected Layouts - reference on-screen keyboards for input method tests
//!
//! This crate describes, for each supported locale and form factor, exactly
//! which keys an on-screen keyboard should show on every page. A test renders
//! the input method's keyboard and compares it against the layout built here.
//!
//! # Architecture
//!
//! Composition runs in three stages:
//!
//! 1. **Definition**: a JSON letter grid with locale settings, embedded at
//!    compile time and resolved through `inherits`.
//! 2. **Customization**: a [`layout::LayoutCustomizer`] decides the locale's
//!    currency, quotation marks, shift keys and accented letters.
//! 3. **Composition**: [`layout::LayoutBase`] adds the function keys around
//!    the grid and upper-cases it for the shifted pages.
//!
//! # Modules
//!
//! - `app_settings`: Row positions, limits and resource paths
//! - `config`: Selection of layouts for the dump tool
//! - `expected`: Expected key and layout values with their builder
//! - `layout`: Definitions, customizers, symbol tables and the registry
//! - `locale`: Locale tags and locale-aware casing rules

pub mod app_settings;
pub mod config;
pub mod expected;
pub mod layout;
pub mod locale;

pub use crate::expected::{ExpectedKey, ExpectedKeyboardBuilder, ExpectedLayout};
pub use crate::layout::{ElementId, FormFactor, LayoutBase, LayoutError, load_layout};
pub use crate::locale::Locale;

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod integration_tests {
    use crate::app_settings::{SHIFT_ROW, SPACEBAR_ROW};
    use crate::config::DumpConfig;
    use crate::layout::keys::{SHIFT_KEY, SHIFTED_SHIFT_KEY, SPACEBAR};
    use crate::layout::{ElementId, FormFactor, load_all_layouts};

    /// Integration Test 1: Every page of every registered locale
    ///
    /// Alphabet and symbols pages are always present; phone-pad pages are
    /// never produced.
    #[test]
    fn test_every_page_of_every_locale() {
        let config = DumpConfig::default();
        let layouts = load_all_layouts().unwrap();

        for layout in &layouts {
            for form_factor in &config.form_factors {
                for element in &config.elements {
                    let page = layout.layout(form_factor.is_phone(), *element);
                    match element {
                        ElementId::Phone | ElementId::PhoneSymbols | ElementId::Number => {
                            assert!(page.is_none(), "{} {}", layout.locale(), element);
                        }
                        _ => {
                            let page = page.unwrap_or_else(|| {
                                panic!("{} {} missing", layout.locale(), element)
                            });
                            assert!(page.row_count() >= SPACEBAR_ROW);
                        }
                    }
                }
            }
        }
    }

    /// Integration Test 2: Spacebar sits on the bottom row of every page
    #[test]
    fn test_spacebar_on_bottom_row() {
        for layout in load_all_layouts().unwrap() {
            for element in [ElementId::Alphabet, ElementId::Symbols, ElementId::SymbolsShifted] {
                let page = layout.layout(true, element).unwrap();
                assert!(
                    page.row(SPACEBAR_ROW).unwrap().contains(&SPACEBAR),
                    "{} {} has no spacebar",
                    layout.locale(),
                    element
                );
                assert_eq!(page.count_of(&SPACEBAR), 1);
            }
        }
    }

    /// Integration Test 3: Shift key state follows the page
    ///
    /// The unshifted alphabet shows the plain shift key; every shifted page
    /// shows the shifted one instead.
    #[test]
    fn test_shift_key_state() {
        for layout in load_all_layouts().unwrap() {
            for form_factor in [FormFactor::Phone, FormFactor::Tablet] {
                let is_phone = form_factor.is_phone();
                let alphabet = layout.layout(is_phone, ElementId::Alphabet).unwrap();
                assert!(alphabet.row(SHIFT_ROW).unwrap().contains(&SHIFT_KEY));
                assert!(!alphabet.contains(&SHIFTED_SHIFT_KEY));

                for element in ElementId::ALPHABET_SHIFTED {
                    let shifted = layout.layout(is_phone, element).unwrap();
                    assert!(!shifted.contains(&SHIFT_KEY), "{} {}", layout.locale(), element);
                    assert!(shifted.contains(&SHIFTED_SHIFT_KEY));
                }
            }
        }
    }

    /// Integration Test 4: Shifted variants agree with each other
    #[test]
    fn test_shifted_variants_identical() {
        for layout in load_all_layouts().unwrap() {
            let manual = layout.layout(false, ElementId::AlphabetManualShifted);
            for element in ElementId::ALPHABET_SHIFTED {
                assert_eq!(layout.layout(false, element), manual);
            }
        }
    }

    /// Integration Test 5: Pages keep their shape when shifted
    #[test]
    fn test_shifted_shape_matches_alphabet() {
        for layout in load_all_layouts().unwrap() {
            for is_phone in [true, false] {
                let alphabet = layout.layout(is_phone, ElementId::Alphabet).unwrap();
                let shifted = layout
                    .layout(is_phone, ElementId::AlphabetShiftLocked)
                    .unwrap();
                assert_eq!(alphabet.shape(), shifted.shape());
                assert_eq!(alphabet.key_count(), shifted.key_count());
            }
        }
    }

    /// Integration Test 6: Layouts are shareable across threads
    #[test]
    fn test_layouts_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<crate::LayoutBase>();
        assert_send_sync::<crate::ExpectedLayout>();
    }
}
