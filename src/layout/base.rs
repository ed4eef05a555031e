// SPDX-License-Identifier: GPL-3.0-only

//! Composition of complete keyboard pages.
//!
//! A [`LayoutBase`] pairs a locale's letter grid with its customizer and
//! symbol tables. [`LayoutBase::layout`] answers "what should the keyboard
//! for this form factor and page look like":
//!
//! - symbols pages come straight from the symbol tables;
//! - the alphabet page is the letter grid with accents and function keys;
//! - shifted alphabet pages are the upper-cased grid with the shift key
//!   drawn as shifted.
//!
//! A `LayoutBase` is immutable once built and can be shared across threads.

use crate::app_settings::{SHIFT_ROW, SPACEBAR_ROW};
use crate::expected::{ExpectedKey, ExpectedKeyboardBuilder, ExpectedLayout};
use crate::layout::customizer::LayoutCustomizer;
use crate::layout::keys::{
    DELETE_KEY, EMOJI_KEY, ENTER_KEY, ENTER_WITH_EMOJI_KEY, SETTINGS_KEY, SHIFTED_SHIFT_KEY,
    SHIFT_KEY, SPACEBAR,
};
use crate::layout::symbols::{SymbolsFactory, SymbolsTable};
use crate::layout::types::{
    ElementId, LayoutDefinition, LayoutError, Severity, ValidationIssue, grid_to_rows,
};
use crate::layout::validation::validate_grid;
use crate::locale::Locale;

/// Letter rows of a locale, without function keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlphabetGrid {
    phone: Vec<Vec<ExpectedKey>>,
    tablet: Option<Vec<Vec<ExpectedKey>>>,
    caseless: bool,
}

impl AlphabetGrid {
    /// A grid used for both form factors.
    pub fn new(rows: Vec<Vec<ExpectedKey>>) -> Self {
        Self {
            phone: rows,
            tablet: None,
            caseless: false,
        }
    }

    /// Uses `rows` on tablets instead of the phone rows.
    pub fn with_tablet_rows(mut self, rows: Vec<Vec<ExpectedKey>>) -> Self {
        self.tablet = Some(rows);
        self
    }

    /// Marks the script as having no letter case.
    pub fn caseless(mut self) -> Self {
        self.caseless = true;
        self
    }

    pub fn from_definition(definition: &LayoutDefinition) -> Self {
        Self {
            phone: grid_to_rows(&definition.phone_rows),
            tablet: definition.tablet_rows.as_ref().map(grid_to_rows),
            caseless: definition.caseless.unwrap_or(false),
        }
    }

    pub fn is_caseless(&self) -> bool {
        self.caseless
    }

    pub fn has_tablet_rows(&self) -> bool {
        self.tablet.is_some()
    }

    pub fn rows(&self, is_phone: bool) -> &[Vec<ExpectedKey>] {
        match (&self.tablet, is_phone) {
            (Some(tablet), false) => tablet,
            _ => &self.phone,
        }
    }
}

/// Expected keyboards of one locale.
#[derive(Debug)]
pub struct LayoutBase {
    name: String,
    customizer: LayoutCustomizer,
    grid: AlphabetGrid,
    symbols: Box<dyn SymbolsTable>,
    symbols_shifted: Box<dyn SymbolsTable>,
}

impl LayoutBase {
    /// Builds a layout and its symbol tables.
    ///
    /// The grid is validated against the customizer's accented letters and
    /// both tables are built here, so a misconfigured layout fails now rather
    /// than when a page is requested.
    pub fn new(
        name: impl Into<String>,
        customizer: LayoutCustomizer,
        grid: AlphabetGrid,
        symbols: SymbolsFactory,
        symbols_shifted: SymbolsFactory,
    ) -> Result<Self, LayoutError> {
        let name = name.into();

        let warnings = validate_grid(&grid, &customizer.accented_letter_labels())
            .map_err(|e| e.with_path(&name))?;
        for warning in &warnings {
            tracing::debug!("Layout '{}': {}", name, warning);
        }

        let symbols = symbols(&customizer)?;
        let symbols_shifted = symbols_shifted(&customizer)?;

        tracing::debug!("Built layout '{}' for {}", name, customizer.locale());
        Ok(Self {
            name,
            customizer,
            grid,
            symbols,
            symbols_shifted,
        })
    }

    /// Builds a layout from a resolved definition. The definition must name
    /// its locale.
    pub fn from_definition(
        definition: &LayoutDefinition,
        symbols: SymbolsFactory,
        symbols_shifted: SymbolsFactory,
    ) -> Result<Self, LayoutError> {
        let locale = definition.locale.clone().ok_or_else(|| {
            LayoutError::validation_error(vec![
                ValidationIssue::new(Severity::Error, "Layout has no locale", "locale")
                    .with_suggestion("Add a locale such as \"en_US\""),
            ])
            .with_path(&definition.name)
        })?;

        Self::new(
            definition.name.clone(),
            LayoutCustomizer::from_spec(locale, &definition.customizer),
            AlphabetGrid::from_definition(definition),
            symbols,
            symbols_shifted,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locale(&self) -> &Locale {
        self.customizer.locale()
    }

    pub fn customizer(&self) -> &LayoutCustomizer {
        &self.customizer
    }

    pub fn grid(&self) -> &AlphabetGrid {
        &self.grid
    }

    /// Letter grid with accents, without function keys.
    pub fn common_alphabet_layout(&self, is_phone: bool) -> ExpectedLayout {
        let mut builder = ExpectedKeyboardBuilder::from_rows(self.grid.rows(is_phone).to_vec());
        self.customizer.set_accented_letters(&mut builder);
        builder.build()
    }

    /// Upper-cased letter grid for a shifted page, without function keys.
    ///
    /// `None` when the page has no shifted variant: `element` is not a
    /// shifted alphabet, or the script has no letter case.
    pub fn common_alphabet_shift_layout(
        &self,
        is_phone: bool,
        element: ElementId,
    ) -> Option<ExpectedLayout> {
        if !element.is_alphabet_shifted() || self.grid.is_caseless() {
            return None;
        }
        let mut builder = ExpectedKeyboardBuilder::from_layout(&self.common_alphabet_layout(is_phone));
        builder.to_upper_case(self.locale());
        Some(builder.build())
    }

    /// The complete page for `element`, or `None` when this layout has no
    /// such page.
    pub fn layout(&self, is_phone: bool, element: ElementId) -> Option<ExpectedLayout> {
        if element.is_symbols() {
            let table = match element {
                ElementId::SymbolsShifted => &self.symbols_shifted,
                _ => &self.symbols,
            };
            return Some(table.layout(is_phone));
        }

        let common = match element {
            ElementId::Alphabet => self.common_alphabet_layout(is_phone),
            _ => match self.common_alphabet_shift_layout(is_phone, element) {
                Some(common) => common,
                None => {
                    tracing::debug!("Layout '{}' has no {} page", self.name, element);
                    return None;
                }
            },
        };

        let mut builder = ExpectedKeyboardBuilder::from_layout(&common);
        self.convert_common_layout_to_keyboard(&mut builder, is_phone);
        if element != ElementId::Alphabet {
            builder.replace_keys_of_all(&SHIFT_KEY, &SHIFTED_SHIFT_KEY);
        }
        Some(builder.build())
    }

    /// Adds the spacebar row and the function keys around the letters.
    fn convert_common_layout_to_keyboard(
        &self,
        builder: &mut ExpectedKeyboardBuilder,
        is_phone: bool,
    ) {
        let customizer = &self.customizer;
        let spacebar_row = customizer
            .keys_left_of_spacebar(is_phone)
            .into_iter()
            .chain([SPACEBAR.clone()])
            .chain(customizer.keys_right_of_spacebar(is_phone));
        builder.set_keys_of_row(SPACEBAR_ROW, spacebar_row);

        if is_phone {
            builder
                .add_keys_on_the_right_of_row(SHIFT_ROW, [DELETE_KEY.clone()])
                .add_keys_on_the_left_of_row(SPACEBAR_ROW, [customizer.symbols_key()])
                .add_keys_on_the_right_of_row(SPACEBAR_ROW, [ENTER_WITH_EMOJI_KEY.clone()]);
        } else {
            builder
                .add_keys_on_the_right_of_row(SHIFT_ROW - 2, [DELETE_KEY.clone()])
                .add_keys_on_the_right_of_row(SHIFT_ROW - 1, [ENTER_KEY.clone()])
                .add_keys_on_the_left_of_row(
                    SPACEBAR_ROW,
                    [customizer.symbols_key(), SETTINGS_KEY.clone()],
                )
                .add_keys_on_the_right_of_row(SPACEBAR_ROW, [EMOJI_KEY.clone()]);
        }

        builder
            .add_keys_on_the_left_of_row(SHIFT_ROW, customizer.left_shift_keys(is_phone))
            .add_keys_on_the_right_of_row(SHIFT_ROW, customizer.right_shift_keys(is_phone));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expected::key::{key, key_with_more, keys};
    use crate::layout::symbols::Symbols;
    use crate::layout::symbols_shifted::SymbolsShifted;

    fn qwerty_rows() -> Vec<Vec<ExpectedKey>> {
        vec![
            keys(&["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"]),
            keys(&["a", "s", "d", "f", "g", "h", "j", "k", "l"]),
            keys(&["z", "x", "c", "v", "b", "n", "m"]),
        ]
    }

    fn locale(tag: &str) -> Locale {
        Locale::parse(tag).unwrap()
    }

    fn build(customizer: LayoutCustomizer, grid: AlphabetGrid) -> LayoutBase {
        LayoutBase::new("test", customizer, grid, Symbols::factory, SymbolsShifted::factory)
            .unwrap()
    }

    fn english() -> LayoutBase {
        build(
            LayoutCustomizer::new(locale("en_US")).with_accented_letters("e", &["é", "è"]),
            AlphabetGrid::new(qwerty_rows()),
        )
    }

    fn failing_factory(_: &LayoutCustomizer) -> Result<Box<dyn SymbolsTable>, LayoutError> {
        Err(LayoutError::key_not_found("CURRENCY"))
    }

    // ========================================================================
    // Alphabet pages
    // ========================================================================

    /// Test 1: Phone alphabet gets function keys in the right rows
    #[test]
    fn test_phone_alphabet() {
        let layout = english().layout(true, ElementId::Alphabet).unwrap();

        assert_eq!(layout.shape(), vec![10, 9, 9, 5]);
        let row3 = layout.row(3).unwrap();
        assert_eq!(row3[0], SHIFT_KEY.clone());
        assert_eq!(row3[8], DELETE_KEY.clone());
        let row4 = layout.row(4).unwrap();
        assert!(row4[0].has_label("?123"));
        assert!(row4[1].has_label(","));
        assert_eq!(row4[2], SPACEBAR.clone());
        assert!(row4[3].has_label("."));
        assert_eq!(row4[4], ENTER_WITH_EMOJI_KEY.clone());
    }

    /// Test 2: Tablet alphabet gets function keys in the right rows
    #[test]
    fn test_tablet_alphabet() {
        let layout = english().layout(false, ElementId::Alphabet).unwrap();

        assert_eq!(layout.shape(), vec![11, 10, 11, 7]);
        assert_eq!(layout.row(1).unwrap()[10], DELETE_KEY.clone());
        assert_eq!(layout.row(2).unwrap()[9], ENTER_KEY.clone());
        let row3 = layout.row(3).unwrap();
        assert_eq!(row3[0], SHIFT_KEY.clone());
        assert!(row3[8].has_label("!"));
        assert!(row3[9].has_label("?"));
        assert_eq!(row3[10], SHIFT_KEY.clone());
        let row4 = layout.row(4).unwrap();
        assert_eq!(row4[1], SETTINGS_KEY.clone());
        assert!(row4[2].has_label("/"));
        assert_eq!(row4[6], EMOJI_KEY.clone());
    }

    /// Test 3: Accents are attached on the alphabet page
    #[test]
    fn test_alphabet_accents() {
        let layout = english().layout(true, ElementId::Alphabet).unwrap();
        assert_eq!(layout.row(1).unwrap()[2], key_with_more("e", &["é", "è"]));
    }

    // ========================================================================
    // Shifted pages
    // ========================================================================

    /// Test 4: Shifted pages are upper-cased and use the shifted shift key
    #[test]
    fn test_shifted_alphabet() {
        let base = english();
        let unshifted = base.layout(true, ElementId::Alphabet).unwrap();

        for element in ElementId::ALPHABET_SHIFTED {
            let layout = base.layout(true, element).unwrap();
            assert_eq!(layout.shape(), unshifted.shape());
            assert_eq!(layout.row(1).unwrap()[0], key("Q"));
            assert_eq!(layout.row(1).unwrap()[2], key_with_more("E", &["É", "È"]));
            assert_eq!(layout.count_of(&SHIFT_KEY), 0);
            assert_eq!(layout.count_of(&SHIFTED_SHIFT_KEY), 1);
        }
        assert_eq!(unshifted.count_of(&SHIFTED_SHIFT_KEY), 0);
    }

    /// Test 5: Tablet shifted pages replace both shift keys
    #[test]
    fn test_tablet_shifted_replaces_both_shift_keys() {
        let layout = english()
            .layout(false, ElementId::AlphabetShiftLocked)
            .unwrap();
        assert_eq!(layout.count_of(&SHIFTED_SHIFT_KEY), 2);
        assert_eq!(layout.count_of(&SHIFT_KEY), 0);
    }

    /// Test 6: Upper-casing follows the locale
    #[test]
    fn test_turkish_shifted() {
        let base = build(
            LayoutCustomizer::new(locale("tr_TR")),
            AlphabetGrid::new(vec![keys(&["ı", "i"]), keys(&["a"]), keys(&["z"])]),
        );

        let layout = base.layout(true, ElementId::AlphabetManualShifted).unwrap();
        assert_eq!(&layout.row(1).unwrap()[..2], keys(&["I", "İ"]).as_slice());
    }

    /// Test 7: Caseless scripts have no shifted pages
    #[test]
    fn test_caseless_has_no_shifted_pages() {
        let base = build(
            LayoutCustomizer::new(locale("en_US")).without_shift_key(),
            AlphabetGrid::new(qwerty_rows()).caseless(),
        );

        for element in ElementId::ALPHABET_SHIFTED {
            assert_eq!(base.layout(true, element), None);
            assert_eq!(base.common_alphabet_shift_layout(false, element), None);
        }
        let alphabet = base.layout(true, ElementId::Alphabet).unwrap();
        assert_eq!(alphabet.count_of(&SHIFT_KEY), 0);
        assert_eq!(alphabet.shape(), vec![10, 9, 8, 5]);
    }

    /// Test 8: Pages this layout does not define are absent
    #[test]
    fn test_undefined_pages_are_absent() {
        let base = english();
        for element in [ElementId::Phone, ElementId::PhoneSymbols, ElementId::Number] {
            assert_eq!(base.layout(true, element), None);
            assert_eq!(base.layout(false, element), None);
        }
    }

    // ========================================================================
    // Symbols pages
    // ========================================================================

    /// Test 9: Symbols pages are the raw table output
    #[test]
    fn test_symbols_pages_pass_through() {
        let base = english();
        let customizer = base.customizer().clone();
        let symbols = Symbols::new(&customizer).unwrap();
        let shifted = SymbolsShifted::new(&customizer).unwrap();

        for is_phone in [true, false] {
            assert_eq!(base.layout(is_phone, ElementId::Symbols), Some(symbols.layout(is_phone)));
            assert_eq!(
                base.layout(is_phone, ElementId::SymbolsShifted),
                Some(shifted.layout(is_phone))
            );
        }
    }

    // ========================================================================
    // Grid handling and construction
    // ========================================================================

    /// Test 10: A fourth grid row is replaced by the spacebar row
    #[test]
    fn test_fourth_row_replaced() {
        let mut rows = qwerty_rows();
        rows.push(keys(&["!", "?"]));
        let base = build(LayoutCustomizer::new(locale("en_US")), AlphabetGrid::new(rows));

        let layout = base.layout(true, ElementId::Alphabet).unwrap();
        assert_eq!(layout.row_count(), 4);
        assert!(!layout.contains(&key("!")));
    }

    /// Test 11: Tablet rows are used on tablets only
    #[test]
    fn test_tablet_rows() {
        let mut tablet = qwerty_rows();
        tablet[2].push(key("-"));
        let base = build(
            LayoutCustomizer::new(locale("en_US")),
            AlphabetGrid::new(qwerty_rows()).with_tablet_rows(tablet),
        );

        assert_eq!(base.common_alphabet_layout(true).shape(), vec![10, 9, 7]);
        assert_eq!(base.common_alphabet_layout(false).shape(), vec![10, 9, 8]);
    }

    /// Test 12: Invalid grids and failing tables are construction errors
    #[test]
    fn test_construction_errors() {
        let err = LayoutBase::new(
            "broken",
            LayoutCustomizer::new(locale("en_US")),
            AlphabetGrid::new(vec![Vec::new()]),
            Symbols::factory,
            SymbolsShifted::factory,
        )
        .unwrap_err();
        match err {
            LayoutError::ValidationError { file_path, .. } => {
                assert_eq!(file_path.as_deref(), Some("broken"))
            }
            other => panic!("Expected ValidationError, got {}", other),
        }

        let err = LayoutBase::new(
            "broken",
            LayoutCustomizer::new(locale("en_US")),
            AlphabetGrid::new(qwerty_rows()),
            Symbols::factory,
            failing_factory,
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::KeyNotFound { .. }));
    }

    /// Test 13: Definitions without a locale are rejected
    #[test]
    fn test_from_definition_requires_locale() {
        let definition = LayoutDefinition {
            name: "nameless".to_string(),
            ..LayoutDefinition::default()
        };

        let err = LayoutBase::from_definition(&definition, Symbols::factory, SymbolsShifted::factory)
            .unwrap_err();
        assert!(format!("{}", err).contains("Layout has no locale"));
    }

    /// Test 14: Pages are deterministic and can be built from many threads
    #[test]
    fn test_concurrent_requests() {
        let base = english();
        let expected: Vec<Option<ExpectedLayout>> = ElementId::ALL
            .iter()
            .map(|element| base.layout(true, *element))
            .collect();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for (element, expected) in ElementId::ALL.iter().zip(&expected) {
                        assert_eq!(&base.layout(true, *element), expected);
                    }
                });
            }
        });
    }
}
