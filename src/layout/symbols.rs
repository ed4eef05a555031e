// SPDX-License-Identifier: GPL-3.0-only

//! The symbols page.
//!
//! A symbols table is static data with a few locale-dependent keys: the
//! currency key and the two quote keys. The common grid carries placeholder
//! keys at those positions, which the constructor replaces with the
//! customizer's choices. Both form factors are computed once, at
//! construction.

use std::fmt;
use std::sync::LazyLock;

use crate::expected::key::{key, key_with_more, keys};
use crate::expected::{ExpectedKey, ExpectedKeyboardBuilder, ExpectedLayout};
use crate::layout::customizer::LayoutCustomizer;
use crate::layout::keys::{
    DELETE_KEY, EMOJI_KEY, ENTER_KEY, ENTER_WITH_EMOJI_KEY, SETTINGS_KEY, SPACEBAR,
};
use crate::layout::types::LayoutError;

/// A symbols page for both form factors.
pub trait SymbolsTable: fmt::Debug + Send + Sync {
    /// The finished page, function keys included.
    fn layout(&self, is_phone: bool) -> ExpectedLayout;
}

/// Builds a symbols table for a customizer. Registered per locale in place of
/// looking the table up by name at run time.
pub type SymbolsFactory = fn(&LayoutCustomizer) -> Result<Box<dyn SymbolsTable>, LayoutError>;

// Placeholder labels in the common grids
pub(crate) const CURRENCY: &str = "CURRENCY";
pub(crate) const DOUBLE_QUOTE: &str = "DOUBLE_QUOTE";
pub(crate) const SINGLE_QUOTE: &str = "SINGLE_QUOTE";

// U+00A2: "¢" CENT SIGN
// U+00A3: "£" POUND SIGN
// U+00A5: "¥" YEN SIGN
// U+20AC: "€" EURO SIGN
// U+20B1: "₱" PESO SIGN
pub const DOLLAR_SIGN: &str = "$";
pub const CENT_SIGN: &str = "\u{00A2}";
pub const POUND_SIGN: &str = "\u{00A3}";
pub const YEN_SIGN: &str = "\u{00A5}";
pub const EURO_SIGN: &str = "\u{20AC}";
pub const PESO_SIGN: &str = "\u{20B1}";

pub static CURRENCY_DOLLAR: LazyLock<ExpectedKey> = LazyLock::new(|| {
    key_with_more(
        DOLLAR_SIGN,
        &[CENT_SIGN, POUND_SIGN, EURO_SIGN, YEN_SIGN, PESO_SIGN],
    )
});

pub static CURRENCY_EURO: LazyLock<ExpectedKey> = LazyLock::new(|| {
    key_with_more(
        EURO_SIGN,
        &[CENT_SIGN, POUND_SIGN, DOLLAR_SIGN, YEN_SIGN, PESO_SIGN],
    )
});

// U+201C: "“" LEFT DOUBLE QUOTATION MARK
// U+201D: "”" RIGHT DOUBLE QUOTATION MARK
// U+201E: "„" DOUBLE LOW-9 QUOTATION MARK
const DQUOTE_LEFT: &str = "\u{201C}";
const DQUOTE_RIGHT: &str = "\u{201D}";
const DQUOTE_LOW9: &str = "\u{201E}";

// U+2018: "‘" LEFT SINGLE QUOTATION MARK
// U+2019: "’" RIGHT SINGLE QUOTATION MARK
// U+201A: "‚" SINGLE LOW-9 QUOTATION MARK
const SQUOTE_LEFT: &str = "\u{2018}";
const SQUOTE_RIGHT: &str = "\u{2019}";
const SQUOTE_LOW9: &str = "\u{201A}";

// U+00AB: "«" LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
// U+00BB: "»" RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
// U+2039: "‹" SINGLE LEFT-POINTING ANGLE QUOTATION MARK
// U+203A: "›" SINGLE RIGHT-POINTING ANGLE QUOTATION MARK
const DAQUOTE_LEFT: &str = "\u{00AB}";
const DAQUOTE_RIGHT: &str = "\u{00BB}";
const SAQUOTE_LEFT: &str = "\u{2039}";
const SAQUOTE_RIGHT: &str = "\u{203A}";

pub static DOUBLE_QUOTES_9LR: LazyLock<Vec<ExpectedKey>> =
    LazyLock::new(|| keys(&[DQUOTE_LOW9, DQUOTE_LEFT, DQUOTE_RIGHT]));
pub static DOUBLE_QUOTES_R9L: LazyLock<Vec<ExpectedKey>> =
    LazyLock::new(|| keys(&[DQUOTE_RIGHT, DQUOTE_LOW9, DQUOTE_LEFT]));
pub static DOUBLE_QUOTES_L9R: LazyLock<Vec<ExpectedKey>> =
    LazyLock::new(|| keys(&[DQUOTE_LEFT, DQUOTE_LOW9, DQUOTE_RIGHT]));
pub static DOUBLE_QUOTES_LR9: LazyLock<Vec<ExpectedKey>> =
    LazyLock::new(|| keys(&[DQUOTE_LEFT, DQUOTE_RIGHT, DQUOTE_LOW9]));

pub static SINGLE_QUOTES_9LR: LazyLock<Vec<ExpectedKey>> =
    LazyLock::new(|| keys(&[SQUOTE_LOW9, SQUOTE_LEFT, SQUOTE_RIGHT]));
pub static SINGLE_QUOTES_R9L: LazyLock<Vec<ExpectedKey>> =
    LazyLock::new(|| keys(&[SQUOTE_RIGHT, SQUOTE_LOW9, SQUOTE_LEFT]));
pub static SINGLE_QUOTES_L9R: LazyLock<Vec<ExpectedKey>> =
    LazyLock::new(|| keys(&[SQUOTE_LEFT, SQUOTE_LOW9, SQUOTE_RIGHT]));
pub static SINGLE_QUOTES_LR9: LazyLock<Vec<ExpectedKey>> =
    LazyLock::new(|| keys(&[SQUOTE_LEFT, SQUOTE_RIGHT, SQUOTE_LOW9]));

pub static DOUBLE_ANGLE_QUOTES_LR: LazyLock<Vec<ExpectedKey>> =
    LazyLock::new(|| keys(&[DAQUOTE_LEFT, DAQUOTE_RIGHT]));
pub static DOUBLE_ANGLE_QUOTES_RL: LazyLock<Vec<ExpectedKey>> =
    LazyLock::new(|| keys(&[DAQUOTE_RIGHT, DAQUOTE_LEFT]));
pub static SINGLE_ANGLE_QUOTES_LR: LazyLock<Vec<ExpectedKey>> =
    LazyLock::new(|| keys(&[SAQUOTE_LEFT, SAQUOTE_RIGHT]));
pub static SINGLE_ANGLE_QUOTES_RL: LazyLock<Vec<ExpectedKey>> =
    LazyLock::new(|| keys(&[SAQUOTE_RIGHT, SAQUOTE_LEFT]));

/// Symbols page without function keys and with placeholder keys.
static COMMON_LAYOUT: LazyLock<ExpectedLayout> = LazyLock::new(|| {
    ExpectedLayout::new(vec![
        vec![
            // U+00B9: "¹" SUPERSCRIPT ONE
            // U+00BD: "½" VULGAR FRACTION ONE HALF
            // U+2153: "⅓" VULGAR FRACTION ONE THIRD
            // U+00BC: "¼" VULGAR FRACTION ONE QUARTER
            // U+215B: "⅛" VULGAR FRACTION ONE EIGHTH
            key_with_more("1", &["\u{00B9}", "\u{00BD}", "\u{2153}", "\u{00BC}", "\u{215B}"]),
            key_with_more("2", &["\u{00B2}", "\u{2154}"]),
            key_with_more("3", &["\u{00B3}", "\u{00BE}", "\u{215C}"]),
            key_with_more("4", &["\u{2074}"]),
            key_with_more("5", &["\u{215D}"]),
            key("6"),
            key_with_more("7", &["\u{215E}"]),
            key("8"),
            key("9"),
            // U+207F: "ⁿ" SUPERSCRIPT LATIN SMALL LETTER N
            // U+2205: "∅" EMPTY SET
            key_with_more("0", &["\u{207F}", "\u{2205}"]),
        ],
        vec![
            key("@"),
            key("#"),
            key(CURRENCY),
            // U+2030: "‰" PER MILLE SIGN
            key_with_more("%", &["\u{2030}"]),
            key("&"),
            // U+2013: "–" EN DASH
            // U+2014: "—" EM DASH
            // U+00B7: "·" MIDDLE DOT
            key_with_more("-", &["_", "\u{2013}", "\u{2014}", "\u{00B7}"]),
            // U+00B1: "±" PLUS-MINUS SIGN
            key_with_more("+", &["\u{00B1}"]),
            key_with_more("(", &["<", "{", "["]),
            key_with_more(")", &[">", "}", "]"]),
        ],
        vec![
            // U+2020: "†" DAGGER
            // U+2021: "‡" DOUBLE DAGGER
            // U+2605: "★" BLACK STAR
            key_with_more("*", &["\u{2020}", "\u{2021}", "\u{2605}"]),
            key(DOUBLE_QUOTE),
            key(SINGLE_QUOTE),
            key(":"),
            key(";"),
            key_with_more("!", &["\u{00A1}"]),
            key_with_more("?", &["\u{00BF}"]),
        ],
        vec![
            key("_"),
            key("/"),
            SPACEBAR.clone(),
            key(","),
            // U+2026: "…" HORIZONTAL ELLIPSIS
            key_with_more(".", &["\u{2026}"]),
        ],
    ])
});

/// The symbols page of a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    phone: ExpectedLayout,
    tablet: ExpectedLayout,
}

impl Symbols {
    /// Computes both form factors. Fails if a placeholder is missing from
    /// the common grid.
    pub fn new(customizer: &LayoutCustomizer) -> Result<Self, LayoutError> {
        let common = Self::common_layout(customizer)?;
        Ok(Self {
            phone: Self::phone_layout(&common, customizer),
            tablet: Self::tablet_layout(&common, customizer),
        })
    }

    /// [`SymbolsFactory`] for this table.
    pub fn factory(customizer: &LayoutCustomizer) -> Result<Box<dyn SymbolsTable>, LayoutError> {
        Ok(Box::new(Self::new(customizer)?))
    }

    fn common_layout(customizer: &LayoutCustomizer) -> Result<ExpectedKeyboardBuilder, LayoutError> {
        let double_quote = key("\"").with_more_keys(
            customizer
                .double_quote_more_keys()
                .into_iter()
                .chain(customizer.double_angle_quote_keys()),
        );
        let single_quote = key("'").with_more_keys(
            customizer
                .single_quote_more_keys()
                .into_iter()
                .chain(customizer.single_angle_quote_keys()),
        );

        let mut builder = ExpectedKeyboardBuilder::from_layout(&COMMON_LAYOUT);
        builder
            .replace_key_of_label(CURRENCY, &[customizer.currency_key()])?
            .replace_key_of_label(DOUBLE_QUOTE, &[double_quote])?
            .replace_key_of_label(SINGLE_QUOTE, &[single_quote])?;
        Ok(builder)
    }

    fn phone_layout(common: &ExpectedKeyboardBuilder, customizer: &LayoutCustomizer) -> ExpectedLayout {
        let mut builder = common.clone();
        builder
            .add_keys_on_the_left_of_row(3, [customizer.symbols_shift_key(true)])
            .add_keys_on_the_right_of_row(3, [DELETE_KEY.clone()])
            .add_keys_on_the_left_of_row(4, [customizer.alphabet_key()])
            .add_keys_on_the_right_of_row(4, [ENTER_WITH_EMOJI_KEY.clone()]);
        builder.build()
    }

    fn tablet_layout(common: &ExpectedKeyboardBuilder, customizer: &LayoutCustomizer) -> ExpectedLayout {
        let shift = customizer.symbols_shift_key(false);
        let mut builder = common.clone();
        builder
            .add_keys_on_the_right_of_row(1, [DELETE_KEY.clone()])
            .add_keys_on_the_right_of_row(2, [ENTER_KEY.clone()])
            .add_keys_on_the_left_of_row(3, [key("\\"), key("=")])
            .add_keys_on_the_left_of_row(3, [shift.clone()])
            .add_keys_on_the_right_of_row(3, [shift])
            .add_keys_on_the_left_of_row(4, [customizer.alphabet_key(), SETTINGS_KEY.clone()])
            .add_keys_on_the_right_of_row(4, [EMOJI_KEY.clone()]);
        builder.build()
    }
}

impl SymbolsTable for Symbols {
    fn layout(&self, is_phone: bool) -> ExpectedLayout {
        if is_phone {
            self.phone.clone()
        } else {
            self.tablet.clone()
        }
    }
}
