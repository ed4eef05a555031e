// SPDX-License-Identifier: GPL-3.0-only

//! The shifted symbols page.
//!
//! Same construction as [`crate::layout::symbols`]: a common grid with one
//! placeholder, expanded into the currencies the symbols page does not show.

use std::sync::LazyLock;

use crate::expected::key::{key, key_with_more, keys};
use crate::expected::{ExpectedKey, ExpectedKeyboardBuilder, ExpectedLayout};
use crate::layout::customizer::LayoutCustomizer;
use crate::layout::keys::{
    DELETE_KEY, EMOJI_KEY, ENTER_KEY, ENTER_WITH_EMOJI_KEY, SETTINGS_KEY, SPACEBAR,
};
use crate::layout::symbols::{
    CENT_SIGN, DOLLAR_SIGN, EURO_SIGN, POUND_SIGN, SymbolsTable, YEN_SIGN,
};
use crate::layout::types::LayoutError;

pub(crate) const OTHER_CURRENCIES: &str = "OTHER_CURRENCY";

pub static CURRENCIES_OTHER_THAN_DOLLAR: LazyLock<Vec<ExpectedKey>> =
    LazyLock::new(|| keys(&[POUND_SIGN, CENT_SIGN, EURO_SIGN, YEN_SIGN]));

pub static CURRENCIES_OTHER_THAN_EURO: LazyLock<Vec<ExpectedKey>> = LazyLock::new(|| {
    vec![
        key(POUND_SIGN),
        key(YEN_SIGN),
        key_with_more(DOLLAR_SIGN, &[CENT_SIGN]),
        key(CENT_SIGN),
    ]
});

static COMMON_LAYOUT: LazyLock<ExpectedLayout> = LazyLock::new(|| {
    ExpectedLayout::new(vec![
        vec![
            key("~"),
            key("`"),
            key("|"),
            // U+2022: "•" BULLET
            // U+266A: "♪" EIGHTH NOTE
            // U+2665: "♥" BLACK HEART SUIT
            // U+2660: "♠" BLACK SPADE SUIT
            // U+2666: "♦" BLACK DIAMOND SUIT
            // U+2663: "♣" BLACK CLUB SUIT
            key_with_more(
                "\u{2022}",
                &["\u{266A}", "\u{2665}", "\u{2660}", "\u{2666}", "\u{2663}"],
            ),
            // U+221A: "√" SQUARE ROOT
            key("\u{221A}"),
            // U+03C0: "π" GREEK SMALL LETTER PI
            // U+03A0: "Π" GREEK CAPITAL LETTER PI
            key_with_more("\u{03C0}", &["\u{03A0}"]),
            // U+00F7: "÷" DIVISION SIGN
            // U+00D7: "×" MULTIPLICATION SIGN
            key("\u{00F7}"),
            key("\u{00D7}"),
            // U+00B6: "¶" PILCROW SIGN
            // U+00A7: "§" SECTION SIGN
            key_with_more("\u{00B6}", &["\u{00A7}"]),
            // U+2206: "∆" INCREMENT
            key("\u{2206}"),
        ],
        vec![
            key(OTHER_CURRENCIES),
            // U+2191: "↑" UPWARDS ARROW
            // U+2193: "↓" DOWNWARDS ARROW
            // U+2190: "←" LEFTWARDS ARROW
            // U+2192: "→" RIGHTWARDS ARROW
            key_with_more("^", &["\u{2191}", "\u{2193}", "\u{2190}", "\u{2192}"]),
            // U+00B0: "°" DEGREE SIGN
            // U+2032: "′" PRIME
            // U+2033: "″" DOUBLE PRIME
            key_with_more("\u{00B0}", &["\u{2032}", "\u{2033}"]),
            // U+2260: "≠" NOT EQUAL TO
            // U+2248: "≈" ALMOST EQUAL TO
            // U+221E: "∞" INFINITY
            key_with_more("=", &["\u{2260}", "\u{2248}", "\u{221E}"]),
            key("{"),
            key("}"),
        ],
        vec![
            key("\\"),
            // U+00A9: "©" COPYRIGHT SIGN
            // U+00AE: "®" REGISTERED SIGN
            // U+2122: "™" TRADE MARK SIGN
            // U+2105: "℅" CARE OF
            key("\u{00A9}"),
            key("\u{00AE}"),
            key("\u{2122}"),
            key("\u{2105}"),
            key("["),
            key("]"),
        ],
        vec![
            // U+2264: "≤" LESS-THAN OR EQUAL TO
            // U+2265: "≥" GREATER-THAN EQUAL TO
            key_with_more("<", &["\u{2039}", "\u{2264}", "\u{00AB}"]),
            key_with_more(">", &["\u{203A}", "\u{2265}", "\u{00BB}"]),
            SPACEBAR.clone(),
            key(","),
            // U+2026: "…" HORIZONTAL ELLIPSIS
            key("\u{2026}"),
        ],
    ])
});

/// The shifted symbols page of a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolsShifted {
    phone: ExpectedLayout,
    tablet: ExpectedLayout,
}

impl SymbolsShifted {
    pub fn new(customizer: &LayoutCustomizer) -> Result<Self, LayoutError> {
        let mut common = ExpectedKeyboardBuilder::from_layout(&COMMON_LAYOUT);
        common.replace_key_of_label(OTHER_CURRENCIES, &customizer.other_currency_keys())?;

        let back = customizer.back_to_symbols_key();

        let mut phone = common.clone();
        phone
            .add_keys_on_the_left_of_row(3, [back.clone()])
            .add_keys_on_the_right_of_row(3, [DELETE_KEY.clone()])
            .add_keys_on_the_left_of_row(4, [customizer.alphabet_key()])
            .add_keys_on_the_right_of_row(4, [ENTER_WITH_EMOJI_KEY.clone()]);

        let mut tablet = common;
        tablet
            .add_keys_on_the_right_of_row(1, [DELETE_KEY.clone()])
            .add_keys_on_the_right_of_row(2, [ENTER_KEY.clone()])
            .add_keys_on_the_left_of_row(3, [back.clone()])
            .add_keys_on_the_right_of_row(3, [back])
            .add_keys_on_the_left_of_row(4, [customizer.alphabet_key(), SETTINGS_KEY.clone()])
            .add_keys_on_the_right_of_row(4, [EMOJI_KEY.clone()]);

        Ok(Self {
            phone: phone.build(),
            tablet: tablet.build(),
        })
    }

    pub fn factory(customizer: &LayoutCustomizer) -> Result<Box<dyn SymbolsTable>, LayoutError> {
        Ok(Box::new(Self::new(customizer)?))
    }
}

impl SymbolsTable for SymbolsShifted {
    fn layout(&self, is_phone: bool) -> ExpectedLayout {
        if is_phone {
            self.phone.clone()
        } else {
            self.tablet.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    fn locale() -> Locale {
        Locale::parse("en_US").unwrap()
    }

    /// Test 1: Phone page
    #[test]
    fn test_phone_layout() {
        let layout = SymbolsShifted::new(&LayoutCustomizer::new(locale()))
            .unwrap()
            .layout(true);

        assert_eq!(layout.shape(), vec![10, 9, 9, 7]);
        assert!(layout.row(3).unwrap()[0].has_label("?123"));
        assert_eq!(layout.row(3).unwrap()[8], DELETE_KEY.clone());
        assert!(layout.row(4).unwrap()[0].has_label("ABC"));
    }

    /// Test 2: Tablet page
    #[test]
    fn test_tablet_layout() {
        let layout = SymbolsShifted::new(&LayoutCustomizer::new(locale()))
            .unwrap()
            .layout(false);

        assert_eq!(layout.shape(), vec![11, 10, 9, 8]);
        assert_eq!(layout.row(1).unwrap()[10], DELETE_KEY.clone());
        assert_eq!(layout.row(2).unwrap()[9], ENTER_KEY.clone());
        assert_eq!(layout.row(3).unwrap()[0], layout.row(3).unwrap()[8]);
    }

    /// Test 3: Other currencies exclude the symbols page currency
    #[test]
    fn test_other_currencies() {
        let dollar = SymbolsShifted::new(&LayoutCustomizer::new(locale()))
            .unwrap()
            .layout(true);
        let euro = SymbolsShifted::new(&LayoutCustomizer::euro(locale()))
            .unwrap()
            .layout(true);

        assert_eq!(&dollar.row(2).unwrap()[..4], CURRENCIES_OTHER_THAN_DOLLAR.as_slice());
        assert_eq!(&euro.row(2).unwrap()[..4], CURRENCIES_OTHER_THAN_EURO.as_slice());
        assert!(!dollar.contains(&key(DOLLAR_SIGN)));
        assert!(!euro.contains(&key(EURO_SIGN)));
        assert!(!dollar.contains(&key(OTHER_CURRENCIES)));
    }
}
