// SPDX-License-Identifier: GPL-3.0-only

//! Per-locale policy for composing keyboards.
//!
//! A [`LayoutCustomizer`] decides the keys that differ between locales while
//! the rest of a keyboard stays common: the currency key, quotation mark
//! order, the shift keys, the keys around the spacebar and the accented
//! letters offered on long press.
//!
//! # Example
//!
//! ```rust,ignore
//! use expected_layouts::layout::{CurrencyZone, LayoutCustomizer};
//! use expected_layouts::locale::Locale;
//!
//! let customizer = LayoutCustomizer::euro(Locale::parse("de_DE")?)
//!     .with_accented_letters("s", &["ß", "ś", "š"]);
//! assert_eq!(customizer.currency(), CurrencyZone::Euro);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::expected::key::{key, keys};
use crate::expected::{ExpectedKey, ExpectedKeyboardBuilder};
use crate::layout::keys::{
    ALPHABET_KEY, BACK_TO_SYMBOLS_KEY, EXCLAMATION_AND_QUESTION_MARKS,
    PHONE_PUNCTUATION_MORE_KEYS, SETTINGS_KEY, SHIFT_KEY, SYMBOLS_KEY, SYMBOLS_SHIFT_KEY,
    TABLET_PUNCTUATION_MORE_KEYS, TABLET_SYMBOLS_SHIFT_KEY,
};
use crate::layout::symbols::{
    CURRENCY_DOLLAR, CURRENCY_EURO, DOUBLE_ANGLE_QUOTES_LR, DOUBLE_ANGLE_QUOTES_RL,
    DOUBLE_QUOTES_9LR, DOUBLE_QUOTES_L9R, DOUBLE_QUOTES_LR9, DOUBLE_QUOTES_R9L,
    SINGLE_ANGLE_QUOTES_LR, SINGLE_ANGLE_QUOTES_RL, SINGLE_QUOTES_9LR, SINGLE_QUOTES_L9R,
    SINGLE_QUOTES_LR9, SINGLE_QUOTES_R9L,
};
use crate::layout::symbols_shifted::{CURRENCIES_OTHER_THAN_DOLLAR, CURRENCIES_OTHER_THAN_EURO};
use crate::layout::types::CustomizerSpec;
use crate::locale::Locale;

/// Currency shown on the symbols page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyZone {
    #[default]
    Dollar,
    Euro,
}

impl CurrencyZone {
    pub fn currency_key(self) -> ExpectedKey {
        match self {
            CurrencyZone::Dollar => CURRENCY_DOLLAR.clone(),
            CurrencyZone::Euro => CURRENCY_EURO.clone(),
        }
    }

    pub fn other_currency_keys(self) -> Vec<ExpectedKey> {
        match self {
            CurrencyZone::Dollar => CURRENCIES_OTHER_THAN_DOLLAR.clone(),
            CurrencyZone::Euro => CURRENCIES_OTHER_THAN_EURO.clone(),
        }
    }
}

/// Order of the low-9, left and right quotation marks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteOrder {
    /// „ “ ”
    #[default]
    #[serde(rename = "9LR")]
    LowLeftRight,
    /// ” „ “
    #[serde(rename = "R9L")]
    RightLowLeft,
    /// “ „ ”
    #[serde(rename = "L9R")]
    LeftLowRight,
    /// “ ” „
    #[serde(rename = "LR9")]
    LeftRightLow,
}

impl QuoteOrder {
    pub fn double_quotes(self) -> Vec<ExpectedKey> {
        match self {
            QuoteOrder::LowLeftRight => DOUBLE_QUOTES_9LR.clone(),
            QuoteOrder::RightLowLeft => DOUBLE_QUOTES_R9L.clone(),
            QuoteOrder::LeftLowRight => DOUBLE_QUOTES_L9R.clone(),
            QuoteOrder::LeftRightLow => DOUBLE_QUOTES_LR9.clone(),
        }
    }

    pub fn single_quotes(self) -> Vec<ExpectedKey> {
        match self {
            QuoteOrder::LowLeftRight => SINGLE_QUOTES_9LR.clone(),
            QuoteOrder::RightLowLeft => SINGLE_QUOTES_R9L.clone(),
            QuoteOrder::LeftLowRight => SINGLE_QUOTES_L9R.clone(),
            QuoteOrder::LeftRightLow => SINGLE_QUOTES_LR9.clone(),
        }
    }
}

/// Order of angle quotation marks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleQuoteOrder {
    /// « »
    #[default]
    #[serde(rename = "LR")]
    LeftRight,
    /// » «
    #[serde(rename = "RL")]
    RightLeft,
}

impl AngleQuoteOrder {
    pub fn double_angle_quotes(self) -> Vec<ExpectedKey> {
        match self {
            AngleQuoteOrder::LeftRight => DOUBLE_ANGLE_QUOTES_LR.clone(),
            AngleQuoteOrder::RightLeft => DOUBLE_ANGLE_QUOTES_RL.clone(),
        }
    }

    pub fn single_angle_quotes(self) -> Vec<ExpectedKey> {
        match self {
            AngleQuoteOrder::LeftRight => SINGLE_ANGLE_QUOTES_LR.clone(),
            AngleQuoteOrder::RightLeft => SINGLE_ANGLE_QUOTES_RL.clone(),
        }
    }
}

/// Locale-specific choices applied on top of the common keyboard.
///
/// The customizer holds no state beyond its settings; every accessor is a
/// pure function of those settings and the requested form factor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutCustomizer {
    locale: Locale,
    currency: CurrencyZone,
    double_quotes: QuoteOrder,
    single_quotes: QuoteOrder,
    double_angle_quotes: AngleQuoteOrder,
    single_angle_quotes: AngleQuoteOrder,
    has_shift_key: bool,
    accented_letters: BTreeMap<String, Vec<ExpectedKey>>,
    extra_punctuation: Vec<ExpectedKey>,
}

impl LayoutCustomizer {
    /// Default policy: dollar currency, `9LR` quotes, one shift key.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            currency: CurrencyZone::Dollar,
            double_quotes: QuoteOrder::default(),
            single_quotes: QuoteOrder::default(),
            double_angle_quotes: AngleQuoteOrder::default(),
            single_angle_quotes: AngleQuoteOrder::default(),
            has_shift_key: true,
            accented_letters: BTreeMap::new(),
            extra_punctuation: Vec::new(),
        }
    }

    /// Default policy with the euro as currency.
    pub fn euro(locale: Locale) -> Self {
        Self::new(locale).with_currency(CurrencyZone::Euro)
    }

    /// Builds a customizer from a definition's settings, defaulting unset fields.
    pub fn from_spec(locale: Locale, spec: &CustomizerSpec) -> Self {
        let mut customizer = Self::new(locale);
        customizer.currency = spec.currency.unwrap_or_default();
        customizer.double_quotes = spec.double_quotes.unwrap_or_default();
        customizer.single_quotes = spec.single_quotes.unwrap_or_default();
        customizer.double_angle_quotes = spec.double_angle_quotes.unwrap_or_default();
        customizer.single_angle_quotes = spec.single_angle_quotes.unwrap_or_default();
        customizer.has_shift_key = spec.has_shift_key.unwrap_or(true);
        if let Some(accents) = &spec.accented_letters {
            customizer.accented_letters = accents
                .iter()
                .map(|(letter, more)| {
                    let more: Vec<&str> = more.iter().map(String::as_str).collect();
                    (letter.clone(), keys(&more))
                })
                .collect();
        }
        if let Some(extra) = &spec.extra_punctuation {
            let extra: Vec<&str> = extra.iter().map(String::as_str).collect();
            customizer.extra_punctuation = keys(&extra);
        }
        customizer
    }

    pub fn with_currency(mut self, currency: CurrencyZone) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_quotes(mut self, double: QuoteOrder, single: QuoteOrder) -> Self {
        self.double_quotes = double;
        self.single_quotes = single;
        self
    }

    pub fn with_angle_quotes(mut self, double: AngleQuoteOrder, single: AngleQuoteOrder) -> Self {
        self.double_angle_quotes = double;
        self.single_angle_quotes = single;
        self
    }

    /// Removes the shift keys, for scripts without letter case.
    pub fn without_shift_key(mut self) -> Self {
        self.has_shift_key = false;
        self
    }

    /// Offers `more_keys` on long press of `letter`.
    pub fn with_accented_letters(mut self, letter: &str, more_keys: &[&str]) -> Self {
        self.accented_letters
            .insert(letter.to_string(), keys(more_keys));
        self
    }

    /// Appends `extra` to the punctuation more keys.
    pub fn with_extra_punctuation(mut self, extra: &[&str]) -> Self {
        self.extra_punctuation = keys(extra);
        self
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn currency(&self) -> CurrencyZone {
        self.currency
    }

    pub fn has_shift_key(&self) -> bool {
        self.has_shift_key
    }

    /// Letters that receive accented more keys.
    pub fn accented_letter_labels(&self) -> Vec<&str> {
        self.accented_letters.keys().map(String::as_str).collect()
    }

    /// Attaches the locale's accented letters as more keys of the matching
    /// letters. Keys are never added or removed.
    pub fn set_accented_letters<'a>(
        &self,
        builder: &'a mut ExpectedKeyboardBuilder,
    ) -> &'a mut ExpectedKeyboardBuilder {
        for (letter, more_keys) in &self.accented_letters {
            builder.set_more_keys_of(letter, more_keys);
        }
        builder
    }

    pub fn alphabet_key(&self) -> ExpectedKey {
        ALPHABET_KEY.clone()
    }

    pub fn symbols_key(&self) -> ExpectedKey {
        SYMBOLS_KEY.clone()
    }

    pub fn symbols_shift_key(&self, is_phone: bool) -> ExpectedKey {
        if is_phone {
            SYMBOLS_SHIFT_KEY.clone()
        } else {
            TABLET_SYMBOLS_SHIFT_KEY.clone()
        }
    }

    pub fn back_to_symbols_key(&self) -> ExpectedKey {
        BACK_TO_SYMBOLS_KEY.clone()
    }

    pub fn currency_key(&self) -> ExpectedKey {
        self.currency.currency_key()
    }

    pub fn other_currency_keys(&self) -> Vec<ExpectedKey> {
        self.currency.other_currency_keys()
    }

    /// More keys of the double quote, in natural order.
    pub fn double_quote_more_keys(&self) -> Vec<ExpectedKey> {
        self.double_quotes.double_quotes()
    }

    /// More keys of the single quote, in natural order.
    pub fn single_quote_more_keys(&self) -> Vec<ExpectedKey> {
        self.single_quotes.single_quotes()
    }

    pub fn double_angle_quote_keys(&self) -> Vec<ExpectedKey> {
        self.double_angle_quotes.double_angle_quotes()
    }

    pub fn single_angle_quote_keys(&self) -> Vec<ExpectedKey> {
        self.single_angle_quotes.single_angle_quotes()
    }

    /// Keys at the left edge of the shift row.
    pub fn left_shift_keys(&self, _is_phone: bool) -> Vec<ExpectedKey> {
        if self.has_shift_key {
            vec![SHIFT_KEY.clone()]
        } else {
            Vec::new()
        }
    }

    /// Keys at the right edge of the shift row.
    pub fn right_shift_keys(&self, is_phone: bool) -> Vec<ExpectedKey> {
        if is_phone {
            return Vec::new();
        }
        let mut keys = EXCLAMATION_AND_QUESTION_MARKS.clone();
        if self.has_shift_key {
            keys.push(SHIFT_KEY.clone());
        }
        keys
    }

    pub fn keys_left_of_spacebar(&self, is_phone: bool) -> Vec<ExpectedKey> {
        if is_phone {
            vec![key(",").with_more_keys([SETTINGS_KEY.clone()])]
        } else {
            vec![key("/")]
        }
    }

    pub fn keys_right_of_spacebar(&self, is_phone: bool) -> Vec<ExpectedKey> {
        let period = key(".").with_more_keys(self.punctuation_more_keys(is_phone));
        if is_phone {
            vec![period]
        } else {
            vec![key(","), period]
        }
    }

    /// More keys of the punctuation (period) key.
    pub fn punctuation_more_keys(&self, is_phone: bool) -> Vec<ExpectedKey> {
        let base = if is_phone {
            &PHONE_PUNCTUATION_MORE_KEYS
        } else {
            &TABLET_PUNCTUATION_MORE_KEYS
        };
        base.iter()
            .chain(self.extra_punctuation.iter())
            .cloned()
            .collect()
    }
}
