// SPDX-License-Identifier: GPL-3.0-only

//! Function keys shared by every layout.
//!
//! These are process-wide constants built on first use and never changed.

use std::sync::LazyLock;

use crate::expected::ExpectedKey;
use crate::expected::codes::{
    CODE_CAPSLOCK, CODE_DELETE, CODE_EMOJI, CODE_ENTER, CODE_SETTINGS, CODE_SHIFT, CODE_SPACE,
    CODE_SWITCH_ALPHA_SYMBOL, ICON_DELETE, ICON_EMOJI, ICON_ENTER, ICON_SETTINGS, ICON_SHIFT,
    ICON_SHIFTED_SHIFT, ICON_SPACE,
};
use crate::expected::key::{key_with_more, keys};

pub static CAPSLOCK_MORE_KEY: LazyLock<ExpectedKey> =
    LazyLock::new(|| ExpectedKey::label_with_code(" ", CODE_CAPSLOCK));

pub static SHIFT_KEY: LazyLock<ExpectedKey> = LazyLock::new(|| {
    ExpectedKey::icon(ICON_SHIFT, CODE_SHIFT).with_more_keys([CAPSLOCK_MORE_KEY.clone()])
});

/// Shift key as drawn while the keyboard is shifted.
pub static SHIFTED_SHIFT_KEY: LazyLock<ExpectedKey> = LazyLock::new(|| {
    ExpectedKey::icon(ICON_SHIFTED_SHIFT, CODE_SHIFT).with_more_keys([CAPSLOCK_MORE_KEY.clone()])
});

pub static ALPHABET_KEY: LazyLock<ExpectedKey> =
    LazyLock::new(|| ExpectedKey::label_with_code("ABC", CODE_SWITCH_ALPHA_SYMBOL));

pub static SYMBOLS_KEY: LazyLock<ExpectedKey> =
    LazyLock::new(|| ExpectedKey::label_with_code("?123", CODE_SWITCH_ALPHA_SYMBOL));

pub static BACK_TO_SYMBOLS_KEY: LazyLock<ExpectedKey> =
    LazyLock::new(|| ExpectedKey::label_with_code("?123", CODE_SHIFT));

pub static SYMBOLS_SHIFT_KEY: LazyLock<ExpectedKey> =
    LazyLock::new(|| ExpectedKey::label_with_code("= \\ <", CODE_SHIFT));

pub static TABLET_SYMBOLS_SHIFT_KEY: LazyLock<ExpectedKey> =
    LazyLock::new(|| ExpectedKey::label_with_code("~ [ <", CODE_SHIFT));

pub static DELETE_KEY: LazyLock<ExpectedKey> =
    LazyLock::new(|| ExpectedKey::icon(ICON_DELETE, CODE_DELETE));

pub static ENTER_KEY: LazyLock<ExpectedKey> =
    LazyLock::new(|| ExpectedKey::icon(ICON_ENTER, CODE_ENTER));

pub static EMOJI_KEY: LazyLock<ExpectedKey> =
    LazyLock::new(|| ExpectedKey::icon(ICON_EMOJI, CODE_EMOJI));

pub static SETTINGS_KEY: LazyLock<ExpectedKey> =
    LazyLock::new(|| ExpectedKey::icon(ICON_SETTINGS, CODE_SETTINGS));

pub static SPACEBAR: LazyLock<ExpectedKey> =
    LazyLock::new(|| ExpectedKey::icon(ICON_SPACE, CODE_SPACE));

/// Phone enter key; emoji is on long press.
pub static ENTER_WITH_EMOJI_KEY: LazyLock<ExpectedKey> =
    LazyLock::new(|| ENTER_KEY.clone().with_more_keys([EMOJI_KEY.clone()]));

// U+00A1: "¡" INVERTED EXCLAMATION MARK
// U+00BF: "¿" INVERTED QUESTION MARK
pub static EXCLAMATION_AND_QUESTION_MARKS: LazyLock<Vec<ExpectedKey>> =
    LazyLock::new(|| vec![key_with_more("!", &["\u{00A1}"]), key_with_more("?", &["\u{00BF}"])]);

pub static PHONE_PUNCTUATION_MORE_KEYS: LazyLock<Vec<ExpectedKey>> = LazyLock::new(|| {
    keys(&[
        ";", "/", "(", ")", "#", "!", ",", "?", "&", "%", "+", "\"", "-", ":", "'", "@",
    ])
});

pub static TABLET_PUNCTUATION_MORE_KEYS: LazyLock<Vec<ExpectedKey>> = LazyLock::new(|| {
    keys(&[";", "/", "(", ")", "#", "'", ",", "&", "%", "+", "\"", "-", ":", "@"])
});
