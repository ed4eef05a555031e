// SPDX-License-Identifier: GPL-3.0-only

//! Output codes and icon names used by expected keys.
//!
//! Negative codes are function keys; non-negative codes are Unicode code
//! points. Icons are referenced by name only.

pub const CODE_ENTER: i32 = '\n' as i32;
pub const CODE_SPACE: i32 = ' ' as i32;

pub const CODE_SHIFT: i32 = -1;
pub const CODE_CAPSLOCK: i32 = -2;
pub const CODE_SWITCH_ALPHA_SYMBOL: i32 = -3;
pub const CODE_OUTPUT_TEXT: i32 = -4;
pub const CODE_DELETE: i32 = -5;
pub const CODE_SETTINGS: i32 = -6;
pub const CODE_SHORTCUT: i32 = -7;
pub const CODE_ACTION_NEXT: i32 = -8;
pub const CODE_ACTION_PREVIOUS: i32 = -9;
pub const CODE_LANGUAGE_SWITCH: i32 = -10;
pub const CODE_EMOJI: i32 = -11;
pub const CODE_SHIFT_ENTER: i32 = -12;
pub const CODE_SYMBOL_SHIFT: i32 = -13;
pub const CODE_UNSPECIFIED: i32 = -15;

pub const ICON_SHIFT: &str = "shift_key";
pub const ICON_SHIFTED_SHIFT: &str = "shift_key_shifted";
pub const ICON_DELETE: &str = "delete_key";
pub const ICON_ENTER: &str = "enter_key";
pub const ICON_SPACE: &str = "space_key";
pub const ICON_SETTINGS: &str = "settings_key";
pub const ICON_EMOJI: &str = "emoji_action_key";

/// Returns true if `code` is a character rather than a function key.
pub fn is_letter_code(code: i32) -> bool {
    code >= CODE_SPACE
}

/// Human-readable name of a function key code, used when printing keys.
pub fn code_name(code: i32) -> Option<&'static str> {
    let name = match code {
        CODE_ENTER => "enter",
        CODE_SPACE => "space",
        CODE_SHIFT => "shift",
        CODE_CAPSLOCK => "capslock",
        CODE_SWITCH_ALPHA_SYMBOL => "symbol",
        CODE_OUTPUT_TEXT => "text",
        CODE_DELETE => "delete",
        CODE_SETTINGS => "settings",
        CODE_SHORTCUT => "shortcut",
        CODE_ACTION_NEXT => "actionNext",
        CODE_ACTION_PREVIOUS => "actionPrevious",
        CODE_LANGUAGE_SWITCH => "languageSwitch",
        CODE_EMOJI => "emoji",
        CODE_SHIFT_ENTER => "shiftEnter",
        CODE_SYMBOL_SHIFT => "symbolShift",
        CODE_UNSPECIFIED => "unspec",
        _ => return None,
    };
    Some(name)
}
