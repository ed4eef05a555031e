// SPDX-License-Identifier: GPL-3.0-only

//! Locale-aware upper-casing of key labels and outputs.
//!
//! Upper-casing follows Unicode's full case mapping, so `ß` becomes `SS`.
//! Turkic locales map `i` to `İ`. A code output whose upper case spans
//! several code points turns into a text output.

use crate::expected::codes::is_letter_code;
use crate::expected::key::KeyOutput;
use crate::locale::Locale;

/// Upper-cases a key label for `locale`.
pub fn to_upper_case(label: &str, locale: &Locale) -> String {
    label.chars().flat_map(|c| upper_chars(c, locale)).collect()
}

/// Upper-cases a key output code for `locale`. Function keys are unchanged.
pub fn to_upper_output(code: i32, locale: &Locale) -> KeyOutput {
    if !is_letter_code(code) {
        return KeyOutput::Code(code);
    }
    match u32::try_from(code).ok().and_then(char::from_u32) {
        Some(c) => KeyOutput::from_label(&upper_chars(c, locale).collect::<String>()),
        None => KeyOutput::Code(code),
    }
}

fn upper_chars(c: char, locale: &Locale) -> impl Iterator<Item = char> {
    let dotted = locale.has_dotted_capital_i() && c == 'i';
    let mapped: Vec<char> = if dotted {
        vec!['\u{0130}']
    } else {
        c.to_uppercase().collect()
    };
    mapped.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(tag: &str) -> Locale {
        Locale::parse(tag).unwrap()
    }

    #[test]
    fn test_plain_letters() {
        let en = locale("en_US");
        assert_eq!(to_upper_case("q", &en), "Q");
        assert_eq!(to_upper_case("é", &en), "É");
        assert_eq!(to_upper_case(".com", &en), ".COM");
        assert_eq!(to_upper_case("?123", &en), "?123");
    }

    #[test]
    fn test_turkic_i() {
        let tr = locale("tr_TR");
        assert_eq!(to_upper_case("i", &tr), "\u{0130}");
        assert_eq!(to_upper_case("\u{0131}", &tr), "I");
        assert_eq!(to_upper_case("i", &locale("en_US")), "I");
        assert_eq!(to_upper_output('i' as i32, &tr), KeyOutput::Code(0x0130));
    }

    /// Sharp s expands the same way alone and inside a longer label.
    #[test]
    fn test_expanding_letter() {
        let de = locale("de_DE");
        assert_eq!(to_upper_case("ß", &de), "SS");
        assert_eq!(to_upper_case("aß", &de), "ASS");
        assert_eq!(
            to_upper_output('ß' as i32, &de),
            KeyOutput::Text("SS".to_string())
        );
    }

    #[test]
    fn test_function_codes_unchanged() {
        let en = locale("en_US");
        assert_eq!(to_upper_output(-1, &en), KeyOutput::Code(-1));
        assert_eq!(to_upper_output('\n' as i32, &en), KeyOutput::Code('\n' as i32));
        assert_eq!(to_upper_output('a' as i32, &en), KeyOutput::Code('A' as i32));
    }
}
