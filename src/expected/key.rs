// SPDX-License-Identifier: GPL-3.0-only

//! Expected key descriptors and the layout matrix they form.
//!
//! An [`ExpectedKey`] is what a test expects to find at one position of a
//! rendered keyboard: how the key looks ([`KeyVisual`]), what it emits
//! ([`KeyOutput`]), and the "more keys" shown on long press. Keys are values;
//! every transformation returns a new key.

use serde::Serialize;
use std::fmt;

use crate::expected::case::{to_upper_case, to_upper_output};
use crate::expected::codes::{CODE_OUTPUT_TEXT, code_name};
use crate::locale::Locale;

/// How a key is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyVisual {
    /// Text drawn on the key
    Label(String),
    /// Named icon resource
    Icon(String),
}

/// What a key emits when pressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOutput {
    /// A code point or a negative function key code
    Code(i32),
    /// A string longer than one code point
    Text(String),
}

impl KeyOutput {
    /// Output derived from a label: one code point emits that code point,
    /// anything longer emits the text.
    pub fn from_label(label: &str) -> Self {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => KeyOutput::Code(c as i32),
            _ => KeyOutput::Text(label.to_string()),
        }
    }

    /// Returns the code emitted, or `CODE_OUTPUT_TEXT` for text outputs.
    pub fn code(&self) -> i32 {
        match self {
            KeyOutput::Code(code) => *code,
            KeyOutput::Text(_) => CODE_OUTPUT_TEXT,
        }
    }
}

/// A key expected at one position of a keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ExpectedKey {
    visual: KeyVisual,
    output: KeyOutput,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    more_keys: Vec<ExpectedKey>,
}

impl ExpectedKey {
    /// A labeled key whose output is derived from the label.
    pub fn label(label: &str) -> Self {
        Self {
            visual: KeyVisual::Label(label.to_string()),
            output: KeyOutput::from_label(label),
            more_keys: Vec::new(),
        }
    }

    /// A labeled key with an explicit output code.
    pub fn label_with_code(label: &str, code: i32) -> Self {
        Self {
            visual: KeyVisual::Label(label.to_string()),
            output: KeyOutput::Code(code),
            more_keys: Vec::new(),
        }
    }

    /// An icon key with an explicit output code.
    pub fn icon(icon: &str, code: i32) -> Self {
        Self {
            visual: KeyVisual::Icon(icon.to_string()),
            output: KeyOutput::Code(code),
            more_keys: Vec::new(),
        }
    }

    /// Returns this key with `more_keys` as its long-press keys.
    pub fn with_more_keys(mut self, more_keys: impl IntoIterator<Item = ExpectedKey>) -> Self {
        self.more_keys = more_keys.into_iter().collect();
        self
    }

    pub fn visual(&self) -> &KeyVisual {
        &self.visual
    }

    pub fn output(&self) -> &KeyOutput {
        &self.output
    }

    pub fn more_keys(&self) -> &[ExpectedKey] {
        &self.more_keys
    }

    /// Label text, if the key is drawn with text.
    pub fn label_text(&self) -> Option<&str> {
        match &self.visual {
            KeyVisual::Label(label) => Some(label),
            KeyVisual::Icon(_) => None,
        }
    }

    /// Returns true if the visual is the label `label`.
    pub fn has_label(&self, label: &str) -> bool {
        self.label_text() == Some(label)
    }

    /// Upper-cased copy of this key and of its more keys.
    pub fn to_upper_case(&self, locale: &Locale) -> Self {
        let visual = match &self.visual {
            KeyVisual::Label(label) => KeyVisual::Label(to_upper_case(label, locale)),
            icon @ KeyVisual::Icon(_) => icon.clone(),
        };
        let output = match &self.output {
            KeyOutput::Code(code) => to_upper_output(*code, locale),
            KeyOutput::Text(text) => KeyOutput::Text(to_upper_case(text, locale)),
        };
        Self {
            visual,
            output,
            more_keys: self
                .more_keys
                .iter()
                .map(|key| key.to_upper_case(locale))
                .collect(),
        }
    }

    fn output_matches_visual(&self) -> bool {
        match &self.visual {
            KeyVisual::Label(label) => KeyOutput::from_label(label) == self.output,
            KeyVisual::Icon(_) => false,
        }
    }
}

impl fmt::Display for KeyVisual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyVisual::Label(label) => write!(f, "{}", label),
            KeyVisual::Icon(icon) => write!(f, "!icon/{}", icon),
        }
    }
}

impl fmt::Display for KeyOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyOutput::Code(code) => match code_name(*code) {
                Some(name) => write!(f, "!code/{}", name),
                None => match u32::try_from(*code).ok().and_then(char::from_u32) {
                    Some(c) => write!(f, "{}", c),
                    None => write!(f, "!code/{}", code),
                },
            },
            KeyOutput::Text(text) => write!(f, "{}", text),
        }
    }
}

impl fmt::Display for ExpectedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.output_matches_visual() {
            write!(f, "{}", self.visual)?;
        } else {
            write!(f, "{}|{}", self.visual, self.output)?;
        }
        if !self.more_keys.is_empty() {
            let more: Vec<String> = self.more_keys.iter().map(ToString::to_string).collect();
            write!(f, "^[{}]", more.join(","))?;
        }
        Ok(())
    }
}

/// Shorthand for a labeled key.
pub fn key(label: &str) -> ExpectedKey {
    ExpectedKey::label(label)
}

/// Shorthand for a labeled key with more keys given as labels.
pub fn key_with_more(label: &str, more_keys: &[&str]) -> ExpectedKey {
    ExpectedKey::label(label).with_more_keys(keys(more_keys))
}

/// Labeled keys for each of `labels`.
pub fn keys(labels: &[&str]) -> Vec<ExpectedKey> {
    labels.iter().map(|label| ExpectedKey::label(label)).collect()
}

/// A keyboard page: ordered rows of expected keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExpectedLayout {
    rows: Vec<Vec<ExpectedKey>>,
}

impl ExpectedLayout {
    pub fn new(rows: Vec<Vec<ExpectedKey>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<ExpectedKey>] {
        &self.rows
    }

    /// Keys of the 1-based row `row`, if it exists.
    pub fn row(&self, row: usize) -> Option<&[ExpectedKey]> {
        row.checked_sub(1)
            .and_then(|index| self.rows.get(index))
            .map(Vec::as_slice)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of keys on the page, excluding more keys.
    pub fn key_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Number of keys in each row.
    pub fn shape(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }

    pub fn contains(&self, key: &ExpectedKey) -> bool {
        self.count_of(key) > 0
    }

    /// Occurrences of `key` as a primary key.
    pub fn count_of(&self, key: &ExpectedKey) -> usize {
        self.rows.iter().flatten().filter(|k| *k == key).count()
    }

}

impl fmt::Display for ExpectedLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            let keys: Vec<String> = row.iter().map(ToString::to_string).collect();
            write!(f, "{}: [{}]", i + 1, keys.join(" "))?;
            if i + 1 < self.rows.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
