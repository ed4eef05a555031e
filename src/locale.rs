// SPDX-License-Identifier: GPL-3.0-only

//! Locale identifiers for keyboard layouts.
//!
//! Layouts are keyed by a `language_COUNTRY` tag such as `de_DE`. Only the
//! language and country parts are modeled; they are enough to pick the
//! keyboard and the case mapping rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::layout::types::LayoutError;

/// A language with an optional country, e.g. `tr_TR` or `fr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    country: Option<String>,
}

impl Locale {
    /// Creates a locale from already separated parts.
    ///
    /// The language is lower-cased and the country upper-cased, so
    /// `Locale::new("DE", Some("de"))` equals `Locale::new("de", Some("DE"))`.
    pub fn new(language: &str, country: Option<&str>) -> Result<Self, LayoutError> {
        let tag = match country {
            Some(country) => format!("{}_{}", language, country),
            None => language.to_string(),
        };
        if !is_subtag(language) || !country.is_none_or(is_subtag) {
            return Err(LayoutError::invalid_locale(tag));
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            country: country.map(str::to_ascii_uppercase),
        })
    }

    /// Parses a locale tag. Both `_` and `-` separate language and country.
    pub fn parse(tag: &str) -> Result<Self, LayoutError> {
        let mut parts = tag.trim().split(['_', '-']);
        let language = parts.next().unwrap_or_default();
        let country = parts.next();
        if parts.next().is_some() {
            return Err(LayoutError::invalid_locale(tag));
        }
        Self::new(language, country).map_err(|_| LayoutError::invalid_locale(tag))
    }

    /// Lower-case language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Upper-case country code, if any.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Whether upper-casing follows the Turkic dotted/dotless `i` rules.
    pub fn has_dotted_capital_i(&self) -> bool {
        matches!(self.language.as_str(), "tr" | "az")
    }
}

fn is_subtag(part: &str) -> bool {
    (2..=3).contains(&part.len()) && part.chars().all(|c| c.is_ascii_alphabetic())
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}_{}", self.language, country),
            None => write!(f, "{}", self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}
