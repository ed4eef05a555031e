// SPDX-License-Identifier: GPL-3.0-only

//! Core data types for layout definitions and composition.
//!
//! This module defines the error types, validation structures, element
//! selectors and the serde model of the JSON layout definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::expected::{ExpectedKey, key, keys};
use crate::layout::customizer::{AngleQuoteOrder, CurrencyZone, QuoteOrder};
use crate::locale::Locale;

// ============================================================================
// Error Handling Types
// ============================================================================

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal error that prevents the definition from being used
    Error,
    /// Non-fatal issue that should be addressed
    Warning,
}

/// A validation issue discovered while checking a layout definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Severity level (Error or Warning)
    pub severity: Severity,
    /// Human-readable description of the issue
    pub message: String,
    /// Path to the field that caused the issue (e.g., "phone_rows[1][2]")
    pub field_path: String,
    /// Optional suggestion for how to fix the issue
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Creates a new validation issue.
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        field_path: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            field_path: field_path.into(),
            suggestion: None,
        }
    }

    /// Adds a suggestion to the validation issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity_str = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        };

        write!(f, "[{}] {}: {}", severity_str, self.field_path, self.message)?;

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Error type for loading, validating and composing layouts.
///
/// Variants carry context fields so messages can name the offending resource
/// and suggest a fix.
#[derive(Debug)]
pub enum LayoutError {
    /// I/O error while reading a definition or config file
    IoError {
        /// The underlying I/O error
        source: std::io::Error,
        /// Optional file path that caused the error
        file_path: Option<String>,
        /// Optional suggestion for fixing the error
        suggestion: Option<String>,
    },

    /// JSON parsing error
    JsonError {
        /// The underlying JSON parsing error
        source: serde_json::Error,
        /// Optional file or resource being parsed
        file_path: Option<String>,
        /// Line number where the error occurred (from serde_json)
        line_number: Option<usize>,
        /// Optional suggestion for fixing the error
        suggestion: Option<String>,
    },

    /// Validation errors found in a definition
    ValidationError {
        /// List of validation issues found
        issues: Vec<ValidationIssue>,
        /// Optional file or resource being validated
        file_path: Option<String>,
    },

    /// Circular `inherits` chain between definitions
    CircularReference {
        /// Description of the circular dependency
        message: String,
        /// Chain of definitions forming the cycle (e.g., "a.json -> b.json -> a.json")
        chain: String,
        /// Optional suggestion for breaking the cycle
        suggestion: Option<String>,
    },

    /// Maximum inheritance depth exceeded
    MaxDepthExceeded {
        /// Description of what exceeded the depth limit
        message: String,
        /// The depth limit that was exceeded
        max_depth: usize,
        /// The actual depth reached
        actual_depth: usize,
        /// Optional suggestion for reducing depth
        suggestion: Option<String>,
    },

    /// An embedded definition resource does not exist
    ResourceNotFound {
        /// Resource name that was looked up
        name: String,
        /// Optional suggestion (closest known resource)
        suggestion: Option<String>,
    },

    /// No layout is registered for a locale
    UnknownLocale {
        /// The requested locale
        locale: String,
        /// Optional suggestion (closest registered locale)
        suggestion: Option<String>,
    },

    /// A locale tag could not be parsed
    InvalidLocale {
        /// The rejected tag
        tag: String,
    },

    /// An element id name could not be parsed
    InvalidElement {
        /// The rejected name
        name: String,
        /// Suggestion listing the accepted names
        suggestion: Option<String>,
    },

    /// A key expected in a layout is missing
    KeyNotFound {
        /// Label that was looked up
        label: String,
    },
}

impl LayoutError {
    /// Creates an I/O error with file path.
    pub fn io_error_with_path(source: std::io::Error, file_path: impl Into<String>) -> Self {
        Self::IoError {
            source,
            file_path: Some(file_path.into()),
            suggestion: Some("Check that the file exists and you have read permissions".into()),
        }
    }

    /// Creates a JSON parsing error with context.
    pub fn json_error(source: serde_json::Error) -> Self {
        let line_number = source.line().into();
        Self::JsonError {
            source,
            file_path: None,
            line_number,
            suggestion: Some("Check the JSON syntax at the indicated line".into()),
        }
    }

    /// Creates a JSON parsing error with file path.
    pub fn json_error_with_path(source: serde_json::Error, file_path: impl Into<String>) -> Self {
        let line_number = source.line().into();
        Self::JsonError {
            source,
            file_path: Some(file_path.into()),
            line_number,
            suggestion: Some("Check the JSON syntax at the indicated line".into()),
        }
    }

    /// Creates a validation error from a list of issues.
    pub fn validation_error(issues: Vec<ValidationIssue>) -> Self {
        Self::ValidationError {
            issues,
            file_path: None,
        }
    }

    /// Creates a circular reference error.
    pub fn circular_reference(message: impl Into<String>, chain: impl Into<String>) -> Self {
        Self::CircularReference {
            message: message.into(),
            chain: chain.into(),
            suggestion: Some("Remove or break the circular dependency".into()),
        }
    }

    /// Creates a max depth exceeded error.
    pub fn max_depth_exceeded(
        message: impl Into<String>,
        max_depth: usize,
        actual_depth: usize,
    ) -> Self {
        Self::MaxDepthExceeded {
            message: message.into(),
            max_depth,
            actual_depth,
            suggestion: Some(format!("Reduce inheritance depth to {} or less", max_depth)),
        }
    }

    /// Creates a missing resource error.
    pub fn resource_not_found(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::ResourceNotFound {
            name: name.into(),
            suggestion,
        }
    }

    /// Creates an unknown locale error.
    pub fn unknown_locale(locale: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::UnknownLocale {
            locale: locale.into(),
            suggestion,
        }
    }

    pub fn invalid_locale(tag: impl Into<String>) -> Self {
        Self::InvalidLocale { tag: tag.into() }
    }

    pub fn key_not_found(label: impl Into<String>) -> Self {
        Self::KeyNotFound {
            label: label.into(),
        }
    }

    /// Attaches a file or resource name to errors that lack one.
    pub fn with_path(self, path: &str) -> Self {
        match self {
            LayoutError::ValidationError {
                issues,
                file_path: None,
            } => LayoutError::ValidationError {
                issues,
                file_path: Some(path.to_string()),
            },
            LayoutError::JsonError {
                source,
                file_path: None,
                line_number,
                suggestion,
            } => LayoutError::JsonError {
                source,
                file_path: Some(path.to_string()),
                line_number,
                suggestion,
            },
            other => other,
        }
    }
}

impl LayoutError {
    /// The fix hint carried by this error, if any.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            LayoutError::IoError { suggestion, .. }
            | LayoutError::JsonError { suggestion, .. }
            | LayoutError::CircularReference { suggestion, .. }
            | LayoutError::MaxDepthExceeded { suggestion, .. }
            | LayoutError::ResourceNotFound { suggestion, .. }
            | LayoutError::UnknownLocale { suggestion, .. }
            | LayoutError::InvalidElement { suggestion, .. } => suggestion.as_deref(),
            LayoutError::InvalidLocale { .. } => Some("Use a tag like 'en_US' or 'de'"),
            LayoutError::ValidationError { .. } | LayoutError::KeyNotFound { .. } => None,
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::IoError {
                source, file_path, ..
            } => match file_path {
                Some(path) => write!(f, "Cannot read '{}': {}", path, source)?,
                None => write!(f, "I/O error: {}", source)?,
            },
            LayoutError::JsonError {
                source,
                file_path,
                line_number,
                ..
            } => {
                f.write_str("Invalid JSON")?;
                if let Some(path) = file_path {
                    write!(f, " in '{}'", path)?;
                }
                if let Some(line) = line_number {
                    write!(f, " (line {})", line)?;
                }
                write!(f, ": {}", source)?;
            }
            LayoutError::ValidationError { issues, file_path } => {
                match file_path {
                    Some(path) => write!(f, "Layout definition '{}' is invalid", path)?,
                    None => f.write_str("Layout definition is invalid")?,
                }
                write!(f, " ({} issue(s))", issues.len())?;
                for (i, issue) in issues.iter().enumerate() {
                    write!(f, "\n  {}. {}", i + 1, issue)?;
                }
            }
            LayoutError::CircularReference { message, chain, .. } => {
                write!(f, "Inheritance cycle: {}\n  Chain: {}", message, chain)?;
            }
            LayoutError::MaxDepthExceeded {
                message,
                max_depth,
                actual_depth,
                ..
            } => write!(
                f,
                "Inheritance too deep: {} ({} levels, at most {})",
                message, actual_depth, max_depth
            )?,
            LayoutError::ResourceNotFound { name, .. } => {
                write!(f, "Layout resource '{}' not found", name)?;
            }
            LayoutError::UnknownLocale { locale, .. } => {
                write!(f, "No layout registered for locale '{}'", locale)?;
            }
            LayoutError::InvalidLocale { tag } => write!(f, "Invalid locale tag '{}'", tag)?,
            LayoutError::InvalidElement { name, .. } => {
                write!(f, "Unknown element id '{}'", name)?;
            }
            LayoutError::KeyNotFound { label } => {
                write!(f, "Can't find key '{}' in layout", label)?;
            }
        }
        if let Some(hint) = self.suggestion() {
            write!(f, "\n  Suggestion: {}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::IoError { source, .. } => Some(source),
            LayoutError::JsonError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            source: err,
            file_path: None,
            suggestion: None,
        }
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::json_error(err)
    }
}

// ============================================================================
// ParseResult Type
// ============================================================================

/// Result of successfully parsing a definition with optional warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult<T> {
    /// The successfully parsed value
    pub layout: T,
    /// Non-fatal validation warnings
    pub warnings: Vec<ValidationIssue>,
}

impl<T> ParseResult<T> {
    /// Creates a new parse result with no warnings.
    pub fn new(layout: T) -> Self {
        Self {
            layout,
            warnings: Vec::new(),
        }
    }

    /// Creates a new parse result with warnings.
    pub fn with_warnings(layout: T, warnings: Vec<ValidationIssue>) -> Self {
        Self { layout, warnings }
    }

    /// Returns true if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Consumes the result and returns the value, discarding warnings.
    pub fn into_layout(self) -> T {
        self.layout
    }
}

// ============================================================================
// Element Selection
// ============================================================================

/// Keyboard page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementId {
    Alphabet,
    AlphabetManualShifted,
    AlphabetAutomaticShifted,
    AlphabetShiftLocked,
    AlphabetShiftLockShifted,
    Symbols,
    SymbolsShifted,
    Phone,
    PhoneSymbols,
    Number,
}

impl ElementId {
    /// Every element id, in declaration order.
    pub const ALL: [ElementId; 10] = [
        ElementId::Alphabet,
        ElementId::AlphabetManualShifted,
        ElementId::AlphabetAutomaticShifted,
        ElementId::AlphabetShiftLocked,
        ElementId::AlphabetShiftLockShifted,
        ElementId::Symbols,
        ElementId::SymbolsShifted,
        ElementId::Phone,
        ElementId::PhoneSymbols,
        ElementId::Number,
    ];

    /// The four shifted alphabet variants.
    pub const ALPHABET_SHIFTED: [ElementId; 4] = [
        ElementId::AlphabetManualShifted,
        ElementId::AlphabetAutomaticShifted,
        ElementId::AlphabetShiftLocked,
        ElementId::AlphabetShiftLockShifted,
    ];

    pub fn is_alphabet_shifted(self) -> bool {
        Self::ALPHABET_SHIFTED.contains(&self)
    }

    pub fn is_symbols(self) -> bool {
        matches!(self, ElementId::Symbols | ElementId::SymbolsShifted)
    }

    pub fn name(self) -> &'static str {
        match self {
            ElementId::Alphabet => "alphabet",
            ElementId::AlphabetManualShifted => "alphabet_manual_shifted",
            ElementId::AlphabetAutomaticShifted => "alphabet_automatic_shifted",
            ElementId::AlphabetShiftLocked => "alphabet_shift_locked",
            ElementId::AlphabetShiftLockShifted => "alphabet_shift_lock_shifted",
            ElementId::Symbols => "symbols",
            ElementId::SymbolsShifted => "symbols_shifted",
            ElementId::Phone => "phone",
            ElementId::PhoneSymbols => "phone_symbols",
            ElementId::Number => "number",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementId {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        ElementId::ALL
            .into_iter()
            .find(|element| element.name() == wanted)
            .ok_or_else(|| LayoutError::InvalidElement {
                name: s.to_string(),
                suggestion: Some(format!(
                    "Use one of: {}",
                    ElementId::ALL.map(ElementId::name).join(", ")
                )),
            })
    }
}

/// Phone or tablet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormFactor {
    Phone,
    Tablet,
}

impl FormFactor {
    pub fn is_phone(self) -> bool {
        self == FormFactor::Phone
    }
}

// ============================================================================
// Layout Definition Model
// ============================================================================

/// A key in a definition: a bare label or a label with more keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeySpec {
    /// Plain letter key
    Label(String),
    /// Letter key with long-press keys
    WithMoreKeys {
        label: String,
        #[serde(default)]
        more_keys: Vec<String>,
    },
}

impl KeySpec {
    pub fn label(&self) -> &str {
        match self {
            KeySpec::Label(label) => label,
            KeySpec::WithMoreKeys { label, .. } => label,
        }
    }

    pub fn to_expected_key(&self) -> ExpectedKey {
        match self {
            KeySpec::Label(label) => key(label),
            KeySpec::WithMoreKeys { label, more_keys } => {
                let more: Vec<&str> = more_keys.iter().map(String::as_str).collect();
                key(label).with_more_keys(keys(&more))
            }
        }
    }
}

/// Rows of definition keys.
pub type GridSpec = Vec<Vec<KeySpec>>;

/// Converts definition rows into expected key rows.
pub fn grid_to_rows(grid: &GridSpec) -> Vec<Vec<ExpectedKey>> {
    grid.iter()
        .map(|row| row.iter().map(KeySpec::to_expected_key).collect())
        .collect()
}

/// Per-locale policy settings of a definition. Unset fields fall back to the
/// parent definition, then to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomizerSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyZone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_quotes: Option<QuoteOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_quotes: Option<QuoteOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_angle_quotes: Option<AngleQuoteOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_angle_quotes: Option<AngleQuoteOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_shift_key: Option<bool>,
    /// Letter to accented more keys
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accented_letters: Option<BTreeMap<String, Vec<String>>>,
    /// Keys appended to the punctuation more keys
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_punctuation: Option<Vec<String>>,
}

impl CustomizerSpec {
    /// Fills unset fields from `parent`.
    pub fn merged_with(self, parent: CustomizerSpec) -> CustomizerSpec {
        CustomizerSpec {
            currency: self.currency.or(parent.currency),
            double_quotes: self.double_quotes.or(parent.double_quotes),
            single_quotes: self.single_quotes.or(parent.single_quotes),
            double_angle_quotes: self.double_angle_quotes.or(parent.double_angle_quotes),
            single_angle_quotes: self.single_angle_quotes.or(parent.single_angle_quotes),
            has_shift_key: self.has_shift_key.or(parent.has_shift_key),
            accented_letters: self.accented_letters.or(parent.accented_letters),
            extra_punctuation: self.extra_punctuation.or(parent.extra_punctuation),
        }
    }
}

/// A keyboard definition as stored in a JSON resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutDefinition {
    /// Layout name (e.g., "qwerty")
    pub name: String,

    /// Locale the definition is written for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,

    /// Resource name of the parent definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherits: Option<String>,

    /// Letter rows for phones, without function keys
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phone_rows: GridSpec,

    /// Letter rows for tablets; defaults to the phone rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet_rows: Option<GridSpec>,

    /// True for scripts without letter case; such layouts have no shifted page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caseless: Option<bool>,

    /// Locale policy
    #[serde(default)]
    pub customizer: CustomizerSpec,
}
