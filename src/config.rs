// SPDX-License-Identifier: GPL-3.0-only

//! Selection of the layouts the dump tool writes.
//!
//! A [`DumpConfig`] is read from a JSON file; missing fields take their
//! defaults, which cover every registered locale, both form factors and all
//! element ids.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::layout::registry::{find_registration, registered_locales};
use crate::layout::types::{ElementId, FormFactor, LayoutError, Severity, ValidationIssue};
use crate::locale::Locale;

/// Locales, form factors and pages to dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DumpConfig {
    /// Locales to dump, in output order
    pub locales: Vec<Locale>,
    /// Form factors to dump for each locale
    pub form_factors: Vec<FormFactor>,
    /// Pages to dump for each form factor
    pub elements: Vec<ElementId>,
    /// Pretty-print the JSON output
    pub pretty: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            locales: registered_locales()
                .into_iter()
                .filter_map(|tag| Locale::parse(tag).ok())
                .collect(),
            form_factors: vec![FormFactor::Phone, FormFactor::Tablet],
            elements: ElementId::ALL.to_vec(),
            pretty: false,
        }
    }
}

impl DumpConfig {
    /// Loads and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let path_str = path.display().to_string();
        let content =
            fs::read_to_string(path).map_err(|e| LayoutError::io_error_with_path(e, &path_str))?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| LayoutError::json_error_with_path(e, &path_str))?;
        config.validate().map_err(|e| e.with_path(&path_str))?;

        tracing::debug!(
            "Loaded dump config from {}: {} locale(s), {} form factor(s), {} element(s)",
            path_str,
            config.locales.len(),
            config.form_factors.len(),
            config.elements.len()
        );
        Ok(config)
    }

    /// Checks that every list is non-empty and every locale is registered.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut issues = Vec::new();
        for (field, empty) in [
            ("locales", self.locales.is_empty()),
            ("form_factors", self.form_factors.is_empty()),
            ("elements", self.elements.is_empty()),
        ] {
            if empty {
                issues.push(
                    ValidationIssue::new(Severity::Error, "List is empty", field)
                        .with_suggestion("Remove the field to use the default"),
                );
            }
        }
        if !issues.is_empty() {
            return Err(LayoutError::validation_error(issues));
        }

        for locale in &self.locales {
            find_registration(locale)?;
        }
        Ok(())
    }

    /// Every (locale, form factor, element) combination, in output order.
    pub fn requests(&self) -> impl Iterator<Item = (&Locale, FormFactor, ElementId)> + '_ {
        self.locales.iter().flat_map(move |locale| {
            self.form_factors.iter().flat_map(move |form_factor| {
                self.elements
                    .iter()
                    .map(move |element| (locale, *form_factor, *element))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    /// Test 1: Defaults cover everything
    #[test]
    fn test_default_config() {
        let config = DumpConfig::default();

        assert_eq!(config.locales.len(), registered_locales().len());
        assert_eq!(config.form_factors.len(), 2);
        assert_eq!(config.elements.len(), ElementId::ALL.len());
        assert!(!config.pretty);
        assert!(config.validate().is_ok());
    }

    /// Test 2: Partial files keep the other defaults
    #[test]
    fn test_load_partial_config() {
        let file = write_config(r#"{"locales": ["de_DE"], "pretty": true}"#);

        let config = DumpConfig::load(file.path()).unwrap();
        assert_eq!(config.locales, vec![Locale::parse("de_DE").unwrap()]);
        assert_eq!(config.form_factors.len(), 2);
        assert!(config.pretty);
    }

    /// Test 3: Element and form factor names use snake case
    #[test]
    fn test_load_names() {
        let file = write_config(
            r#"{"form_factors": ["tablet"], "elements": ["alphabet_shift_locked", "symbols"]}"#,
        );

        let config = DumpConfig::load(file.path()).unwrap();
        assert_eq!(config.form_factors, vec![FormFactor::Tablet]);
        assert_eq!(
            config.elements,
            vec![ElementId::AlphabetShiftLocked, ElementId::Symbols]
        );
    }

    /// Test 4: Invalid files report the path
    #[test]
    fn test_load_errors() {
        let file = write_config(r#"{"locale": ["de_DE"]}"#);
        match DumpConfig::load(file.path()).unwrap_err() {
            LayoutError::JsonError { file_path, .. } => assert!(file_path.is_some()),
            other => panic!("Expected JsonError, got {}", other),
        }

        let file = write_config(r#"{"elements": []}"#);
        match DumpConfig::load(file.path()).unwrap_err() {
            LayoutError::ValidationError { issues, file_path } => {
                assert_eq!(issues[0].field_path, "elements");
                assert!(file_path.is_some());
            }
            other => panic!("Expected ValidationError, got {}", other),
        }

        let missing = DumpConfig::load(Path::new("/nonexistent/dump.json")).unwrap_err();
        assert!(matches!(missing, LayoutError::IoError { .. }));
    }

    /// Test 5: Unregistered locales are rejected
    #[test]
    fn test_unregistered_locale() {
        let file = write_config(r#"{"locales": ["pt_BR"]}"#);
        let err = DumpConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, LayoutError::UnknownLocale { .. }));
    }

    /// Test 6: Requests enumerate every combination in order
    #[test]
    fn test_requests() {
        let config = DumpConfig {
            locales: vec![Locale::parse("en_US").unwrap(), Locale::parse("fr_FR").unwrap()],
            form_factors: vec![FormFactor::Phone, FormFactor::Tablet],
            elements: vec![ElementId::Alphabet, ElementId::Symbols],
            pretty: false,
        };

        let requests: Vec<_> = config.requests().collect();
        assert_eq!(requests.len(), 8);
        assert_eq!(requests[0].0.to_string(), "en_US");
        assert_eq!(requests[1], (&config.locales[0], FormFactor::Phone, ElementId::Symbols));
        assert_eq!(requests[2].1, FormFactor::Tablet);
        assert_eq!(requests[7].0.to_string(), "fr_FR");
    }
}
