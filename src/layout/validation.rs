// SPDX-License-Identifier: GPL-3.0-only

//! Validation rules for alphabet grids and layout definitions.
//!
//! Checks collect [`ValidationIssue`]s instead of stopping at the first
//! problem. Errors make the grid unusable and are returned together as a
//! [`LayoutError::ValidationError`]; warnings travel with the result.

use std::collections::HashSet;

use crate::app_settings::{EXPECTED_LETTER_ROWS, MAX_GRID_ROWS, SPACEBAR_ROW};
use crate::expected::ExpectedKey;
use crate::layout::base::AlphabetGrid;
use crate::layout::types::{LayoutDefinition, LayoutError, ParseResult, Severity, ValidationIssue};

/// Validates a grid and the accented letters that will be attached to it.
///
/// Returns the warnings, sorted, or every error found.
pub fn validate_grid(
    grid: &AlphabetGrid,
    accented_letters: &[&str],
) -> Result<Vec<ValidationIssue>, LayoutError> {
    let mut issues = Vec::new();
    check_grid(grid, accented_letters, &mut issues);
    split_issues(issues)
}

/// Validates a resolved definition (inheritance already applied).
pub fn validate_definition(
    definition: LayoutDefinition,
) -> Result<ParseResult<LayoutDefinition>, LayoutError> {
    let mut issues = Vec::new();

    if definition.name.trim().is_empty() {
        issues.push(
            ValidationIssue::new(Severity::Warning, "Layout name is empty", "name")
                .with_suggestion("Provide a descriptive name for the layout"),
        );
    }

    let caseless = definition.caseless.unwrap_or(false);
    if caseless && definition.customizer.has_shift_key == Some(true) {
        issues.push(
            ValidationIssue::new(
                Severity::Warning,
                "Caseless layout keeps its shift keys",
                "customizer.has_shift_key",
            )
            .with_suggestion("Set has_shift_key to false for scripts without letter case"),
        );
    }

    let accented: Vec<&str> = definition
        .customizer
        .accented_letters
        .as_ref()
        .map(|accents| accents.keys().map(String::as_str).collect())
        .unwrap_or_default();
    check_grid(&AlphabetGrid::from_definition(&definition), &accented, &mut issues);

    let warnings = split_issues(issues)?;
    Ok(collect_warnings(definition, warnings))
}

fn check_grid(grid: &AlphabetGrid, accented_letters: &[&str], issues: &mut Vec<ValidationIssue>) {
    check_rows(grid.rows(true), "phone_rows", issues);
    if grid.has_tablet_rows() {
        check_rows(grid.rows(false), "tablet_rows", issues);
    }

    for letter in accented_letters {
        let present = [true, false]
            .into_iter()
            .all(|is_phone| contains_label(grid.rows(is_phone), letter));
        if !present {
            issues.push(
                ValidationIssue::new(
                    Severity::Warning,
                    format!("Accents are defined for '{}', which is not on the keyboard", letter),
                    format!("customizer.accented_letters.{}", letter),
                )
                .with_suggestion("Remove the entry or add the letter to the grid"),
            );
        }
    }
}

/// Checks one grid of letter rows.
fn check_rows(rows: &[Vec<ExpectedKey>], field: &str, issues: &mut Vec<ValidationIssue>) {
    if rows.is_empty() {
        issues.push(
            ValidationIssue::new(Severity::Error, "Grid has no rows", field)
                .with_suggestion("Add at least one row of letters"),
        );
        return;
    }

    if rows.len() > MAX_GRID_ROWS {
        issues.push(
            ValidationIssue::new(
                Severity::Error,
                format!(
                    "Grid has {} rows, at most {} are allowed",
                    rows.len(),
                    MAX_GRID_ROWS
                ),
                field,
            )
            .with_suggestion("Remove the extra rows"),
        );
    } else if rows.len() == SPACEBAR_ROW {
        issues.push(
            ValidationIssue::new(
                Severity::Warning,
                format!("Row {} is replaced by the spacebar row", SPACEBAR_ROW),
                format!("{}[{}]", field, SPACEBAR_ROW - 1),
            )
            .with_suggestion("Move these keys to a letter row"),
        );
    } else if rows.len() < EXPECTED_LETTER_ROWS {
        issues.push(ValidationIssue::new(
            Severity::Warning,
            format!(
                "Grid has {} letter rows, {} are usual",
                rows.len(),
                EXPECTED_LETTER_ROWS
            ),
            field,
        ));
    }

    let mut seen = HashSet::new();
    for (row_idx, row) in rows.iter().enumerate() {
        let row_path = format!("{}[{}]", field, row_idx);
        if row.is_empty() {
            issues.push(
                ValidationIssue::new(Severity::Error, "Row is empty", &row_path)
                    .with_suggestion("Remove the row or add keys to it"),
            );
            continue;
        }

        for (key_idx, key) in row.iter().enumerate() {
            let key_path = format!("{}[{}]", row_path, key_idx);
            match key.label_text() {
                Some("") | None => issues.push(
                    ValidationIssue::new(Severity::Error, "Key label is empty", key_path)
                        .with_suggestion("Provide the letter drawn on the key"),
                ),
                Some(label) => {
                    if !seen.insert(label) {
                        issues.push(ValidationIssue::new(
                            Severity::Warning,
                            format!("Duplicate letter '{}'", label),
                            key_path,
                        ));
                    }
                }
            }
        }
    }
}

fn contains_label(rows: &[Vec<ExpectedKey>], label: &str) -> bool {
    rows.iter().flatten().any(|key| key.has_label(label))
}

/// Returns the warnings when there are no errors, else the errors.
fn split_issues(issues: Vec<ValidationIssue>) -> Result<Vec<ValidationIssue>, LayoutError> {
    let (errors, warnings): (Vec<_>, Vec<_>) =
        issues.into_iter().partition(ValidationIssue::is_error);
    if !errors.is_empty() {
        return Err(LayoutError::validation_error(errors));
    }
    Ok(sort_issues(warnings))
}

fn sort_issues(mut issues: Vec<ValidationIssue>) -> Vec<ValidationIssue> {
    // Errors first, then by field path
    issues.sort_by(|a, b| match (a.severity, b.severity) {
        (Severity::Error, Severity::Warning) => std::cmp::Ordering::Less,
        (Severity::Warning, Severity::Error) => std::cmp::Ordering::Greater,
        _ => a.field_path.cmp(&b.field_path),
    });
    issues
}

/// Collects validation warnings and returns a ParseResult.
pub fn collect_warnings<T>(value: T, warnings: Vec<ValidationIssue>) -> ParseResult<T> {
    ParseResult::with_warnings(value, sort_issues(warnings))
}

/// Finds a candidate close to `target`, for "did you mean" suggestions.
///
/// Case-insensitive. An exact match wins; otherwise a candidate matches when
/// it contains `target` or is
/// contained in it, or when it has a similar length and shares most
/// characters.
pub fn find_similar_name<'a>(
    target: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<String> {
    let target_lower = target.to_lowercase();
    if target_lower.is_empty() {
        return None;
    }

    let candidates: Vec<&str> = candidates.into_iter().collect();
    if let Some(exact) = candidates
        .iter()
        .find(|candidate| candidate.to_lowercase() == target_lower)
    {
        return Some(exact.to_string());
    }

    for candidate in candidates {
        let candidate_lower = candidate.to_lowercase();

        if candidate_lower.len().abs_diff(target_lower.len()) <= 2 {
            let shared_chars = target_lower
                .chars()
                .filter(|c| candidate_lower.contains(*c))
                .count();
            if shared_chars >= target_lower.len().saturating_sub(2) {
                return Some(candidate.to_string());
            }
        }

        if candidate_lower.contains(&target_lower) || target_lower.contains(&candidate_lower) {
            return Some(candidate.to_string());
        }
    }

    None
}

// ============================================================================
// Tests
// ============================================================================
