// SPDX-License-Identifier: GPL-3.0-only

//! Loading of JSON layout definitions.
//!
//! Definitions ship inside the binary (embedded from `resources/layouts` at
//! compile time) and can also be read from the filesystem, for grids that
//! are not part of the registry. Every entry point resolves the `inherits`
//! chain against the embedded resources and validates the result.

use rust_embed::Embed;
use std::fs;

use crate::app_settings::LAYOUT_RESOURCE_DIR;
use crate::layout::inheritance::resolve_inheritance;
use crate::layout::types::{LayoutDefinition, LayoutError, ParseResult};
use crate::layout::validation::{find_similar_name, validate_definition};

/// Layout definitions embedded at compile time.
#[derive(Embed)]
#[folder = "resources/layouts"]
struct LayoutResources;

const RESOURCE_EXTENSION: &str = ".json";

/// Names of the embedded definitions, sorted, without extension.
pub fn embedded_resource_names() -> Vec<String> {
    let mut names: Vec<String> = LayoutResources::iter()
        .filter_map(|file| {
            file.strip_suffix(RESOURCE_EXTENSION)
                .map(str::to_string)
        })
        .collect();
    names.sort();
    names
}

/// Loads, resolves and validates the embedded definition `name`.
///
/// # Example
///
/// ```rust,ignore
/// use expected_layouts::layout::parser::load_embedded_definition;
///
/// let result = load_embedded_definition("de_DE")?;
/// println!("Loaded layout: {}", result.layout.name);
/// ```
pub fn load_embedded_definition(name: &str) -> Result<ParseResult<LayoutDefinition>, LayoutError> {
    let definition = read_embedded_raw(name)?;
    finish(definition, Some(name))
}

/// Parses a definition from a JSON file.
///
/// I/O errors (missing file, permissions) and JSON errors (syntax, unknown
/// fields) are reported separately, both with the file path. A parent named
/// in `inherits` is looked up among the embedded definitions.
pub fn parse_definition_file(path: &str) -> Result<ParseResult<LayoutDefinition>, LayoutError> {
    let json_str =
        fs::read_to_string(path).map_err(|e| LayoutError::io_error_with_path(e, path))?;

    let definition: LayoutDefinition = serde_json::from_str(&json_str)
        .map_err(|e| LayoutError::json_error_with_path(e, path))?;

    tracing::debug!("Parsed layout definition '{}' from {}", definition.name, path);
    finish(definition, Some(path))
}

/// Parses a definition from a JSON string.
pub fn parse_definition_from_string(json: &str) -> Result<ParseResult<LayoutDefinition>, LayoutError> {
    let definition: LayoutDefinition = serde_json::from_str(json).map_err(LayoutError::json_error)?;
    finish(definition, None)
}

fn finish(
    definition: LayoutDefinition,
    origin: Option<&str>,
) -> Result<ParseResult<LayoutDefinition>, LayoutError> {
    let attach = |e: LayoutError| match origin {
        Some(path) => e.with_path(path),
        None => e,
    };
    let resolved = resolve_inheritance(definition, origin).map_err(attach)?;
    validate_definition(resolved).map_err(attach)
}

/// Reads and parses an embedded definition without resolving inheritance.
pub(crate) fn read_embedded_raw(name: &str) -> Result<LayoutDefinition, LayoutError> {
    let resource = name.strip_suffix(RESOURCE_EXTENSION).unwrap_or(name);
    let file_name = format!("{}{}", resource, RESOURCE_EXTENSION);

    let file = LayoutResources::get(&file_name).ok_or_else(|| {
        let names = embedded_resource_names();
        let suggestion = find_similar_name(resource, names.iter().map(String::as_str))
            .map(|similar| format!("Did you mean '{}'?", similar))
            .or_else(|| Some(format!("Add {}/{}", LAYOUT_RESOURCE_DIR, file_name)));
        LayoutError::resource_not_found(resource, suggestion)
    })?;

    serde_json::from_slice(file.data.as_ref())
        .map_err(|e| LayoutError::json_error_with_path(e, file_name))
}

// ============================================================================
// Tests
// ============================================================================
